#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

use std::{
    cell::RefCell,
    path::PathBuf,
    sync::{atomic::AtomicBool, Arc},
};

use clap::ArgMatches;

use otter_bench::{
    aggregate::run_repeated,
    builder::read_instance,
    config::defaults,
    reports::{Report, Status},
    runner::{Evaluator, Interrupt, Invocation, WorkItem},
    scheduler::{CallbackProgress, Progress, Scheduler},
    selection::glob_items,
    types::err,
    validator::check_output,
};

mod interrupt;
mod parse;
mod progress;

use progress::ProgressLine;

/// The exit code on a mistake in the arguments given.
const USAGE: i32 = 2;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let code = match matches.subcommand() {
        Some(("check", args)) => check(args),
        Some(("schedule", args)) => schedule(args),
        Some(("validate", args)) => validate(args),
        _ => USAGE,
    };

    std::process::exit(code)
}

fn invocation_from_args(args: &ArgMatches) -> Option<Invocation> {
    let program: Vec<String> = match args.get_many::<String>("program") {
        Some(tokens) => tokens.cloned().collect(),
        None => Vec::default(),
    };

    match Invocation::new(program) {
        Ok(invocation) => Some(invocation),
        Err(e) => {
            eprintln!("c Invalid program: {}", err::ErrorKind::from(e));
            None
        }
    }
}

fn new_interrupt() -> Interrupt {
    let interrupt = Arc::new(AtomicBool::new(false));
    interrupt::install(interrupt.clone());
    interrupt
}

/// Repeated trials of a single instance, printed as `instance return_code status mean ci`.
fn check(args: &ArgMatches) -> i32 {
    let config = parse::config::config_from_args(args, defaults::CHECK_REPEAT);
    let Some(invocation) = invocation_from_args(args) else {
        return USAGE;
    };
    let Some(instance) = args.get_one::<String>("instance") else {
        return USAGE;
    };

    let item = WorkItem::from_name(instance, &config);
    let evaluator = Evaluator::from_config(&config, invocation, new_interrupt());

    let aggregate = run_repeated(&evaluator, item, config.repeat.value, &mut |report: Report| {
        log::debug!("{report}");
        eprint!(".");
    });
    eprintln!();

    match aggregate {
        Some(aggregate) => {
            if aggregate.status == Status::Interrupted {
                eprintln!("interrupted");
            }
            println!("{aggregate}");
            aggregate.status.exit_code()
        }

        None => {
            println!("{instance} - {} - -", Status::Error);
            Status::Error.exit_code()
        }
    }
}

/// Bounded-parallel trials of selected instances, printed as one line per report.
fn schedule(args: &ArgMatches) -> i32 {
    let config = parse::config::config_from_args(args, defaults::SCHEDULE_REPEAT);
    let Some(invocation) = invocation_from_args(args) else {
        return USAGE;
    };
    if !invocation.takes_input() {
        eprintln!("c No {} in the program, so every job runs the same command", defaults::INPUT_PLACEHOLDER);
    }

    let items = match args.get_one::<String>("instances") {
        Some(pattern) => glob_items(pattern),
        None => parse::config::selection_from_args(args).items(),
    };
    let items = match items {
        Ok(items) => items,
        Err(e) => {
            eprintln!("c Failed to select instances: {}", err::ErrorKind::from(e));
            return USAGE;
        }
    };
    eprintln!("c Evaluating {} instances, {} at once", items.len(), config.max_jobs.value);

    let scheduler = Scheduler::new(&config, invocation, new_interrupt());

    let line = RefCell::new(ProgressLine::new());
    let mut sink = |report: Report| {
        line.borrow_mut().clear();
        println!("{report}");
    };
    let mut progress = |progress: &Progress| line.borrow_mut().update(progress);

    let summary = scheduler.run(items, &mut sink, Some(&mut progress as &mut CallbackProgress));
    line.borrow_mut().finish();

    if summary.interrupted {
        eprintln!("interrupted");
    }
    0
}

/// A stored solver output checked against an instance, printed as a status.
fn validate(args: &ArgMatches) -> i32 {
    let config = parse::config::config_from_args(args, defaults::CHECK_REPEAT);
    let (Some(instance), Some(output)) = (
        args.get_one::<PathBuf>("instance"),
        args.get_one::<PathBuf>("output"),
    ) else {
        return USAGE;
    };

    let status = match read_instance(instance, &config.dimacs) {
        Err(e) => {
            eprintln!("c Failed to read {instance:?}: {}", err::ErrorKind::from(e));
            Status::Error
        }

        Ok((formula, _info)) => match std::fs::read(output) {
            Err(e) => {
                eprintln!("c Failed to read {output:?}: {e}");
                Status::Error
            }

            Ok(bytes) => check_output(
                &formula,
                &String::from_utf8_lossy(&bytes),
                config.expectation,
                config.strict_solution_lines,
            ),
        },
    };

    println!("{status}");
    status.exit_code()
}
