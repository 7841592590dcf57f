use std::path::PathBuf;

use clap::{builder::PossibleValuesParser, value_parser, Arg, ArgAction, Command};

use otter_bench::config::defaults;

pub fn cli() -> Command {
    Command::new("otter_bench")
        .about("Runs SAT solvers on instances, and checks what they say")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)

        .arg(Arg::new("work_dir")
            .long("work-dir")
            .global(true)
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help("The directory in which a directory is made for the output of each job.")
            .long_help("The directory in which a directory is made for the output of each job.
Default: the temporary directory of the system.

Directories are kept after a run, so the output of each solver may be inspected."))

        .arg(Arg::new("poll_interval")
            .long("poll-interval")
            .global(true)
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help(format!("Milliseconds between checks for completed jobs.
Default: {}", defaults::POLL_INTERVAL.as_millis())))

        .arg(Arg::new("strict_lines")
            .long("strict-lines")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Treat solver output lines without a c, s, or v prefix as an invalid solution."))

        .arg(Arg::new("check_header")
            .long("check-header")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Require the problem line of an instance to agree with the clauses read."))

        .subcommand(check())
        .subcommand(schedule())
        .subcommand(validate())
}

fn expectation_args(command: Command) -> Command {
    command
        .arg(Arg::new("satisfiable")
            .short('s')
            .action(ArgAction::SetTrue)
            .conflicts_with("expect")
            .help("The instance is known to be satisfiable."))

        .arg(Arg::new("expect")
            .long("expect")
            .value_parser(PossibleValuesParser::new(["sat", "unsat", "unknown"]))
            .ignore_case(true)
            .num_args(1)
            .help("What is known about the satisfiability of the instance."))
}

fn program_arg() -> Arg {
    Arg::new("program")
        .required(true)
        .num_args(1..)
        .trailing_var_arg(true)
        .allow_hyphen_values(true)
        .value_parser(value_parser!(String))
        .help(format!(
            "The solver and its arguments, with {} replaced by the path to an instance and {} by what is expected of the instance.",
            defaults::INPUT_PLACEHOLDER,
            defaults::EXPECTED_PLACEHOLDER
        ))
}

fn check() -> Command {
    let command = Command::new("check")
        .about("Runs a solver on an instance some number of times, and reports the mean time taken")

        .arg(Arg::new("time_limit")
            .short('t')
            .value_parser(value_parser!(u64))
            .num_args(1)
            .help("Seconds each run of the solver is allowed, with 0 for no limit."))

        .arg(Arg::new("repeat")
            .short('r')
            .value_parser(value_parser!(usize))
            .num_args(1)
            .help(format!("The number of times to run the solver.
Default: {}", defaults::CHECK_REPEAT)))

        .arg(Arg::new("path_template")
            .short('p')
            .value_parser(value_parser!(String))
            .num_args(1)
            .help(format!("The path of the instance, with {} replaced by the instance name.", defaults::PATH_PLACEHOLDER)))

        .arg(Arg::new("instance")
            .required(true)
            .value_parser(value_parser!(String))
            .help("The name of the instance."));

    expectation_args(command).arg(program_arg())
}

fn schedule() -> Command {
    Command::new("schedule")
        .about("Runs a solver on many instances, with a bounded number of runs at once")

        .arg(Arg::new("track")
            .long("track")
            .value_parser(PossibleValuesParser::new(["random", "application", "crafted"]))
            .ignore_case(true)
            .value_delimiter(',')
            .num_args(1..)
            .help("The tracks to select instances from.
Default: all"))

        .arg(Arg::new("level")
            .long("level")
            .value_parser(PossibleValuesParser::new(["easy", "medium", "hard"]))
            .ignore_case(true)
            .value_delimiter(',')
            .num_args(1..)
            .help("The levels of instance to select.
Default: all"))

        .arg(Arg::new("include_unknown")
            .long("include-unknown")
            .action(ArgAction::SetTrue)
            .help("Include instances whose satisfiability is unknown."))

        .arg(Arg::new("selection_dir")
            .long("selection-dir")
            .value_parser(value_parser!(PathBuf))
            .num_args(1)
            .help("The directory containing selection-<track>.txt lists.
Default: the current directory"))

        .arg(Arg::new("instances")
            .long("instances")
            .value_parser(value_parser!(String))
            .num_args(1)
            .conflicts_with_all(["track", "level", "include_unknown", "selection_dir"])
            .help("A glob pattern of instances to use in place of selection lists."))

        .arg(Arg::new("time_limit")
            .long("timeout")
            .value_parser(value_parser!(u64))
            .num_args(1)
            .help("Seconds each run of the solver is allowed, with 0 for no limit."))

        .arg(Arg::new("max_jobs")
            .long("maxjobs")
            .value_parser(value_parser!(usize))
            .num_args(1)
            .help(format!("The maximum number of solvers running at once.
Default: {}", defaults::MAX_JOBS)))

        .arg(Arg::new("repeat")
            .long("repeat")
            .value_parser(value_parser!(usize))
            .num_args(1)
            .help(format!("The number of times to run the solver on each instance.
Default: {}", defaults::SCHEDULE_REPEAT)))

        .arg(program_arg())
}

fn validate() -> Command {
    let command = Command::new("validate")
        .about("Checks stored solver output against an instance")

        .arg(Arg::new("instance")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF file of the instance, possibly compressed."))

        .arg(Arg::new("output")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The output of a solver on the instance."));

    expectation_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify() {
        cli().debug_assert();
    }

    #[test]
    fn program_keeps_hyphens() {
        let matches = cli()
            .try_get_matches_from(["otter_bench", "check", "-r", "1", "x.cnf", "solver", "--model", "{input}"])
            .unwrap();
        let (_, check) = matches.subcommand().unwrap();
        let program: Vec<&String> = check.get_many::<String>("program").unwrap().collect();
        assert_eq!(program, ["solver", "--model", "{input}"]);
    }
}
