use std::io::Read;

use crate::{
    builder::DimacsConfig,
    config::Config,
    misc::log::targets::{self},
    reports::{Report, Status},
    runner::{Exit, Instance, Interrupt, Invocation, RunOutcome, Runner},
    solution::parse_solution,
    structures::{formula::Formula, verdict::Verdict},
    validator::validate,
};

/// A solver invocation, together with how to run it and how to read the results.
///
/// An evaluator turns a trial of an instance into a report, by way of the runner, the solution parser, and the validator.
#[derive(Clone, Debug)]
pub struct Evaluator {
    pub runner: Runner,

    pub invocation: Invocation,

    pub dimacs: DimacsConfig,

    pub strict_solution_lines: bool,
}

impl Evaluator {
    pub fn from_config(config: &Config, invocation: Invocation, interrupt: Interrupt) -> Self {
        Evaluator {
            runner: Runner::from_config(config, interrupt),
            invocation,
            dimacs: config.dimacs,
            strict_solution_lines: config.strict_solution_lines,
        }
    }

    /// Evaluates a trial of the instance.
    pub fn evaluate(&self, instance: &Instance, trial: usize) -> Report {
        let item = &instance.item;

        if self.runner.interrupted() {
            return Report::without_process(&item.name, trial, &item.tags, Status::Interrupted);
        }

        let dir = match self.runner.job_dir(&item.name) {
            Ok(dir) => dir,
            Err(e) => {
                log::error!(target: targets::RUNNER, "No directory for {}: {e:?}", item.name);
                return Report::without_process(&item.name, trial, &item.tags, Status::from(&e));
            }
        };

        let args = self.invocation.instantiate(&item.path, item.expectation);
        let outcome = match self.runner.launch(&args, &dir) {
            Ok(outcome) => outcome,
            Err(e) => {
                return Report::without_process(&item.name, trial, &item.tags, Status::from(&e));
            }
        };

        let (return_code, status) = match outcome.exit {
            Exit::TimedOut => (None, Status::TimedOut),
            Exit::Interrupted => (None, Status::Interrupted),
            Exit::Finished(124) => (Some(124), Status::TimedOut),
            Exit::Finished(127) => (Some(127), Status::MissingExecutable),
            Exit::Finished(code) => (Some(code), self.certify(instance, &outcome)),
            Exit::Signalled => (None, self.certify(instance, &outcome)),
        };

        log::info!(target: targets::RUNNER, "{} trial {trial}: {status}", item.name);

        Report {
            instance: item.name.clone(),
            trial,
            tags: item.tags.clone(),
            return_code,
            status,
            elapsed: Some(outcome.elapsed.as_secs_f64()),
        }
    }

    /// The status of the output of a solver which stopped of its own accord.
    fn certify(&self, instance: &Instance, outcome: &RunOutcome) -> Status {
        let mut bytes = Vec::default();
        if let Err(e) = std::fs::File::open(&outcome.stdout).and_then(|mut f| f.read_to_end(&mut bytes)) {
            log::error!(target: targets::RUNNER, "Failed to read {:?}: {e}", outcome.stdout);
            return Status::Error;
        }
        let output = String::from_utf8_lossy(&bytes);

        let verdict = match parse_solution(&output, self.strict_solution_lines) {
            Ok(verdict) => verdict,
            Err(e) => {
                log::info!(target: targets::SOLUTION, "Malformed output in {:?}: {e:?}", outcome.stdout);
                return Status::from(e);
            }
        };

        match verdict {
            // Only an assignment needs the formula.
            Verdict::Satisfiable(_) => match instance.formula(&self.dimacs) {
                Ok(formula) => validate(formula, &verdict, instance.item.expectation),
                Err(e) => {
                    log::error!(target: targets::DIMACS, "Failed to read {:?}: {e:?}", instance.item.path);
                    Status::Error
                }
            },

            _ => validate(&Formula::default(), &verdict, instance.item.expectation),
        }
    }
}
