//! A harness for evaluating SAT solver executables.
//!
//! otter_bench runs external solvers against CNF formulas, under a time limit and with a bound on the number of solvers running at once, and certifies each answer against the formula the solver was given.
//! The harness never solves anything itself, it only supervises and checks.
//!
//! # Orientation
//!
//! An evaluation is a flow of [work items](crate::runner::WorkItem) through a handful of parts:
//! - The [scheduler] admits at most `K` jobs at a time from a backlog, and reports each job as it completes.
//! - The [runner] launches a single solver invocation with a deadline, and notes whether it finished, timed out, or could not be launched.
//! - The [solution] parser reads a verdict and (perhaps) an assignment from the output of a solver.
//! - The [validator] checks the parsed answer against the [formula](crate::structures::formula::Formula), as read by the [builder].
//! - The [aggregate] module folds repeated trials of a job into a mean time, with a confidence interval.
//!
//! Each completed job is summarised by a [Report](crate::reports::Report), whose [Status](crate::reports::Status) is drawn from a fixed taxonomy.
//! Failures of a solver (malformed output, a wrong answer, a timeout) are statuses, not errors, and never interrupt an evaluation.
//!
//! # Examples
//!
//! + Certify an answer.
//!
//! ```rust
//! # use otter_bench::builder::{read_dimacs, DimacsConfig};
//! # use otter_bench::structures::expectation::Expectation;
//! # use otter_bench::reports::Status;
//! use otter_bench::validator::check_output;
//!
//! let dimacs = b"p cnf 2 2\n 1  2 0\n-1 -2 0\n";
//! let (formula, _info) = read_dimacs(dimacs.as_slice(), &DimacsConfig::default()).unwrap();
//!
//! let good = "s SATISFIABLE\nv 1 -2 0\n";
//! assert_eq!(check_output(&formula, good, Expectation::Unknown, false), Status::Satisfiable);
//!
//! let bad = "s SATISFIABLE\nv -1 -2 0\n";
//! assert_eq!(check_output(&formula, bad, Expectation::Unknown, false), Status::ClauseNotSatisfied);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log].
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/) the admission of jobs can be followed with `RUST_LOG=scheduler=debug …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod aggregate;
pub mod builder;
pub mod config;
pub mod misc;
pub mod reports;
pub mod runner;
pub mod scheduler;
pub mod selection;
pub mod solution;
pub mod structures;
pub mod types;
pub mod validator;
