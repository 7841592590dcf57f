//! Error types used in the library.
//!
//! - Errors from reading a formula or a solution are internal to the evaluation of a job, and are turned into a [Status](crate::reports::Status) before leaving the module which found them.
//! - Errors from the runner are infrastructure faults (e.g. a solver which could not be launched) and are also reported as a status of the job, rather than ending an evaluation.
//! - Errors from selection happen before any job is made, and so are returned to the caller.
//!
//! Names of the error enums overlap with the structs they concern.
//  As such, err::{self} is often used to prefix use of the types with `err::`.

use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Solution(SolutionError),
    Runner(RunnerError),
    Selection(SelectionError),
}

/// Errors when reading a DIMACS formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input could not be read at the given line (e.g. corrupt compression, or invalid UTF-8).
    Line(usize),

    /// A token which is not an integer, at the given line.
    Token(usize),

    /// Some issue with the problem specification `p cnf <atoms> <clauses>`, at the given line.
    ProblemSpecification(usize),

    /// The counts in the problem specification disagree with the formula.
    HeaderMismatch {
        expected_atoms: usize,
        expected_clauses: usize,
        atoms: usize,
        clauses: usize,
    },

    /// The final clause was not terminated by `0`, and a final unterminated clause was not permitted.
    Unterminated,

    /// No file was found.
    NoFile,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors in the output of a solver.
///
/// Each has a corresponding [Status](crate::reports::Status).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolutionError {
    /// No `s` line was found.
    MissingVerdict,

    /// A second `s` line, at the given line.
    DuplicateVerdict(usize),

    /// An `s` line whose answer is not recognised, at the given line.
    InvalidVerdict(usize),

    /// A line with an unrecognised prefix, at the given line.
    /// Only an error when lines are read strictly.
    UnrecognizedLine(usize),

    /// A satisfiable verdict without any values.
    MissingValues,

    /// Values without a terminating `0`.
    IncompleteValues,

    /// A value which is not a (non-zero) integer.
    InvalidValues,

    /// Some atom was given both polarities.
    ContradictoryValues(u32),
}

impl From<SolutionError> for ErrorKind {
    fn from(e: SolutionError) -> Self {
        ErrorKind::Solution(e)
    }
}

/// Errors when launching or supervising a solver.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RunnerError {
    /// The invocation template has no program.
    EmptyInvocation,

    /// The program could not be found, or could not be executed.
    MissingExecutable(String),

    /// Some other failure to spawn the program.
    Spawn(std::io::ErrorKind),

    /// The directory for the output of a job could not be made.
    WorkDir(std::io::ErrorKind),

    /// A file for the output of a job could not be made, or read.
    Output(std::io::ErrorKind),

    /// Waiting on the process failed.
    Wait(std::io::ErrorKind),
}

impl From<RunnerError> for ErrorKind {
    fn from(e: RunnerError) -> Self {
        ErrorKind::Runner(e)
    }
}

/// Errors when selecting instances.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SelectionError {
    /// The selection list could not be read.
    NoFile(String),

    /// A line without a level, path, and answer, at the given line.
    Line(usize),

    /// An unrecognised level, at the given line.
    Level(usize),

    /// An unrecognised answer, at the given line.
    Answer(usize),

    /// An invalid glob pattern.
    Pattern(String),
}

impl From<SelectionError> for ErrorKind {
    fn from(e: SelectionError) -> Self {
        ErrorKind::Selection(e)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {e:?}"),
            Self::Solution(e) => write!(f, "solution error: {e:?}"),
            Self::Runner(e) => write!(f, "runner error: {e:?}"),
            Self::Selection(e) => write!(f, "selection error: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}
