//! What is known about the satisfiability of an instance before a solver is run.
//!
//! Selection lists write expectations as `SAT`, `UNSAT`, or `UNKNOWN`, and any of the long forms are also accepted, regardless of case.
//! When substituted into an invocation an expectation is written in lower case.

use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Expectation {
    /// Nothing is known.
    #[default]
    Unknown,

    /// The instance is known to be satisfiable.
    Satisfiable,

    /// The instance is known to be unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Satisfiable => write!(f, "satisfiable"),
            Self::Unsatisfiable => write!(f, "unsatisfiable"),
        }
    }
}

impl FromStr for Expectation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "sat" | "satisfiable" => Ok(Self::Satisfiable),
            "unsat" | "unsatisfiable" => Ok(Self::Unsatisfiable),
            _unknown_string => Err(()),
        }
    }
}
