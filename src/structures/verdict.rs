//! The answer of a solver, as given on an `s` line of its output.
//!
//! Answers are written in upper case, and only in upper case:
//!
//! ```rust
//! # use otter_bench::structures::verdict::Answer;
//! assert_eq!("SATISFIABLE".parse::<Answer>(), Ok(Answer::Satisfiable));
//! assert!("satisfiable".parse::<Answer>().is_err());
//! assert!("SAT".parse::<Answer>().is_err());
//! ```

use std::str::FromStr;

use crate::structures::assignment::Assignment;

/// One of the three recognised answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Answer {
    Unknown,
    Satisfiable,
    Unsatisfiable,
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "UNKNOWN"),
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
        }
    }
}

impl FromStr for Answer {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNKNOWN" => Ok(Self::Unknown),
            "SATISFIABLE" => Ok(Self::Satisfiable),
            "UNSATISFIABLE" => Ok(Self::Unsatisfiable),
            _unknown_answer => Err(()),
        }
    }
}

/// An answer, together with an assignment when the answer is satisfiable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Unknown,
    Satisfiable(Assignment),
    Unsatisfiable,
}

impl Verdict {
    pub fn answer(&self) -> Answer {
        match self {
            Self::Unknown => Answer::Unknown,
            Self::Satisfiable(_) => Answer::Satisfiable,
            Self::Unsatisfiable => Answer::Unsatisfiable,
        }
    }
}
