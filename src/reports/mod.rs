/*!
Reports on completed jobs.

Each job concludes with a [Status], drawn from a fixed taxonomy, and the status together with timing information and enough to identify the job is bundled in a [Report].

Statuses are written in lower case, with underscores:

```rust
# use otter_bench::reports::Status;
assert_eq!(Status::ClauseNotSatisfied.to_string(), "clause_not_satisfied");
assert_eq!("timedout".parse(), Ok(Status::TimedOut));
assert!(Status::Unsatisfiable.is_valid());
assert!(!Status::Unknown.is_valid());
```
*/

mod record;
pub use record::{CallbackReport, Report};

use std::str::FromStr;

use crate::{structures::verdict::Answer, types::err};

/// The terminal status of a job.
///
/// All statuses are mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// The solver found the formula satisfiable, with a valid assignment.
    Satisfiable,

    /// The solver found the formula unsatisfiable.
    Unsatisfiable,

    /// The solver did not determine satisfiability.
    Unknown,

    /// No verdict line was found in the output of the solver.
    MissingSolution,

    /// More than one verdict line was found.
    DuplicateSolution,

    /// The verdict line was not recognised.
    InvalidSolution,

    /// Some value was not a non-zero integer.
    InvalidValues,

    /// A satisfiable verdict was given without values.
    MissingValues,

    /// The values were not terminated by `0`.
    IncompleteValues,

    /// Some atom was given both polarities.
    ContradictoryValues,

    /// The claimed assignment does not satisfy some clause.
    ClauseNotSatisfied,

    /// The verdict disagrees with what is known about the instance.
    WrongSolution,

    /// The deadline passed, and the solver was terminated.
    TimedOut,

    /// The solver could not be found, or could not be executed.
    MissingExecutable,

    /// Repeated trials disagree.
    InconsistentResults,

    /// Some fault in the harness.
    Error,

    /// The evaluation was interrupted.
    Interrupted,
}

impl Status {
    /// Whether the status is a valid terminal verdict, i.e. satisfiable or unsatisfiable.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Satisfiable | Self::Unsatisfiable)
    }

    /// The exit code of a process whose evaluation concluded with the status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Satisfiable | Self::Unsatisfiable | Self::Interrupted => 0,
            _ => 1,
        }
    }

    pub const ALL: [Status; 17] = [
        Self::Satisfiable,
        Self::Unsatisfiable,
        Self::Unknown,
        Self::MissingSolution,
        Self::DuplicateSolution,
        Self::InvalidSolution,
        Self::InvalidValues,
        Self::MissingValues,
        Self::IncompleteValues,
        Self::ContradictoryValues,
        Self::ClauseNotSatisfied,
        Self::WrongSolution,
        Self::TimedOut,
        Self::MissingExecutable,
        Self::InconsistentResults,
        Self::Error,
        Self::Interrupted,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Satisfiable => "satisfiable",
            Self::Unsatisfiable => "unsatisfiable",
            Self::Unknown => "unknown",
            Self::MissingSolution => "missing_solution",
            Self::DuplicateSolution => "duplicate_solution",
            Self::InvalidSolution => "invalid_solution",
            Self::InvalidValues => "invalid_values",
            Self::MissingValues => "missing_values",
            Self::IncompleteValues => "incomplete_values",
            Self::ContradictoryValues => "contradictory_values",
            Self::ClauseNotSatisfied => "clause_not_satisfied",
            Self::WrongSolution => "wrong_solution",
            Self::TimedOut => "timedout",
            Self::MissingExecutable => "missing_executable",
            Self::InconsistentResults => "inconsistent_results",
            Self::Error => "error",
            Self::Interrupted => "interrupted",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .iter()
            .find(|status| status.as_str() == s)
            .copied()
            .ok_or(())
    }
}

impl From<Answer> for Status {
    fn from(value: Answer) -> Self {
        match value {
            Answer::Unknown => Self::Unknown,
            Answer::Satisfiable => Self::Satisfiable,
            Answer::Unsatisfiable => Self::Unsatisfiable,
        }
    }
}

impl From<err::SolutionError> for Status {
    fn from(value: err::SolutionError) -> Self {
        use err::SolutionError;
        match value {
            SolutionError::MissingVerdict => Self::MissingSolution,
            SolutionError::DuplicateVerdict(_) => Self::DuplicateSolution,
            SolutionError::InvalidVerdict(_) | SolutionError::UnrecognizedLine(_) => {
                Self::InvalidSolution
            }
            SolutionError::MissingValues => Self::MissingValues,
            SolutionError::IncompleteValues => Self::IncompleteValues,
            SolutionError::InvalidValues => Self::InvalidValues,
            SolutionError::ContradictoryValues(_) => Self::ContradictoryValues,
        }
    }
}

impl From<&err::RunnerError> for Status {
    fn from(value: &err::RunnerError) -> Self {
        match value {
            err::RunnerError::MissingExecutable(_) => Self::MissingExecutable,
            _ => Self::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for status in Status::ALL {
            assert_eq!(status.to_string().parse(), Ok(status));
        }
        assert_eq!("SATISFIABLE".parse::<Status>(), Err(()));
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Status::Satisfiable.exit_code(), 0);
        assert_eq!(Status::Unsatisfiable.exit_code(), 0);
        assert_eq!(Status::Interrupted.exit_code(), 0);
        assert_eq!(Status::Unknown.exit_code(), 1);
        assert_eq!(Status::TimedOut.exit_code(), 1);
        assert_eq!(Status::InconsistentResults.exit_code(), 1);
    }

    #[test]
    fn solution_errors() {
        use err::SolutionError;
        assert_eq!(Status::from(SolutionError::DuplicateVerdict(3)), Status::DuplicateSolution);
        assert_eq!(Status::from(SolutionError::ContradictoryValues(7)), Status::ContradictoryValues);
        assert_eq!(Status::from(SolutionError::UnrecognizedLine(1)), Status::InvalidSolution);
    }
}
