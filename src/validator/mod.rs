/*!
Validation of a verdict against a formula.

The validator is a checker, and never a solver:
- A claim of satisfiability is certified by checking each clause of the formula has some literal in the assignment of the claim.
- A claim of unsatisfiability (or of not knowing) is trusted, unless the formula is known to be satisfiable.

Checking an assignment is a single scan over the literals of the formula, with constant time lookups in the assignment.

```rust
# use otter_bench::structures::{assignment::Assignment, expectation::Expectation, formula::Formula, verdict::Verdict};
# use otter_bench::reports::Status;
use otter_bench::validator::validate;

let formula = Formula::from(vec![vec![1, 2], vec![-1, -2]]);
let assignment = Assignment::try_from([1, -2].as_slice()).unwrap();

let claim = Verdict::Satisfiable(assignment);
assert_eq!(validate(&formula, &claim, Expectation::Unknown), Status::Satisfiable);

assert_eq!(validate(&formula, &Verdict::Unsatisfiable, Expectation::Unknown), Status::Unsatisfiable);
assert_eq!(validate(&formula, &Verdict::Unsatisfiable, Expectation::Satisfiable), Status::WrongSolution);
```
*/

use crate::{
    misc::log::targets::{self},
    reports::Status,
    solution::parse_solution,
    structures::{
        assignment::Assignment, clause::Clause, expectation::Expectation, formula::Formula,
        verdict::Verdict,
    },
};

/// Validates a verdict against a formula and what is expected of the formula.
///
/// A satisfiable verdict whose assignment fails some clause is [ClauseNotSatisfied](Status::ClauseNotSatisfied), regardless of expectation.
/// Otherwise, a verdict which disagrees with a known expectation is a [WrongSolution](Status::WrongSolution).
pub fn validate(formula: &Formula, verdict: &Verdict, expectation: Expectation) -> Status {
    match verdict {
        Verdict::Unknown | Verdict::Unsatisfiable => match expectation {
            Expectation::Satisfiable => {
                log::info!(target: targets::VALIDATION, "{} claimed of a satisfiable formula", verdict.answer());
                Status::WrongSolution
            }
            _ => Status::from(verdict.answer()),
        },

        Verdict::Satisfiable(assignment) => {
            if let Some(index) = first_unsatisfied(formula, assignment) {
                log::info!(target: targets::VALIDATION, "Clause {index} is not satisfied: {}", formula.clauses()[index].as_dimacs(true));
                return Status::ClauseNotSatisfied;
            }

            match expectation {
                Expectation::Unsatisfiable => {
                    log::warn!(target: targets::VALIDATION, "A valid assignment for a formula expected to be unsatisfiable");
                    Status::WrongSolution
                }
                _ => Status::Satisfiable,
            }
        }
    }
}

/// The index of the first clause of the formula not satisfied by the assignment, if any.
pub fn first_unsatisfied(formula: &Formula, assignment: &Assignment) -> Option<usize> {
    formula
        .clauses()
        .iter()
        .position(|clause| !clause.satisfied_by(assignment))
}

/// Parses the output of a solver and validates the verdict, with any malformed output reported as the relevant status.
pub fn check_output(
    formula: &Formula,
    output: &str,
    expectation: Expectation,
    strict: bool,
) -> Status {
    match parse_solution(output, strict) {
        Ok(verdict) => validate(formula, &verdict, expectation),
        Err(e) => {
            log::info!(target: targets::VALIDATION, "Malformed output: {e:?}");
            Status::from(e)
        }
    }
}
