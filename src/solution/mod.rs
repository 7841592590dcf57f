/*!
Parsing the output of a solver.

The output of a solver follows the format of the SAT competitions:
- Zero or more `c` comment lines.
- Exactly one `s` line, with the answer `SATISFIABLE`, `UNSATISFIABLE`, or `UNKNOWN`.
- If satisfiable, one or more `v` lines, whose values together are terminated by `0`.

```rust
# use otter_bench::solution::parse_solution;
# use otter_bench::structures::verdict::Verdict;
# use otter_bench::types::err::SolutionError;
let output = "c some comment\ns SATISFIABLE\nv 1 -2\nv 3 0\n";
let Ok(Verdict::Satisfiable(assignment)) = parse_solution(output, false) else {
    panic!("A satisfiable verdict");
};
assert_eq!(assignment.len(), 3);

let twice = "s UNKNOWN\ns UNKNOWN\n";
assert_eq!(parse_solution(twice, false), Err(SolutionError::DuplicateVerdict(2)));
```
*/

mod lines;
pub use lines::SolutionLine;

use crate::{
    misc::log::targets::{self},
    structures::{
        assignment::Assignment,
        literal::CLiteral,
        verdict::{Answer, Verdict},
    },
    types::err::{self},
};

/// Parses the output of a solver into a verdict.
///
/// Lines with an unrecognised prefix are ignored, unless `strict`.
pub fn parse_solution(output: &str, strict: bool) -> Result<Verdict, err::SolutionError> {
    let mut answer: Option<Answer> = None;
    let mut values: Vec<CLiteral> = Vec::default();
    let mut invalid_values = false;

    for (index, line) in output.lines().enumerate() {
        let line_number = index + 1;

        match SolutionLine::from(line) {
            SolutionLine::Comment(_) | SolutionLine::Blank => {}

            SolutionLine::Verdict(payload) => {
                if answer.is_some() {
                    return Err(err::SolutionError::DuplicateVerdict(line_number));
                }
                match payload.parse::<Answer>() {
                    Ok(the_answer) => answer = Some(the_answer),
                    Err(_) => return Err(err::SolutionError::InvalidVerdict(line_number)),
                }
            }

            SolutionLine::Values(payload) => {
                for token in payload.split_whitespace() {
                    match token.parse::<CLiteral>() {
                        Ok(value) => values.push(value),
                        Err(_) => invalid_values = true,
                    }
                }
            }

            SolutionLine::Unrecognized(line) => match strict {
                true => return Err(err::SolutionError::UnrecognizedLine(line_number)),
                false => {
                    log::trace!(target: targets::SOLUTION, "Ignoring line {line_number}: {line}")
                }
            },
        }
    }

    let Some(answer) = answer else {
        return Err(err::SolutionError::MissingVerdict);
    };

    match answer {
        Answer::Unknown => Ok(Verdict::Unknown),

        Answer::Unsatisfiable => Ok(Verdict::Unsatisfiable),

        Answer::Satisfiable => {
            if invalid_values {
                return Err(err::SolutionError::InvalidValues);
            }

            match values.split_last() {
                None => Err(err::SolutionError::MissingValues),

                Some((0, assigned)) => {
                    let assignment = Assignment::try_from(assigned)?;
                    log::debug!(target: targets::SOLUTION, "Parsed an assignment of {} atoms", assignment.len());
                    Ok(Verdict::Satisfiable(assignment))
                }

                Some(_) => Err(err::SolutionError::IncompleteValues),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsatisfiable_ignores_values() {
        let output = "s UNSATISFIABLE\nv 1 2\n";
        assert_eq!(parse_solution(output, false), Ok(Verdict::Unsatisfiable));
    }

    #[test]
    fn missing_verdict() {
        let output = "c thinking\nv 1 2 0\n";
        assert_eq!(parse_solution(output, false), Err(err::SolutionError::MissingVerdict));
        assert_eq!(parse_solution("", false), Err(err::SolutionError::MissingVerdict));
    }

    #[test]
    fn invalid_verdict() {
        assert_eq!(
            parse_solution("c x\ns satisfiable\n", false),
            Err(err::SolutionError::InvalidVerdict(2))
        );
        assert_eq!(
            parse_solution("s SAT\n", false),
            Err(err::SolutionError::InvalidVerdict(1))
        );
    }

    #[test]
    fn duplicate_before_values() {
        let output = "s SATISFIABLE\nv 1 0\ns SATISFIABLE\n";
        assert_eq!(parse_solution(output, false), Err(err::SolutionError::DuplicateVerdict(3)));
    }

    #[test]
    fn values() {
        assert_eq!(
            parse_solution("s SATISFIABLE\n", false),
            Err(err::SolutionError::MissingValues)
        );
        assert_eq!(
            parse_solution("s SATISFIABLE\nv 1 -2\n", false),
            Err(err::SolutionError::IncompleteValues)
        );
        assert_eq!(
            parse_solution("s SATISFIABLE\nv 1 two 0\n", false),
            Err(err::SolutionError::InvalidValues)
        );
        assert_eq!(
            parse_solution("s SATISFIABLE\nv 1 0 2 0\n", false),
            Err(err::SolutionError::InvalidValues)
        );
        assert_eq!(
            parse_solution("s SATISFIABLE\nv 1 -2\nv 2 0\n", false),
            Err(err::SolutionError::ContradictoryValues(2))
        );
        assert_eq!(
            parse_solution("s SATISFIABLE\nv -2147483648 0\n", false),
            Err(err::SolutionError::InvalidValues)
        );
    }

    #[test]
    fn values_may_precede_verdict() {
        let output = "v -1 0\ns SATISFIABLE\n";
        let Ok(Verdict::Satisfiable(assignment)) = parse_solution(output, false) else {
            panic!("A satisfiable verdict");
        };
        assert!(assignment.contains(-1));
    }

    #[test]
    fn strict_lines() {
        let output = "starting up\ns UNKNOWN\n";
        assert_eq!(parse_solution(output, false), Ok(Verdict::Unknown));
        assert_eq!(
            parse_solution(output, true),
            Err(err::SolutionError::UnrecognizedLine(1))
        );
    }
}
