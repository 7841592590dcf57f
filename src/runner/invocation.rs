use std::path::Path;

use crate::{
    config::defaults::{EXPECTED_PLACEHOLDER, INPUT_PLACEHOLDER},
    structures::expectation::Expectation,
    types::err::{self},
};

/// A template for invoking a solver.
///
/// Each token is a program or argument, in which [INPUT_PLACEHOLDER] is replaced by the path of an instance and [EXPECTED_PLACEHOLDER] by what is expected of the instance.
///
/// ```rust
/// # use otter_bench::runner::Invocation;
/// # use otter_bench::structures::expectation::Expectation;
/// # use std::path::Path;
/// let invocation = Invocation::new(vec![
///     "solver".to_string(),
///     "--model".to_string(),
///     "--file={input}".to_string(),
///     "{expected}".to_string(),
/// ]).unwrap();
///
/// let args = invocation.instantiate(Path::new("uf20-01.cnf"), Expectation::Satisfiable);
/// assert_eq!(args, vec!["solver", "--model", "--file=uf20-01.cnf", "satisfiable"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    tokens: Vec<String>,
}

impl Invocation {
    pub fn new(tokens: Vec<String>) -> Result<Self, err::RunnerError> {
        match tokens.first() {
            None => Err(err::RunnerError::EmptyInvocation),
            Some(program) if program.is_empty() => Err(err::RunnerError::EmptyInvocation),
            Some(_) => Ok(Invocation { tokens }),
        }
    }

    /// Whether some token mentions the path of the instance.
    pub fn takes_input(&self) -> bool {
        self.tokens
            .iter()
            .any(|token| token.contains(INPUT_PLACEHOLDER))
    }

    /// The program and arguments for an instance.
    pub fn instantiate(&self, input: &Path, expectation: Expectation) -> Vec<String> {
        let input = input.to_string_lossy();
        let expected = expectation.to_string();
        self.tokens
            .iter()
            .map(|token| {
                token
                    .replace(INPUT_PLACEHOLDER, &input)
                    .replace(EXPECTED_PLACEHOLDER, &expected)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(Invocation::new(vec![]), Err(err::RunnerError::EmptyInvocation));
        assert_eq!(
            Invocation::new(vec![String::new()]),
            Err(err::RunnerError::EmptyInvocation)
        );
    }

    #[test]
    fn without_placeholders() {
        let invocation = Invocation::new(vec!["solver".to_string(), "x.cnf".to_string()]).unwrap();
        assert!(!invocation.takes_input());
        assert_eq!(
            invocation.instantiate(Path::new("y.cnf"), Expectation::Unknown),
            vec!["solver", "x.cnf"]
        );
    }
}
