//! Assignments, aka. the values a solver claims satisfy a formula.
//!
//! An assignment is a set of literals, one for each assigned atom.
//! Membership is constant time, as validation of a formula looks up each literal of each clause.
//!
//! An assignment is never contradictory, as for no atom are both polarities present.
//!
//! ```rust
//! # use otter_bench::structures::assignment::Assignment;
//! # use otter_bench::types::err::SolutionError;
//! let assignment = Assignment::try_from([1, -2, 3].as_slice()).unwrap();
//! assert!(assignment.contains(-2));
//! assert_eq!(assignment.value_of(3), Some(true));
//! assert_eq!(assignment.value_of(4), None);
//!
//! let contradiction = Assignment::try_from([1, -2, 2].as_slice());
//! assert_eq!(contradiction, Err(SolutionError::ContradictoryValues(2)));
//! ```

use std::collections::HashSet;

use crate::{
    structures::literal::{Atom, CLiteral, Literal},
    types::err::{self},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    literals: HashSet<CLiteral>,
}

impl Assignment {
    /// Whether the literal is true on the assignment.
    pub fn contains(&self, literal: CLiteral) -> bool {
        self.literals.contains(&literal)
    }

    /// The value of an atom on the assignment, if the atom is assigned.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        let positive = atom as CLiteral;
        if self.literals.contains(&positive) {
            Some(true)
        } else if self.literals.contains(&-positive) {
            Some(false)
        } else {
            None
        }
    }

    /// The number of assigned atoms.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

/// Builds an assignment from the values preceding the terminating `0`.
///
/// Repeated literals are harmless, and both polarities of an atom are a contradiction.
/// A zero is an invalid value, as is `i32::MIN`, which has no negation.
impl TryFrom<&[CLiteral]> for Assignment {
    type Error = err::SolutionError;

    fn try_from(values: &[CLiteral]) -> Result<Self, Self::Error> {
        let mut literals = HashSet::with_capacity(values.len());
        for value in values {
            if *value == 0 || *value == CLiteral::MIN {
                return Err(err::SolutionError::InvalidValues);
            }
            literals.insert(*value);
        }

        for literal in &literals {
            if literals.contains(&literal.negate()) {
                return Err(err::SolutionError::ContradictoryValues(literal.atom()));
            }
        }

        Ok(Assignment { literals })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_without_negation() {
        assert_eq!(
            Assignment::try_from([1, CLiteral::MIN].as_slice()),
            Err(err::SolutionError::InvalidValues)
        );

        let extreme = Assignment::try_from([CLiteral::MAX, -1].as_slice()).unwrap();
        assert_eq!(extreme.value_of(CLiteral::MAX as Atom), Some(true));
    }
}
