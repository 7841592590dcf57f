//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! - The empty clause is always false (never true).

use crate::structures::{assignment::Assignment, literal::CLiteral};

/// The canonical clause.
pub type CClause = Vec<CLiteral>;

/// Methods common to all representations of a clause.
pub trait Clause {
    /// The clause in DIMACS form, with the terminating `0` if `zero` is true.
    fn as_dimacs(&self, zero: bool) -> String;

    /// Whether some literal of the clause is a member of the assignment.
    fn satisfied_by(&self, assignment: &Assignment) -> bool;
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self {
            the_string.push_str(&format!("{literal} "));
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn satisfied_by(&self, assignment: &Assignment) -> bool {
        self.iter().any(|literal| assignment.contains(*literal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimacs() {
        let clause: CClause = vec![1, -2, 3];
        assert_eq!(clause.as_dimacs(true), "1 -2 3 0");
        assert_eq!(clause.as_dimacs(false), "1 -2 3");

        let empty: CClause = vec![];
        assert_eq!(empty.as_dimacs(true), "0");
    }

    #[test]
    fn empty_clause_is_never_satisfied() {
        let assignment = Assignment::try_from(vec![1, 2, 3].as_slice()).unwrap();
        let empty: CClause = vec![];
        assert!(!empty.satisfied_by(&assignment));
    }
}
