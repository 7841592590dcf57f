//! Formulas, aka. a conjunction of clauses.
//!
//! A formula is read once for an instance, and is read-only for every job which refers to the instance.
//! As such, formulas are shared between jobs behind an [Arc](std::sync::Arc).
//!
//! ```rust
//! # use otter_bench::structures::formula::Formula;
//! let formula = Formula::from(vec![vec![1, 2], vec![-1, -2]]);
//! assert_eq!(formula.atom_count(), 2);
//! assert_eq!(formula.clause_count(), 2);
//! assert_eq!(formula.as_dimacs(), "p cnf 2 2\n1 2 0\n-1 -2 0\n");
//! ```

use crate::structures::{
    clause::{CClause, Clause},
    literal::Literal,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<CClause>,
    atom_count: usize,
}

impl Formula {
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The largest atom in some clause of the formula.
    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    /// The formula in DIMACS form, including a problem specification.
    pub fn as_dimacs(&self) -> String {
        let mut the_string = format!("p cnf {} {}\n", self.atom_count, self.clauses.len());
        for clause in &self.clauses {
            the_string.push_str(&clause.as_dimacs(true));
            the_string.push('\n');
        }
        the_string
    }
}

/// Zero is not a literal, and is skipped if present in some clause.
impl From<Vec<CClause>> for Formula {
    fn from(mut clauses: Vec<CClause>) -> Self {
        let mut atom_count = 0;
        for clause in &mut clauses {
            clause.retain(|literal| *literal != 0);
            for literal in clause.iter() {
                atom_count = atom_count.max(literal.atom() as usize);
            }
        }
        Formula {
            clauses,
            atom_count,
        }
    }
}

impl FromIterator<CClause> for Formula {
    fn from_iter<I: IntoIterator<Item = CClause>>(iter: I) -> Self {
        Formula::from(iter.into_iter().collect::<Vec<_>>())
    }
}
