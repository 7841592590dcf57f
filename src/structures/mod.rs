/*!
Abstract elements of an evaluation: formulas, clauses, and literals, together with the answers a solver may give.

All literals are represented by (non-zero) integers, as in DIMACS, with the sign of the integer indicating polarity.
*/

pub mod assignment;
pub mod clause;
pub mod expectation;
pub mod formula;
pub mod literal;
pub mod verdict;
