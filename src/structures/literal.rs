//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical representation of a literal is a (non-zero) integer, as in DIMACS.
//!
//! ```rust
//! # use otter_bench::structures::literal::{CLiteral, Literal};
//! let literal: CLiteral = -79;
//!
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.polarity());
//! assert!(literal.negate().polarity());
//! ```

/// An atom, aka. a variable.
pub type Atom = u32;

/// The canonical literal.
pub type CLiteral = i32;

/// Something which has methods for returning an atom and a polarity.
pub trait Literal {
    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

impl Literal for CLiteral {
    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}
