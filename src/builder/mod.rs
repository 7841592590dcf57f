/*!
Tools for reading a formula.

A formula is read from the DIMACS representation, possibly compressed:

```rust
# use otter_bench::builder::{read_dimacs, DimacsConfig};
let dimacs = b"
c A comment.
p cnf 3 2
 1 -2    0
-1  2  3 0
";

let (formula, info) = read_dimacs(dimacs.as_slice(), &DimacsConfig::default()).unwrap();
assert_eq!(formula.clauses(), &[vec![1, -2], vec![-1, 2, 3]]);
assert_eq!(info.expected_clauses, Some(2));
assert_eq!(info.added_clauses, 2);
```

The reader never trusts the problem specification (`p cnf …`) line, and instead splits clauses on each `0`.
Checking the problem specification against the formula read is optional, see [DimacsConfig].
*/

mod dimacs;
pub use dimacs::{read_dimacs, ParserInfo};

mod files;
pub use files::{open_instance, read_instance};

pub use crate::config::DimacsConfig;
