use std::io::BufRead;

use crate::{
    config::DimacsConfig,
    misc::log::targets::{self},
    structures::{clause::CClause, formula::Formula, literal::CLiteral},
    types::err::{self},
};

/// Details of a formula read from DIMACS.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms in the problem specification, if one was found.
    pub expected_atoms: Option<usize>,

    /// The count of clauses in the problem specification, if one was found.
    pub expected_clauses: Option<usize>,

    /// The largest atom read.
    pub added_atoms: usize,

    /// The count of clauses read.
    pub added_clauses: usize,
}

/// Reads a formula from the DIMACS representation.
///
/// - Lines beginning with `c` are comments.
/// - A line beginning with `p` is a problem specification, and is advisory only.
/// - A line beginning with `%` ends the formula, as in some SATLIB instances.
/// - Any other line is a sequence of whitespace separated integers, where `0` ends a clause.
///
/// A final clause without a terminating `0` is kept if the config allows, and otherwise is an error.
///
/// ```rust
/// # use otter_bench::builder::{read_dimacs, DimacsConfig};
/// # use otter_bench::types::err::ParseError;
/// let mut config = DimacsConfig::default();
/// let unterminated = b"1 2 0\n-1 -2";
///
/// let (formula, _) = read_dimacs(unterminated.as_slice(), &config).unwrap();
/// assert_eq!(formula.clause_count(), 2);
///
/// config.allow_unterminated_clause = false;
/// assert_eq!(read_dimacs(unterminated.as_slice(), &config), Err(ParseError::Unterminated));
/// ```
pub fn read_dimacs(
    mut reader: impl BufRead,
    config: &DimacsConfig,
) -> Result<(Formula, ParserInfo), err::ParseError> {
    let mut info = ParserInfo::default();

    let mut buffer = String::with_capacity(1024);
    let mut clauses: Vec<CClause> = Vec::default();
    let mut clause_buffer: CClause = Vec::default();

    let mut line_counter = 0;

    'formula_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ParseError::Line(line_counter + 1)),
        }

        let line = buffer.trim_start();
        match line.chars().next() {
            None => {}

            Some('c') => {}

            Some('%') => break 'formula_loop,

            Some('p') => match problem_specification(line) {
                Some((atoms, clause_count)) => {
                    log::debug!(target: targets::DIMACS, "Expecting {atoms} atoms and {clause_count} clauses");
                    info.expected_atoms = Some(atoms);
                    info.expected_clauses = Some(clause_count);
                }
                None if config.check_header => {
                    return Err(err::ParseError::ProblemSpecification(line_counter));
                }
                None => {
                    log::warn!(target: targets::DIMACS, "Skipping malformed problem specification at line {line_counter}");
                }
            },

            Some(_) => {
                for item in line.split_whitespace() {
                    match item.parse::<CLiteral>() {
                        Ok(0) => clauses.push(std::mem::take(&mut clause_buffer)),
                        Ok(literal) => clause_buffer.push(literal),
                        Err(_) => return Err(err::ParseError::Token(line_counter)),
                    }
                }
            }
        }
    }

    if !clause_buffer.is_empty() {
        match config.allow_unterminated_clause {
            true => clauses.push(clause_buffer),
            false => return Err(err::ParseError::Unterminated),
        }
    }

    let formula = Formula::from(clauses);
    info.added_atoms = formula.atom_count();
    info.added_clauses = formula.clause_count();

    log::info!(target: targets::DIMACS, "Read {} atoms and {} clauses", info.added_atoms, info.added_clauses);

    if config.check_header {
        if let (Some(expected_atoms), Some(expected_clauses)) =
            (info.expected_atoms, info.expected_clauses)
        {
            if expected_atoms < info.added_atoms || expected_clauses != info.added_clauses {
                return Err(err::ParseError::HeaderMismatch {
                    expected_atoms,
                    expected_clauses,
                    atoms: info.added_atoms,
                    clauses: info.added_clauses,
                });
            }
        }
    }

    Ok((formula, info))
}

/// The atom and clause counts of a `p cnf <atoms> <clauses>` line.
fn problem_specification(line: &str) -> Option<(usize, usize)> {
    let mut problem_details = line.split_whitespace();
    match (problem_details.next(), problem_details.next()) {
        (Some("p"), Some("cnf")) => {}
        _ => return None,
    }
    let atoms = problem_details.next()?.parse().ok()?;
    let clauses = problem_details.next()?.parse().ok()?;
    match problem_details.next() {
        None => Some((atoms, clauses)),
        Some(_) => None,
    }
}
