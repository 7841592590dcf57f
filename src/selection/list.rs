use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::{
    misc::log::targets::{self},
    selection::Level,
    structures::expectation::Expectation,
    types::err::{self},
};

/// A line of a selection list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub level: Level,

    pub path: PathBuf,

    pub expectation: Expectation,
}

/// Parses a selection list.
///
/// Each line which is neither blank nor a `#` comment is `LEVEL PATH … ANSWER`, with anything between the path and the answer ignored.
///
/// ```rust
/// # use otter_bench::selection::{parse_selection, Level};
/// # use otter_bench::structures::expectation::Expectation;
/// let list = b"
/// ## level path answer
/// Easy   uf20/uf20-01.cnf  SAT
/// medium hole/hole8.cnf 1.5 UNSAT
/// ";
/// let entries = parse_selection(list.as_slice()).unwrap();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].level, Level::Easy);
/// assert_eq!(entries[1].expectation, Expectation::Unsatisfiable);
/// ```
pub fn parse_selection(reader: impl BufRead) -> Result<Vec<Entry>, err::SelectionError> {
    let mut entries = Vec::default();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let Ok(line) = line else {
            return Err(err::SelectionError::Line(line_number));
        };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [first, ..] if first.starts_with('#') => continue,

            [level, path, .., answer] => {
                let Ok(level) = level.parse::<Level>() else {
                    return Err(err::SelectionError::Level(line_number));
                };
                let Ok(expectation) = answer.parse::<Expectation>() else {
                    return Err(err::SelectionError::Answer(line_number));
                };
                entries.push(Entry {
                    level,
                    path: PathBuf::from(path),
                    expectation,
                });
            }

            _ => return Err(err::SelectionError::Line(line_number)),
        }
    }

    Ok(entries)
}

pub fn read_selection(path: &Path) -> Result<Vec<Entry>, err::SelectionError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::error!(target: targets::SELECTION, "Failed to open {path:?}: {e}");
            return Err(err::SelectionError::NoFile(path.to_string_lossy().into_owned()));
        }
    };
    parse_selection(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed() {
        assert_eq!(
            parse_selection(b"easy x.cnf\n".as_slice()),
            Err(err::SelectionError::Line(1))
        );
        assert_eq!(
            parse_selection(b"\ntrivial x.cnf SAT\n".as_slice()),
            Err(err::SelectionError::Level(2))
        );
        assert_eq!(
            parse_selection(b"hard x.cnf MAYBE\n".as_slice()),
            Err(err::SelectionError::Answer(1))
        );
    }

    #[test]
    fn missing_list() {
        assert!(matches!(
            read_selection(Path::new("/nonexistent/selection-random.txt")),
            Err(err::SelectionError::NoFile(_))
        ));
    }
}
