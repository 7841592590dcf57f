use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use flate2::read::GzDecoder;
use xz2::read::XzDecoder;

use crate::{
    builder::{read_dimacs, ParserInfo},
    config::DimacsConfig,
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self},
};

/// Opens an instance, decompressing by suffix: `.gz` with gzip, `.xz` with xz, and otherwise as plain text.
pub fn open_instance(path: &Path) -> Result<Box<dyn BufRead>, err::ParseError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(err::ParseError::NoFile),
    };

    let reader: Box<dyn BufRead> = match path.extension() {
        Some(extension) if extension == "gz" => Box::new(BufReader::new(GzDecoder::new(file))),
        Some(extension) if extension == "xz" => Box::new(BufReader::new(XzDecoder::new(file))),
        _ => Box::new(BufReader::new(file)),
    };
    Ok(reader)
}

/// Reads the formula of an instance.
pub fn read_instance(
    path: &Path,
    config: &DimacsConfig,
) -> Result<(Formula, ParserInfo), err::ParseError> {
    log::debug!(target: targets::DIMACS, "Reading {path:?}");
    read_dimacs(open_instance(path)?, config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::{write::GzEncoder, Compression};

    use super::*;

    const DIMACS: &[u8] = b"p cnf 2 2\n1 2 0\n-1 -2 0\n";

    #[test]
    fn plain() {
        let mut file = tempfile::Builder::new().suffix(".cnf").tempfile().unwrap();
        file.write_all(DIMACS).unwrap();
        file.flush().unwrap();

        let (formula, _) = read_instance(file.path(), &DimacsConfig::default()).unwrap();
        assert_eq!(formula.clauses(), &[vec![1, 2], vec![-1, -2]]);
    }

    #[test]
    fn gzip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(DIMACS).unwrap();
        let gz_bytes = encoder.finish().unwrap();

        let mut file = tempfile::Builder::new().suffix(".cnf.gz").tempfile().unwrap();
        file.write_all(&gz_bytes).unwrap();
        file.flush().unwrap();

        let (formula, info) = read_instance(file.path(), &DimacsConfig::default()).unwrap();
        assert_eq!(formula.clauses(), &[vec![1, 2], vec![-1, -2]]);
        assert_eq!(info.added_clauses, 2);
    }

    #[test]
    fn xz() {
        let mut encoder = xz2::write::XzEncoder::new(Vec::new(), 6);
        encoder.write_all(DIMACS).unwrap();
        let xz_bytes = encoder.finish().unwrap();

        let mut file = tempfile::Builder::new().suffix(".cnf.xz").tempfile().unwrap();
        file.write_all(&xz_bytes).unwrap();
        file.flush().unwrap();

        let (formula, _) = read_instance(file.path(), &DimacsConfig::default()).unwrap();
        assert_eq!(formula.clause_count(), 2);
    }

    #[test]
    fn corrupt_gzip() {
        let mut file = tempfile::Builder::new().suffix(".gz").tempfile().unwrap();
        file.write_all(DIMACS).unwrap();
        file.flush().unwrap();

        assert_eq!(
            read_instance(file.path(), &DimacsConfig::default()),
            Err(err::ParseError::Line(1))
        );
    }

    #[test]
    fn missing() {
        let path = Path::new("definitely/not/here.cnf");
        assert!(matches!(open_instance(path), Err(err::ParseError::NoFile)));
    }
}
