/// A line of solver output, tagged by prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolutionLine<'l> {
    /// A `c` line.
    Comment(&'l str),

    /// An `s` line, with the answer.
    Verdict(&'l str),

    /// A `v` line, with the values.
    Values(&'l str),

    /// A line of only whitespace.
    Blank,

    /// Anything else.
    Unrecognized(&'l str),
}

impl<'l> From<&'l str> for SolutionLine<'l> {
    fn from(line: &'l str) -> Self {
        if line.trim().is_empty() {
            return Self::Blank;
        }

        let (prefix, payload) = match line.split_once(' ') {
            Some((prefix, payload)) => (prefix, payload),
            None => (line.trim_end(), ""),
        };

        match prefix {
            "c" => Self::Comment(payload),
            "s" => Self::Verdict(payload.trim()),
            "v" => Self::Values(payload),
            _ => Self::Unrecognized(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes() {
        assert_eq!(SolutionLine::from("c hello"), SolutionLine::Comment("hello"));
        assert_eq!(SolutionLine::from("c"), SolutionLine::Comment(""));
        assert_eq!(SolutionLine::from("s SATISFIABLE\r"), SolutionLine::Verdict("SATISFIABLE"));
        assert_eq!(SolutionLine::from("v 1 -2 0"), SolutionLine::Values("1 -2 0"));
        assert_eq!(SolutionLine::from("   "), SolutionLine::Blank);
        assert_eq!(SolutionLine::from("cnf"), SolutionLine::Unrecognized("cnf"));
        assert_eq!(SolutionLine::from("o 12"), SolutionLine::Unrecognized("o 12"));
    }
}
