use crate::reports::Status;

/// A callback to receive each report, in order of completion.
pub type CallbackReport<'s> = dyn FnMut(Report) + 's;

/// The record of a completed job.
///
/// Completion order is not submission order, and so a report identifies its job by instance and trial.
///
/// As text, a report is written `instance [tags…] return_code status elapsed`, with `-` for anything absent.
///
/// ```rust
/// # use otter_bench::reports::{Report, Status};
/// let report = Report {
///     instance: "uf20-01.cnf".to_string(),
///     trial: 0,
///     tags: vec!["random".to_string(), "easy".to_string()],
///     return_code: Some(10),
///     status: Status::Satisfiable,
///     elapsed: Some(0.25),
/// };
/// assert_eq!(report.to_string(), "uf20-01.cnf random easy 10 satisfiable 0.250");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// The instance the solver was given.
    pub instance: String,

    /// The index of the trial, for repeated evaluation of an instance.
    pub trial: usize,

    /// Labels carried through from selection (e.g. track and level).
    pub tags: Vec<String>,

    /// The exit code of the solver, if it exited.
    pub return_code: Option<i32>,

    pub status: Status,

    /// Wall-clock seconds from launch to completion, if the solver was launched.
    pub elapsed: Option<f64>,
}

impl Report {
    /// A report for a job which never ran a process.
    pub fn without_process(instance: &str, trial: usize, tags: &[String], status: Status) -> Self {
        Report {
            instance: instance.to_owned(),
            trial,
            tags: tags.to_vec(),
            return_code: None,
            status,
            elapsed: None,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.instance)?;
        for tag in &self.tags {
            write!(f, " {tag}")?;
        }
        match self.return_code {
            Some(code) => write!(f, " {code}")?,
            None => write!(f, " -")?,
        }
        write!(f, " {}", self.status)?;
        match self.elapsed {
            Some(elapsed) => write!(f, " {elapsed:.3}"),
            None => write!(f, " -"),
        }
    }
}
