use std::time::{Duration, Instant};

use crate::reports::Report;

pub type JobId = usize;

/// A trial of an instance which has been given a permit.
#[derive(Clone, Debug)]
pub struct Job {
    pub id: JobId,

    pub instance: String,

    pub trial: usize,

    pub started: Instant,
}

/// A report from a worker, on the job it was given.
#[derive(Debug)]
pub struct Completion {
    pub id: JobId,
    pub report: Report,
}

/// The state of an evaluation, as seen by the coordinator at some poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub reported: usize,

    pub running: usize,

    pub elapsed: Duration,
}

/// A callback made by the coordinator after each poll.
pub type CallbackProgress<'p> = dyn FnMut(&Progress) + 'p;

/// An account of a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub submitted: usize,

    pub reported: usize,

    /// The largest number of jobs running at any time.
    pub peak_running: usize,

    pub interrupted: bool,
}
