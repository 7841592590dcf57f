/*!
Bounded-concurrency evaluation of many instances.

A [Scheduler] runs trials of instances with at most some fixed number of jobs running at any time.

- Submitting a trial blocks until a permit is free, and then hands the trial to a fresh worker thread.
  The worker evaluates the trial, and sends a report on a completion channel.
- The coordinator polls the completion channel, waiting at most the poll interval.
  For each report found the job is removed from the running set and its permit is released.

Submission and coordination are separate threads in [run](Scheduler::run), so a long wait for a permit never delays the collection of reports.
A run ends when submission has ended and every submitted job has been reported.

On interrupt, submission stops, each running solver is killed by its runner, and the run ends once the reports of those jobs have been collected.

```rust,no_run
# use otter_bench::config::Config;
# use otter_bench::runner::{Invocation, WorkItem};
# use otter_bench::scheduler::Scheduler;
# use otter_bench::reports::Report;
# use std::sync::{Arc, atomic::AtomicBool};
let invocation = Invocation::new(vec!["minisat".to_string(), "{input}".to_string()]).unwrap();
let scheduler = Scheduler::new(&Config::default(), invocation, Arc::new(AtomicBool::new(false)));

let items = vec![WorkItem::from_path(std::path::Path::new("uf20-01.cnf"))];
let summary = scheduler.run(items, &mut |report: Report| println!("{report}"), None);
assert_eq!(summary.submitted, summary.reported);
```
*/

mod job;
pub use job::{CallbackProgress, Job, JobId, Progress, Summary};
use job::Completion;

mod permits;
pub use permits::Permits;

use std::{
    collections::HashMap,
    panic::{self, AssertUnwindSafe},
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
    thread,
    time::{Duration, Instant},
};

use crossbeam::channel::{unbounded, Receiver, RecvTimeoutError, Sender};

use crate::{
    config::Config,
    misc::log::targets::{self},
    reports::{CallbackReport, Report, Status},
    runner::{Evaluator, Instance, Interrupt, Invocation, WorkItem},
};

pub struct Scheduler {
    evaluator: Arc<Evaluator>,

    repeat: usize,

    poll_interval: Duration,

    interrupt: Interrupt,

    permits: Permits,

    running: Mutex<HashMap<JobId, Job>>,

    peak_running: AtomicUsize,

    submitted: AtomicUsize,

    reported: AtomicUsize,

    completion_tx: Sender<Completion>,

    completion_rx: Receiver<Completion>,
}

impl Scheduler {
    pub fn new(config: &Config, invocation: Invocation, interrupt: Interrupt) -> Self {
        let evaluator = Evaluator::from_config(config, invocation, interrupt.clone());
        Scheduler::with_evaluator(config, evaluator, interrupt)
    }

    pub fn with_evaluator(config: &Config, evaluator: Evaluator, interrupt: Interrupt) -> Self {
        let (completion_tx, completion_rx) = unbounded();

        Scheduler {
            evaluator: Arc::new(evaluator),
            repeat: config.repeat.value,
            poll_interval: config.poll_interval.value,
            interrupt,
            permits: Permits::new(config.max_jobs.value),
            running: Mutex::default(),
            peak_running: AtomicUsize::default(),
            submitted: AtomicUsize::default(),
            reported: AtomicUsize::default(),
            completion_tx,
            completion_rx,
        }
    }

    fn interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Submits a trial of the instance, blocking until a permit is free.
    ///
    /// Returns the id of the job, or nothing if interrupted before a permit was free.
    pub fn submit(&self, instance: Arc<Instance>, trial: usize) -> Option<JobId> {
        loop {
            if self.interrupted() {
                return None;
            }
            match self.permits.acquire(self.poll_interval) {
                Ok(()) => break,
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return None,
            }
        }

        let id = self.submitted.fetch_add(1, Ordering::SeqCst);
        let job = Job {
            id,
            instance: instance.item.name.clone(),
            trial,
            started: Instant::now(),
        };

        match self.running.lock() {
            Ok(mut running) => {
                running.insert(id, job);
                self.peak_running.fetch_max(running.len(), Ordering::SeqCst);
            }
            Err(_) => log::error!(target: targets::SCHEDULER, "Running set poisoned"),
        }
        log::debug!(target: targets::SCHEDULER, "Job {id}: {} trial {trial}", instance.item.name);

        let evaluator = self.evaluator.clone();
        let completion_tx = self.completion_tx.clone();
        let worker = Arc::clone(&instance);
        let spawned = thread::Builder::new()
            .name(format!("job-{id}"))
            .spawn(move || {
                let report = evaluate_or_error(&worker, trial, || evaluator.evaluate(&worker, trial));
                let _ = completion_tx.send(Completion { id, report });
            });

        if let Err(e) = spawned {
            log::error!(target: targets::SCHEDULER, "Failed to start a worker for job {id}: {e}");
            let item = &instance.item;
            let report = Report::without_process(&item.name, trial, &item.tags, Status::Error);
            let _ = self.completion_tx.send(Completion { id, report });
        }

        Some(id)
    }

    /// Collects the reports of completed jobs, waiting at most the poll interval for the first.
    pub fn poll_completions(&self) -> Vec<Report> {
        let mut reports = Vec::default();

        match self.completion_rx.recv_timeout(self.poll_interval) {
            Ok(completion) => reports.push(self.complete(completion)),
            Err(_) => return reports,
        }

        while let Ok(completion) = self.completion_rx.try_recv() {
            reports.push(self.complete(completion));
        }

        reports
    }

    fn complete(&self, completion: Completion) -> Report {
        match self.running.lock() {
            Ok(mut running) => {
                if running.remove(&completion.id).is_none() {
                    log::error!(target: targets::SCHEDULER, "Job {} completed without running", completion.id);
                }
            }
            Err(_) => log::error!(target: targets::SCHEDULER, "Running set poisoned"),
        }
        self.permits.release();
        self.reported.fetch_add(1, Ordering::SeqCst);
        completion.report
    }

    /// The jobs running, longest running first.
    pub fn running(&self) -> Vec<Job> {
        let mut jobs: Vec<Job> = match self.running.lock() {
            Ok(running) => running.values().cloned().collect(),
            Err(_) => Vec::default(),
        };
        jobs.sort_by_key(|job| job.started);
        jobs
    }

    pub fn peak_running(&self) -> usize {
        self.peak_running.load(Ordering::SeqCst)
    }

    pub fn submitted(&self) -> usize {
        self.submitted.load(Ordering::SeqCst)
    }

    pub fn reported(&self) -> usize {
        self.reported.load(Ordering::SeqCst)
    }

    /// Evaluates each item, repeated as configured, passing each report to `sink` in order of completion.
    ///
    /// Trials of an item are submitted together, before any trial of the next item.
    /// `progress` is called after every poll, whether or not some job completed.
    pub fn run(
        &self,
        items: Vec<WorkItem>,
        sink: &mut CallbackReport,
        mut progress: Option<&mut CallbackProgress>,
    ) -> Summary {
        let start = Instant::now();
        let instances: Vec<Arc<Instance>> = items
            .into_iter()
            .map(|item| Arc::new(Instance::new(item)))
            .collect();

        let submission_ended = AtomicBool::new(false);

        thread::scope(|scope| {
            scope.spawn(|| {
                'submission: for instance in &instances {
                    for trial in 0..self.repeat {
                        if self.submit(Arc::clone(instance), trial).is_none() {
                            log::info!(target: targets::SCHEDULER, "Submission interrupted");
                            break 'submission;
                        }
                    }
                }
                submission_ended.store(true, Ordering::SeqCst);
            });

            loop {
                for report in self.poll_completions() {
                    sink(report);
                }

                if let Some(callback) = progress.as_mut() {
                    callback(&Progress {
                        reported: self.reported(),
                        running: self.running().len(),
                        elapsed: start.elapsed(),
                    });
                }

                if submission_ended.load(Ordering::SeqCst) && self.reported() == self.submitted() {
                    break;
                }
            }
        });

        let summary = Summary {
            submitted: self.submitted(),
            reported: self.reported(),
            peak_running: self.peak_running(),
            interrupted: self.interrupted(),
        };
        log::info!(target: targets::SCHEDULER, "{summary:?}");
        summary
    }
}

/// The report of `evaluate`, or a report of an error if `evaluate` panics.
///
/// Every job sends a completion, so a run always ends.
fn evaluate_or_error(instance: &Instance, trial: usize, evaluate: impl FnOnce() -> Report) -> Report {
    match panic::catch_unwind(AssertUnwindSafe(evaluate)) {
        Ok(report) => report,
        Err(_) => {
            let item = &instance.item;
            log::error!(target: targets::SCHEDULER, "Evaluation of {} trial {trial} panicked", item.name);
            Report::without_process(&item.name, trial, &item.tags, Status::Error)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn panics_are_reported() {
        let instance = Instance::new(WorkItem {
            tags: vec!["crafted".to_string()],
            ..WorkItem::from_path(Path::new("instance.cnf"))
        });

        let report = evaluate_or_error(&instance, 2, || panic!("evaluation failed"));
        assert_eq!(report.status, Status::Error);
        assert_eq!(report.instance, "instance.cnf");
        assert_eq!(report.trial, 2);
        assert_eq!(report.tags, vec!["crafted".to_string()]);
        assert_eq!(report.elapsed, None);

        let fine = Report::without_process("instance.cnf", 0, &[], Status::Unknown);
        assert_eq!(evaluate_or_error(&instance, 0, || fine.clone()).status, Status::Unknown);
    }
}
