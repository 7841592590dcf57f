/*!
Aggregation of repeated trials of an instance.

Each trial of an instance is expected to end with the same return code and status as the first.
- A trial whose status is not [valid](Status::is_valid) ends aggregation with the status of the trial, and without timing.
- A trial whose return code or status differs from the first ends aggregation as [InconsistentResults](Status::InconsistentResults).
- Otherwise, the aggregate has the mean elapsed time of the trials, and a 95% confidence half-width.

```rust
# use otter_bench::aggregate::Trials;
# use otter_bench::reports::{Report, Status};
let trial = |trial, status, elapsed| Report {
    instance: "uf20-01.cnf".to_string(),
    trial,
    tags: vec![],
    return_code: Some(10),
    status,
    elapsed: Some(elapsed),
};

let mut trials = Trials::new("uf20-01.cnf");
assert!(trials.add(&trial(0, Status::Satisfiable, 1.0)));
assert!(trials.add(&trial(1, Status::Satisfiable, 3.0)));

let aggregate = trials.aggregate().unwrap();
assert_eq!(aggregate.status, Status::Satisfiable);
assert_eq!(aggregate.mean, Some(2.0));

assert!(!trials.add(&trial(2, Status::Unsatisfiable, 2.0)));
assert_eq!(trials.aggregate().unwrap().status, Status::InconsistentResults);
```
*/

pub mod statistics;

use crate::{
    misc::log::targets::{self},
    reports::{CallbackReport, Report, Status},
    runner::{Evaluator, Instance, WorkItem},
};

/// The outcome of some number of trials of an instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Aggregate {
    pub instance: String,

    pub return_code: Option<i32>,

    pub status: Status,

    /// The count of trials folded into the aggregate.
    pub trials: usize,

    /// Mean elapsed seconds, if every trial was valid and consistent.
    pub mean: Option<f64>,

    /// Half-width of a 95% confidence interval about the mean.
    pub ci: Option<f64>,
}

impl std::fmt::Display for Aggregate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.instance)?;
        match self.return_code {
            Some(code) => write!(f, " {code}")?,
            None => write!(f, " -")?,
        }
        write!(f, " {}", self.status)?;
        match (self.mean, self.ci) {
            (Some(mean), Some(ci)) => write!(f, " {mean:.3} {ci:.3}"),
            _ => write!(f, " - -"),
        }
    }
}

impl Aggregate {
    /// Aggregates reports on any number of instances, by instance in order of first appearance.
    ///
    /// The reports of an instance are folded in order of trial, regardless of the order given.
    pub fn from_reports(reports: &[Report]) -> Vec<Aggregate> {
        let mut order: Vec<&str> = Vec::default();
        let mut groups: std::collections::HashMap<&str, Vec<&Report>> =
            std::collections::HashMap::default();

        for report in reports {
            let group = groups.entry(report.instance.as_str()).or_insert_with(|| {
                order.push(report.instance.as_str());
                Vec::default()
            });
            group.push(report);
        }

        let mut aggregates = Vec::default();
        for instance in order {
            let Some(mut group) = groups.remove(instance) else {
                continue;
            };
            group.sort_by_key(|report| report.trial);

            let mut trials = Trials::new(instance);
            for report in group {
                if !trials.add(report) {
                    break;
                }
            }
            if let Some(aggregate) = trials.aggregate() {
                aggregates.push(aggregate);
            }
        }
        aggregates
    }
}

/// A fold over the trials of an instance, in order of trial.
#[derive(Clone, Debug)]
pub struct Trials {
    instance: String,

    /// The return code and status of the first trial.
    expected: Option<(Option<i32>, Status)>,

    /// The return code and status aggregation ended with, if ended early.
    ended: Option<(Option<i32>, Status)>,

    elapsed: Vec<f64>,

    count: usize,
}

impl Trials {
    pub fn new(instance: &str) -> Self {
        Trials {
            instance: instance.to_owned(),
            expected: None,
            ended: None,
            elapsed: Vec::default(),
            count: 0,
        }
    }

    pub fn has_ended(&self) -> bool {
        self.ended.is_some()
    }

    /// Folds in the report of the next trial, and returns whether further trials may be folded.
    pub fn add(&mut self, report: &Report) -> bool {
        if self.ended.is_some() {
            return false;
        }
        self.count += 1;

        let outcome = (report.return_code, report.status);

        if !report.status.is_valid() {
            log::info!(target: targets::AGGREGATE, "{} trial {}: {}", self.instance, report.trial, report.status);
            self.ended = Some(outcome);
            self.elapsed.clear();
            return false;
        }

        match self.expected {
            None => self.expected = Some(outcome),

            Some(expected) if expected != outcome => {
                log::warn!(target: targets::AGGREGATE, "{} trial {}: {outcome:?} after {expected:?}", self.instance, report.trial);
                self.ended = Some((None, Status::InconsistentResults));
                self.elapsed.clear();
                return false;
            }

            Some(_) => {}
        }

        if let Some(elapsed) = report.elapsed {
            self.elapsed.push(elapsed);
        }
        true
    }

    /// The aggregate of the trials folded so far, if any.
    pub fn aggregate(&self) -> Option<Aggregate> {
        let (return_code, status) = match (self.ended, self.expected) {
            (Some(ended), _) => ended,
            (None, Some(expected)) => expected,
            (None, None) => return None,
        };

        let (mean, ci) = match self.ended {
            Some(_) => (None, None),
            None => match statistics::mean_ci(&self.elapsed) {
                Some((mean, ci)) => (Some(mean), Some(ci)),
                None => (None, None),
            },
        };

        Some(Aggregate {
            instance: self.instance.clone(),
            return_code,
            status,
            trials: self.count,
            mean,
            ci,
        })
    }
}

/// Evaluates trials of the item one after another, until `repeat` trials or until aggregation ends.
///
/// Each report is passed on to `sink` once folded.
pub fn run_repeated(
    evaluator: &Evaluator,
    item: WorkItem,
    repeat: usize,
    sink: &mut CallbackReport,
) -> Option<Aggregate> {
    let instance = Instance::new(item);
    let mut trials = Trials::new(&instance.item.name);

    for trial in 0..repeat {
        let report = evaluator.evaluate(&instance, trial);
        let more = trials.add(&report);
        sink(report);
        if !more {
            break;
        }
    }

    trials.aggregate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(trial: usize, return_code: Option<i32>, status: Status, elapsed: f64) -> Report {
        Report {
            instance: "x.cnf".to_string(),
            trial,
            tags: vec![],
            return_code,
            status,
            elapsed: Some(elapsed),
        }
    }

    #[test]
    fn invalid_status_drops_timing() {
        let mut trials = Trials::new("x.cnf");
        assert!(trials.add(&report(0, Some(10), Status::Satisfiable, 1.0)));
        assert!(!trials.add(&report(1, None, Status::TimedOut, 5.0)));

        let aggregate = trials.aggregate().unwrap();
        assert_eq!(aggregate.status, Status::TimedOut);
        assert_eq!(aggregate.return_code, None);
        assert_eq!(aggregate.mean, None);
        assert_eq!(aggregate.trials, 2);
        assert_eq!(aggregate.to_string(), "x.cnf - timedout - -");
    }

    #[test]
    fn return_code_mismatch() {
        let mut trials = Trials::new("x.cnf");
        assert!(trials.add(&report(0, Some(10), Status::Satisfiable, 1.0)));
        assert!(!trials.add(&report(1, Some(0), Status::Satisfiable, 1.0)));

        let aggregate = trials.aggregate().unwrap();
        assert_eq!(aggregate.status, Status::InconsistentResults);
        assert_eq!(aggregate.return_code, None);
        assert!(trials.has_ended());
    }

    #[test]
    fn from_reports_orders_trials() {
        let reports = vec![
            report(1, Some(20), Status::Unsatisfiable, 3.0),
            Report {
                instance: "y.cnf".to_string(),
                ..report(0, Some(1), Status::MissingSolution, 0.1)
            },
            report(0, Some(20), Status::Unsatisfiable, 1.0),
        ];

        let aggregates = Aggregate::from_reports(&reports);
        assert_eq!(aggregates.len(), 2);

        assert_eq!(aggregates[0].instance, "x.cnf");
        assert_eq!(aggregates[0].status, Status::Unsatisfiable);
        assert_eq!(aggregates[0].mean, Some(2.0));
        assert_eq!(aggregates[0].trials, 2);

        assert_eq!(aggregates[1].instance, "y.cnf");
        assert_eq!(aggregates[1].status, Status::MissingSolution);
        assert_eq!(aggregates[1].return_code, Some(1));
    }

    #[test]
    fn nothing_to_aggregate() {
        assert!(Trials::new("x.cnf").aggregate().is_none());
    }
}
