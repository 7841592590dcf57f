/*!
Configuration of an evaluation.

All configuration for an evaluation is contained in [Config], which is cloned into the parts of an evaluation which need it.
Defaults are collected in [defaults].

Bounded options are [ConfigOption]s, and should be updated through [set](ConfigOption::set).

```rust
# use otter_bench::config::Config;
let mut config = Config::default();
assert!(config.max_jobs.set(4));
assert!(!config.max_jobs.set(0));
assert_eq!(config.instance_path("uf20-01.cnf"), std::path::PathBuf::from("uf20-01.cnf"));

config.path_template = "instances/{name}.gz".to_string();
assert_eq!(config.instance_path("uf20-01.cnf"), std::path::PathBuf::from("instances/uf20-01.cnf.gz"));
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod defaults;

use std::{path::PathBuf, time::Duration};

use crate::structures::expectation::Expectation;

/// Configuration of the DIMACS reader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimacsConfig {
    /// Permit a final clause without a terminating `0`, as many instances in the wild omit it.
    pub allow_unterminated_clause: bool,

    /// Require the counts in a problem specification to agree with the formula.
    pub check_header: bool,
}

impl Default for DimacsConfig {
    fn default() -> Self {
        DimacsConfig {
            allow_unterminated_clause: true,
            check_header: false,
        }
    }
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The deadline for each job, if any.
    pub time_limit: Option<Duration>,

    /// The number of trials of each instance.
    pub repeat: ConfigOption<usize>,

    /// The maximum number of jobs running at any time.
    pub max_jobs: ConfigOption<usize>,

    /// The interval at which the coordinator looks for completed jobs.
    pub poll_interval: ConfigOption<Duration>,

    /// What is known about the satisfiability of instances, when not given by a selection.
    pub expectation: Expectation,

    /// A template for the path of an instance, with [PATH_PLACEHOLDER](defaults::PATH_PLACEHOLDER) replaced by the name of the instance.
    pub path_template: String,

    /// The directory within which a temporary directory is made for each job.
    pub work_dir: PathBuf,

    pub dimacs: DimacsConfig,

    /// Treat lines of solver output with an unrecognised prefix as an invalid solution, rather than ignoring them.
    pub strict_solution_lines: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            time_limit: None,

            repeat: ConfigOption {
                name: "repeat",
                min: 1,
                max: usize::MAX,
                value: defaults::SCHEDULE_REPEAT,
            },

            max_jobs: ConfigOption {
                name: "max_jobs",
                min: 1,
                max: usize::MAX,
                value: defaults::MAX_JOBS,
            },

            poll_interval: ConfigOption {
                name: "poll_interval",
                min: Duration::from_millis(1),
                max: Duration::from_secs(60),
                value: defaults::POLL_INTERVAL,
            },

            expectation: Expectation::Unknown,

            path_template: defaults::PATH_PLACEHOLDER.to_string(),

            work_dir: std::env::temp_dir(),

            dimacs: DimacsConfig::default(),

            strict_solution_lines: false,
        }
    }
}

impl Config {
    /// The path to an instance, following the path template.
    pub fn instance_path(&self, name: &str) -> PathBuf {
        PathBuf::from(self.path_template.replace(defaults::PATH_PLACEHOLDER, name))
    }
}
