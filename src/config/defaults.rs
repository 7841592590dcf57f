use std::time::Duration;

/// The number of trials of an instance when checking a single instance.
pub const CHECK_REPEAT: usize = 3;

/// The number of trials of an instance when scheduling many instances.
pub const SCHEDULE_REPEAT: usize = 1;

pub const MAX_JOBS: usize = 2;

pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// The placeholder in a path template replaced by the name of an instance.
pub const PATH_PLACEHOLDER: &str = "{name}";

/// The placeholder in an invocation replaced by the path to an instance.
pub const INPUT_PLACEHOLDER: &str = "{input}";

/// The placeholder in an invocation replaced by what is expected of an instance.
pub const EXPECTED_PLACEHOLDER: &str = "{expected}";

/// The prefix of the temporary directory made for each job.
pub const JOB_DIR_PREFIX: &str = "otter_bench-";
