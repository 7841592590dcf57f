#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    process::Command,
    sync::{atomic::AtomicBool, Arc},
    thread,
    time::{Duration, Instant},
};

use otter_bench::{
    config::Config,
    runner::{Interrupt, Invocation, WorkItem},
    structures::expectation::Expectation,
};

/// (1 ∨ 2) ∧ (¬1 ∨ ¬2)
pub const FORMULA: &str = "p cnf 2 2\n1 2 0\n-1 -2 0\n";

pub const SAT_GOOD: &str = "printf 's SATISFIABLE\\nv 1 -2 0\\n'";
pub const SAT_BAD: &str = "printf 's SATISFIABLE\\nv -1 -2 0\\n'";
pub const UNSAT: &str = "printf 's UNSATISFIABLE\\n'";
pub const UNKNOWN: &str = "printf 's UNKNOWN\\n'";

/// A directory with an instance of [FORMULA], and space for job output.
pub struct Bench {
    pub dir: tempfile::TempDir,
    pub instance: PathBuf,
}

impl Bench {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let instance = dir.path().join("instance.cnf");
        std::fs::write(&instance, FORMULA).unwrap();
        Bench { dir, instance }
    }

    pub fn work_dir(&self) -> PathBuf {
        self.dir.path().join("jobs")
    }

    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.work_dir = self.work_dir();
        config.poll_interval.value = Duration::from_millis(10);
        config
    }

    pub fn item(&self, expectation: Expectation) -> WorkItem {
        WorkItem {
            expectation,
            ..WorkItem::from_path(&self.instance)
        }
    }

    /// Items with distinct names, all on the instance.
    pub fn items(&self, count: usize) -> Vec<WorkItem> {
        (0..count)
            .map(|index| WorkItem {
                name: format!("instance-{index}"),
                ..self.item(Expectation::Unknown)
            })
            .collect()
    }
}

/// A solver given by a shell script, with the path to the instance as `$1`.
pub fn shell(script: &str) -> Invocation {
    Invocation::new(vec![
        "/bin/sh".to_string(),
        "-c".to_string(),
        script.to_string(),
        "solver".to_string(),
        "{input}".to_string(),
    ])
    .unwrap()
}

pub fn no_interrupt() -> Interrupt {
    Arc::new(AtomicBool::new(false))
}

/// A script which starts a long sleep in the background, writes the id of the sleep to `pid_file`, and waits.
pub fn background_sleep(pid_file: &Path) -> String {
    format!("sleep 30 & echo $! > '{}'; wait", pid_file.display())
}

/// The id written to `pid_file`, waiting a little for the file to be written.
pub fn read_pid(pid_file: &Path) -> u32 {
    let start = Instant::now();
    loop {
        if let Ok(contents) = std::fs::read_to_string(pid_file) {
            if let Ok(pid) = contents.trim().parse() {
                return pid;
            }
        }
        assert!(start.elapsed() < Duration::from_secs(5), "No pid in {pid_file:?}");
        thread::sleep(Duration::from_millis(10));
    }
}

/// Whether the process is running, with a zombie counted as stopped.
pub fn running(pid: u32) -> bool {
    match std::fs::read_to_string(format!("/proc/{pid}/stat")) {
        Ok(stat) => match stat.rsplit_once(')') {
            Some((_, rest)) => !rest.trim_start().starts_with('Z'),
            None => true,
        },
        Err(_) => Command::new("kill")
            .args(["-0", &pid.to_string()])
            .status()
            .is_ok_and(|status| status.success()),
    }
}

/// Whether the process stops within a couple of seconds.
pub fn stops(pid: u32) -> bool {
    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(2) {
        if !running(pid) {
            return true;
        }
        thread::sleep(Duration::from_millis(20));
    }
    false
}
