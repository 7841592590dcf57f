/*!
Launching and supervising a single solver invocation.

A [Runner] launches a solver with stdin read from nothing and stdout/stderr written to files in a directory private to the job, and waits for the solver to exit or for the deadline to pass, whichever comes first.
On a passed deadline the solver is killed, and the job has timed out.

On unix each solver leads a process group of its own, and killing a solver kills the group.
So, processes started by a solver (e.g. by a wrapper script) do not outlive the job.

Waiting is in slices of at most the poll interval, between which a shared interrupt flag is checked.
An interrupted job is killed in the same way as a job which timed out.

Runners share nothing mutable but the interrupt flag and the file system, and so any number may run at once.

The directory made for a job is left in place, together with the output of the solver.
Removing it is up to the caller.
*/

mod evaluate;
pub use evaluate::Evaluator;

mod instance;
pub use instance::{Instance, WorkItem};

mod invocation;
pub use invocation::Invocation;

use std::{
    fs::File,
    path::{Path, PathBuf},
    process::{Child, Command, Stdio},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use wait_timeout::ChildExt;

use crate::{
    config::{defaults::JOB_DIR_PREFIX, Config},
    misc::log::targets::{self},
    types::err::{self},
};

/// A flag shared by everything which should stop on a request to interrupt an evaluation.
pub type Interrupt = Arc<AtomicBool>;

/// How a solver stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    /// The solver exited with the given code.
    Finished(i32),

    /// The solver was ended by a signal it did not ask for.
    Signalled,

    /// The deadline passed, and the solver was killed.
    TimedOut,

    /// The evaluation was interrupted, and the solver was killed (or exited after the interrupt).
    Interrupted,
}

/// The result of a launch.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    pub exit: Exit,

    /// Wall-clock time from launch until exit, or until the solver was killed.
    pub elapsed: Duration,

    pub stdout: PathBuf,

    pub stderr: PathBuf,
}

#[derive(Clone, Debug)]
pub struct Runner {
    time_limit: Option<Duration>,
    poll_interval: Duration,
    work_dir: PathBuf,
    interrupt: Interrupt,
}

impl Runner {
    pub fn new(
        time_limit: Option<Duration>,
        poll_interval: Duration,
        work_dir: PathBuf,
        interrupt: Interrupt,
    ) -> Self {
        Runner {
            time_limit,
            poll_interval,
            work_dir,
            interrupt,
        }
    }

    pub fn from_config(config: &Config, interrupt: Interrupt) -> Self {
        Runner::new(
            config.time_limit,
            config.poll_interval.value,
            config.work_dir.clone(),
            interrupt,
        )
    }

    pub fn interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Makes a fresh directory for a job on the named instance.
    pub fn job_dir(&self, name: &str) -> Result<PathBuf, err::RunnerError> {
        if let Err(e) = std::fs::create_dir_all(&self.work_dir) {
            return Err(err::RunnerError::WorkDir(e.kind()));
        }

        let base = match Path::new(name).file_name() {
            Some(base) => base.to_string_lossy().into_owned(),
            None => "instance".to_string(),
        };

        match tempfile::Builder::new()
            .prefix(&format!("{JOB_DIR_PREFIX}{base}-"))
            .tempdir_in(&self.work_dir)
        {
            Ok(dir) => Ok(dir.keep()),
            Err(e) => Err(err::RunnerError::WorkDir(e.kind())),
        }
    }

    /// Launches the program and arguments, writing output to files in `dir`, and waits for the program to stop.
    pub fn launch(&self, args: &[String], dir: &Path) -> Result<RunOutcome, err::RunnerError> {
        let Some((program, arguments)) = args.split_first() else {
            return Err(err::RunnerError::EmptyInvocation);
        };

        let stdout_path = dir.join("stdout");
        let stderr_path = dir.join("stderr");

        let stdout = File::create(&stdout_path).map_err(|e| err::RunnerError::Output(e.kind()))?;
        let stderr = File::create(&stderr_path).map_err(|e| err::RunnerError::Output(e.kind()))?;

        let mut command = Command::new(program);
        command
            .args(arguments)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr);

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        let start = Instant::now();
        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                log::warn!(target: targets::RUNNER, "Failed to launch {program}: {e}");
                return match e.kind() {
                    std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                        Err(err::RunnerError::MissingExecutable(program.clone()))
                    }
                    kind => Err(err::RunnerError::Spawn(kind)),
                };
            }
        };
        log::debug!(target: targets::RUNNER, "Launched {program} as {} in {dir:?}", child.id());

        let deadline = self.time_limit.map(|limit| start + limit);

        let exit = 'supervision: loop {
            let slice = match deadline {
                Some(deadline) => deadline
                    .saturating_duration_since(Instant::now())
                    .min(self.poll_interval),
                None => self.poll_interval,
            };

            match child.wait_timeout(slice) {
                Ok(Some(status)) => {
                    if self.interrupted() {
                        break 'supervision Exit::Interrupted;
                    }
                    match status.code() {
                        Some(code) => break 'supervision Exit::Finished(code),
                        None => break 'supervision Exit::Signalled,
                    }
                }

                Ok(None) => {
                    if self.interrupted() {
                        log::info!(target: targets::RUNNER, "Killing {} on interrupt", child.id());
                        kill_tree(&mut child);
                        break 'supervision Exit::Interrupted;
                    }

                    if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                        log::info!(target: targets::RUNNER, "Killing {} at the deadline", child.id());
                        kill_tree(&mut child);
                        break 'supervision Exit::TimedOut;
                    }
                }

                Err(e) => {
                    log::error!(target: targets::RUNNER, "Failed to wait on {}: {e}", child.id());
                    kill_tree(&mut child);
                    return Err(err::RunnerError::Wait(e.kind()));
                }
            }
        };

        let elapsed = start.elapsed();
        log::debug!(target: targets::RUNNER, "{program} stopped with {exit:?} after {elapsed:.2?}");

        Ok(RunOutcome {
            exit,
            elapsed,
            stdout: stdout_path,
            stderr: stderr_path,
        })
    }
}

/// Kills the solver and every process in its group, then reaps the solver.
///
/// The group is signalled before the solver is reaped, while the id of the group is certain to be held by the solver.
fn kill_tree(child: &mut Child) {
    #[cfg(unix)]
    {
        let group = child.id() as libc::pid_t;
        // SAFETY: kill takes no pointers, and a negative id names the process group of the solver.
        if unsafe { libc::kill(-group, libc::SIGKILL) } != 0 {
            let e = std::io::Error::last_os_error();
            log::warn!(target: targets::RUNNER, "Failed to kill the process group of {group}: {e}");
        }
    }

    let _ = child.kill();
    let _ = child.wait();
}
