use std::{
    io::{stderr, IsTerminal, Stderr, Write},
    time::Duration,
};

use crossterm::{cursor, terminal, QueueableCommand};

use otter_bench::scheduler::Progress;

/// A count of reports on stderr, redrawn in place on a terminal.
pub struct ProgressLine {
    stderr: Stderr,
    terminal: bool,
    drawn: bool,
    last_reported: Option<usize>,
}

impl ProgressLine {
    pub fn new() -> Self {
        let stderr = stderr();
        let terminal = stderr.is_terminal();
        ProgressLine {
            stderr,
            terminal,
            drawn: false,
            last_reported: None,
        }
    }

    pub fn update(&mut self, progress: &Progress) {
        let line = format!(
            "Solved {} after {} ({} running)",
            progress.reported,
            hms(progress.elapsed),
            progress.running
        );

        match self.terminal {
            true => {
                self.clear();
                let _ = self.stderr.write_all(line.as_bytes());
                let _ = self.stderr.flush();
                self.drawn = true;
            }

            false => {
                if self.last_reported != Some(progress.reported) {
                    let _ = writeln!(self.stderr, "{line}");
                    self.last_reported = Some(progress.reported);
                }
            }
        }
    }

    /// Removes the line, if drawn, so other output may take its place.
    pub fn clear(&mut self) {
        if self.drawn {
            let _ = self.stderr.queue(cursor::MoveToColumn(0));
            let _ = self
                .stderr
                .queue(terminal::Clear(terminal::ClearType::CurrentLine));
            let _ = self.stderr.flush();
            self.drawn = false;
        }
    }

    pub fn finish(&mut self) {
        if self.drawn {
            let _ = writeln!(self.stderr);
            self.drawn = false;
        }
    }
}

/// A duration as hours, minutes, and seconds.
fn hms(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}
