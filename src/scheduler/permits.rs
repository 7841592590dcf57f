use std::time::Duration;

use crossbeam::channel::{bounded, Receiver, RecvTimeoutError, Sender};

use crate::misc::log::targets::{self};

/// A fixed number of permits to run a job.
///
/// Permits are tokens in a bounded channel, filled at creation.
/// Acquiring a permit takes a token, and releasing a permit returns the token.
///
/// There is always at least one permit, as a channel bounded by zero holds no tokens.
pub struct Permits {
    give: Sender<()>,
    take: Receiver<()>,
}

impl Permits {
    pub fn new(count: usize) -> Self {
        if count == 0 {
            log::warn!(target: targets::SCHEDULER, "No permits requested, using one");
        }
        let count = count.max(1);
        let (give, take) = bounded(count);
        for _ in 0..count {
            let _ = give.try_send(());
        }
        Permits { give, take }
    }

    /// Waits at most `patience` for a permit.
    pub fn acquire(&self, patience: Duration) -> Result<(), RecvTimeoutError> {
        self.take.recv_timeout(patience)
    }

    pub fn release(&self) {
        if self.give.try_send(()).is_err() {
            log::error!(target: targets::SCHEDULER, "A permit was released without being acquired");
        }
    }

    /// The count of permits not acquired.
    pub fn available(&self) -> usize {
        self.take.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded() {
        let permits = Permits::new(2);
        let patience = Duration::from_millis(1);

        assert!(permits.acquire(patience).is_ok());
        assert!(permits.acquire(patience).is_ok());
        assert_eq!(permits.acquire(patience), Err(RecvTimeoutError::Timeout));

        permits.release();
        assert_eq!(permits.available(), 1);
        assert!(permits.acquire(patience).is_ok());
    }

    #[test]
    fn at_least_one() {
        let permits = Permits::new(0);
        let patience = Duration::from_millis(1);

        assert_eq!(permits.available(), 1);
        assert!(permits.acquire(patience).is_ok());
        assert_eq!(permits.acquire(patience), Err(RecvTimeoutError::Timeout));
    }
}
