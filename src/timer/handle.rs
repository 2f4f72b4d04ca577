use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Handle to the repeating tick that drives a running [`CookTimer`].
///
/// The host's scheduler fires [`CookTimer::tick`] every [`interval`] for as
/// long as the handle is active. Cancelling detaches the schedule; ticks that
/// still arrive afterwards are ignored by the timer.
///
/// [`CookTimer`]: super::CookTimer
/// [`CookTimer::tick`]: super::CookTimer::tick
/// [`interval`]: TickHandle::interval
#[derive(Debug, Clone)]
pub struct TickHandle {
    inner: Arc<TickSchedule>,
}

#[derive(Debug)]
struct TickSchedule {
    interval: Duration,
    active: AtomicBool,
    ticks: AtomicU64,
}

impl TickHandle {
    pub(crate) fn new(interval: Duration) -> Self {
        TickHandle {
            inner: Arc::new(TickSchedule {
                interval,
                active: AtomicBool::new(true),
                ticks: AtomicU64::new(0),
            }),
        }
    }

    pub fn interval(&self) -> Duration {
        self.inner.interval
    }

    pub fn is_active(&self) -> bool {
        self.inner.active.load(Ordering::Acquire)
    }

    pub fn cancel(&self) {
        self.inner.active.store(false, Ordering::Release);
    }

    /// Number of ticks delivered through this handle.
    pub fn ticks(&self) -> u64 {
        self.inner.ticks.load(Ordering::Acquire)
    }

    pub(crate) fn record_tick(&self) {
        self.inner.ticks.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn same_schedule(&self, other: &TickHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let handle = TickHandle::new(Duration::from_secs(1));
        let clone = handle.clone();
        assert!(clone.is_active());

        handle.cancel();
        assert!(!clone.is_active());
        assert!(handle.same_schedule(&clone));
    }

    #[test]
    fn test_tick_counter() {
        let handle = TickHandle::new(Duration::from_millis(500));
        handle.record_tick();
        handle.record_tick();
        assert_eq!(handle.ticks(), 2);
        assert_eq!(handle.interval(), Duration::from_millis(500));
    }
}
