//! Countdown timer for a recipe's cook time.
//!
//! The timer is a plain state machine; it owns no thread. Whoever shows the
//! timer schedules a repeating callback at [`TickHandle::interval`] and calls
//! [`CookTimer::tick`] from it until the handle is cancelled.

use std::time::Duration;

mod duration;
mod handle;

pub use duration::parse_duration;
pub use handle::TickHandle;

const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Not running; the full duration is loaded
    Idle,
    Running,
    /// Counted down to zero
    Expired,
}

#[derive(Debug)]
pub struct CookTimer {
    duration: u64,
    remaining: u64,
    state: TimerState,
    interval: Duration,
    handle: Option<TickHandle>,
}

impl CookTimer {
    /// Creates an idle timer for `duration` seconds.
    pub fn new(duration: u64) -> Self {
        CookTimer {
            duration,
            remaining: duration,
            state: TimerState::Idle,
            interval: DEFAULT_TICK_INTERVAL,
            handle: None,
        }
    }

    /// Creates an idle timer from a recipe duration such as `"1 hour 30 minutes"`.
    pub fn from_text(text: &str) -> Self {
        Self::new(parse_duration(text))
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Starts counting down and returns the handle the host should tick through.
    ///
    /// If nothing is left on the clock (after a stop or an expiry) the full
    /// duration is reloaded first. Starting a running timer returns the
    /// existing handle.
    pub fn start(&mut self) -> TickHandle {
        if let (TimerState::Running, Some(handle)) = (self.state, &self.handle) {
            return handle.clone();
        }

        if self.remaining == 0 {
            self.remaining = self.duration;
        }

        let handle = TickHandle::new(self.interval);
        if self.remaining == 0 {
            handle.cancel();
            self.state = TimerState::Expired;
            log::debug!("Cook timer has no duration, expired immediately");
            return handle;
        }

        self.state = TimerState::Running;
        self.handle = Some(handle.clone());
        log::debug!("Cook timer started with {}s remaining", self.remaining);
        handle
    }

    /// Stops a running timer. The remaining time is cleared, not paused.
    pub fn stop(&mut self) {
        if self.state != TimerState::Running {
            return;
        }
        self.detach();
        self.remaining = 0;
        self.state = TimerState::Idle;
        log::debug!("Cook timer stopped");
    }

    /// Advances the countdown by one second.
    ///
    /// Ignored unless the timer is running with a live tick handle.
    pub fn tick(&mut self) -> TimerState {
        let Some(handle) = self.handle.as_ref().filter(|h| h.is_active()) else {
            return self.state;
        };
        if self.state != TimerState::Running {
            return self.state;
        }

        handle.record_tick();
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.detach();
            self.state = TimerState::Expired;
            log::debug!("Cook timer expired");
        }
        self.state
    }

    /// Delivers a tick only if it comes from the handle of the current run.
    pub fn tick_from(&mut self, handle: &TickHandle) -> TimerState {
        match &self.handle {
            Some(current) if current.same_schedule(handle) => self.tick(),
            _ => self.state,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Seconds left on the clock.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Remaining time as `H:MM:SS`, or `MM:SS` under an hour.
    pub fn remaining_display(&self) -> String {
        format_clock(self.remaining)
    }

    fn detach(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

impl Drop for CookTimer {
    fn drop(&mut self) {
        self.detach();
    }
}

fn format_clock(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_is_idle() {
        let timer = CookTimer::from_text("1 hour 30 minutes");
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.duration(), 5400);
        assert_eq!(timer.remaining(), 5400);
        assert_eq!(timer.remaining_display(), "1:30:00");
    }

    #[test]
    fn test_counts_down_to_expired() {
        let mut timer = CookTimer::new(3);
        let handle = timer.start();
        assert_eq!(timer.state(), TimerState::Running);
        assert!(handle.is_active());

        assert_eq!(timer.tick(), TimerState::Running);
        assert_eq!(timer.tick(), TimerState::Running);
        assert_eq!(timer.remaining(), 1);
        assert_eq!(timer.tick(), TimerState::Expired);
        assert_eq!(timer.remaining(), 0);
        assert!(!handle.is_active());
        assert_eq!(handle.ticks(), 3);
    }

    #[test]
    fn test_expired_after_duration_ticks() {
        let duration = parse_duration("45 minutes");
        let mut timer = CookTimer::new(duration);
        timer.start();
        for _ in 0..duration {
            timer.tick();
        }
        assert_eq!(timer.state(), TimerState::Expired);
        assert_eq!(timer.remaining(), 0);
        assert!(!timer.is_running());

        // Further ticks clamp at zero
        assert_eq!(timer.tick(), TimerState::Expired);
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_stop_resets_remaining() {
        let mut timer = CookTimer::new(120);
        let handle = timer.start();
        timer.tick();
        timer.stop();

        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining(), 0);
        assert!(!handle.is_active());

        // Ticks after stop are ignored
        assert_eq!(timer.tick(), TimerState::Idle);
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_restart_reloads_duration() {
        let mut timer = CookTimer::new(60);
        timer.start();
        timer.stop();

        let handle = timer.start();
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.remaining(), 60);
        assert!(handle.is_active());
    }

    #[test]
    fn test_start_while_running_keeps_handle() {
        let mut timer = CookTimer::new(60);
        let first = timer.start();
        timer.tick();
        let second = timer.start();
        assert!(first.same_schedule(&second));
        assert_eq!(timer.remaining(), 59);
    }

    #[test]
    fn test_stale_handle_is_ignored() {
        let mut timer = CookTimer::new(60);
        let old = timer.start();
        timer.stop();
        let current = timer.start();

        assert_eq!(timer.tick_from(&old), TimerState::Running);
        assert_eq!(timer.remaining(), 60);
        timer.tick_from(&current);
        assert_eq!(timer.remaining(), 59);
    }

    #[test]
    fn test_cancelled_handle_stops_ticks() {
        let mut timer = CookTimer::new(10);
        let handle = timer.start();
        handle.cancel();
        timer.tick();
        assert_eq!(timer.remaining(), 10);
    }

    #[test]
    fn test_zero_duration() {
        let mut timer = CookTimer::from_text("no time at all");
        let handle = timer.start();
        assert_eq!(timer.state(), TimerState::Expired);
        assert!(!handle.is_active());
    }

    #[test]
    fn test_idle_ticks_ignored() {
        let mut timer = CookTimer::new(10);
        assert_eq!(timer.tick(), TimerState::Idle);
        assert_eq!(timer.remaining(), 10);
    }

    #[test]
    fn test_interval() {
        let timer = CookTimer::new(10).with_interval(Duration::from_millis(100));
        assert_eq!(timer.interval(), Duration::from_millis(100));
        assert_eq!(CookTimer::new(10).interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(2700), "45:00");
        assert_eq!(format_clock(3661), "1:01:01");
    }
}
