//! Rate limiting for high-frequency input (scroll, mouse, resize).

use std::time::Duration;

use crate::scheduler::{EventLoop, TimerId};

/// Leading-edge throttle: the first call in a window passes, the rest are
/// dropped until `limit` has elapsed.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    open_at: Option<Duration>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            open_at: None,
        }
    }

    pub fn try_fire(&mut self, now: Duration) -> bool {
        match self.open_at {
            Some(open_at) if now < open_at => false,
            _ => {
                self.open_at = Some(now + self.limit);
                true
            }
        }
    }
}

/// Trailing debounce: each call replaces the pending timer, so the task runs
/// once input has paused for `wait`.
#[derive(Debug, Clone)]
pub struct Debounce {
    wait: Duration,
    pending: Option<TimerId>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn call<T>(&mut self, timers: &mut EventLoop<T>, task: T) {
        if let Some(id) = self.pending.take() {
            timers.cancel(id);
        }
        self.pending = Some(timers.schedule_after(self.wait, task));
    }

    /// Mark the pending task as run.
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn throttle_passes_leading_call_only() {
        let mut throttle = Throttle::new(ms(100));
        assert!(throttle.try_fire(ms(0)));
        assert!(!throttle.try_fire(ms(10)));
        assert!(!throttle.try_fire(ms(99)));
        assert!(throttle.try_fire(ms(100)));
        assert!(!throttle.try_fire(ms(150)));
    }

    #[test]
    fn debounce_runs_once_after_quiet_period() {
        let mut timers = EventLoop::new();
        let mut debounce = Debounce::new(ms(150));

        debounce.call(&mut timers, "resize");
        timers.settle(ms(100));
        debounce.call(&mut timers, "resize");
        assert_eq!(timers.pending_timers(), 1);

        assert_eq!(timers.next_due(ms(249)), None);
        assert_eq!(timers.next_due(ms(250)), Some("resize"));
        debounce.fired();
        assert!(!debounce.is_pending());
    }
}
