//! Single-threaded event loop with a virtual clock.
//!
//! Work is either *posted* (runs on the next drain, FIFO) or *scheduled*
//! against the loop's clock. The clock only moves when the host asks for the
//! next task due before some deadline, which keeps every test deterministic.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::time::Duration;

/// Handle returned by the scheduling calls, used to cancel a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A scheduled task
#[derive(Debug)]
struct ScheduledTask<T> {
    /// When the task should run, relative to loop creation
    run_at: Duration,
    /// Tie-breaker so equal deadlines run in scheduling order
    seq: u64,
    id: TimerId,
    task: T,
    /// If Some, this is a repeating task with the given interval
    repeat_interval: Option<Duration>,
}

impl<T> PartialEq for ScheduledTask<T> {
    fn eq(&self, other: &Self) -> bool {
        self.run_at == other.run_at && self.seq == other.seq
    }
}

impl<T> Eq for ScheduledTask<T> {}

impl<T> PartialOrd for ScheduledTask<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ScheduledTask<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first)
        other
            .run_at
            .cmp(&self.run_at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Ready queue plus timer heap.
#[derive(Debug)]
pub struct EventLoop<T> {
    now: Duration,
    ready: VecDeque<T>,
    timers: BinaryHeap<ScheduledTask<T>>,
    next_id: u64,
    next_seq: u64,
}

impl<T> Default for EventLoop<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EventLoop<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            ready: VecDeque::new(),
            timers: BinaryHeap::new(),
            next_id: 0,
            next_seq: 0,
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue a task to run on the next drain.
    pub fn post(&mut self, task: T) {
        self.ready.push_back(task);
    }

    /// Add a one-shot task
    pub fn schedule_after(&mut self, delay: Duration, task: T) -> TimerId {
        self.push(delay, task, None)
    }

    /// Add a repeating task. Intervals below one millisecond are clamped.
    pub fn schedule_every(&mut self, interval: Duration, task: T) -> TimerId {
        let interval = interval.max(Duration::from_millis(1));
        self.push(interval, task, Some(interval))
    }

    /// Cancel a pending timer. Returns `false` if it already ran or was
    /// never scheduled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Number of armed timers
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn has_ready(&self) -> bool {
        !self.ready.is_empty()
    }

    /// Get duration until next timer (for host sleeps)
    pub fn time_until_next(&self) -> Option<Duration> {
        self.timers
            .peek()
            .map(|t| t.run_at.saturating_sub(self.now))
    }

    /// Move the clock forward to `deadline`. The clock never runs backwards.
    pub fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    fn push(&mut self, delay: Duration, task: T, repeat_interval: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.next_seq;
        self.next_seq += 1;

        self.timers.push(ScheduledTask {
            run_at: self.now + delay,
            seq,
            id,
            task,
            repeat_interval,
        });

        id
    }
}

impl<T: Clone> EventLoop<T> {
    /// Next task to run without passing `deadline`.
    ///
    /// Posted tasks come first. Otherwise the earliest timer due at or before
    /// `deadline` is popped, the clock jumps to its deadline, and repeating
    /// timers are re-armed before the task is handed out.
    pub fn next_due(&mut self, deadline: Duration) -> Option<T> {
        if let Some(task) = self.ready.pop_front() {
            return Some(task);
        }

        if self.timers.peek()?.run_at > deadline {
            return None;
        }
        let scheduled = self.timers.pop()?;
        self.now = self.now.max(scheduled.run_at);

        match scheduled.repeat_interval {
            Some(interval) => {
                let task = scheduled.task.clone();
                let seq = self.next_seq;
                self.next_seq += 1;
                self.timers.push(ScheduledTask {
                    run_at: scheduled.run_at + interval,
                    seq,
                    ..scheduled
                });
                Some(task)
            }
            None => Some(scheduled.task),
        }
    }
}
