//! Timer queue
//!
//! Single-shot, cancellable timers on a virtual clock. The embedder drives
//! time forward; nothing here sleeps or spawns.

use sitefx_dom::NodeId;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle returned by [`TimerQueue::schedule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Work a timer performs when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Invoke the toast's close control
    AutoCloseToast { toast: NodeId },
    /// Detach a toast whose exit transition finished
    RemoveToast { toast: NodeId },
}

/// Pending timers ordered by deadline, then by scheduling order
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TimerId), TimerTask>,
    deadlines: HashMap<TimerId, Duration>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the queue was created
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `task` once, `delay` from now
    pub fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let deadline = self.now + delay;
        self.queue.insert((deadline, id), task);
        self.deadlines.insert(id, deadline);
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(deadline) => self.queue.remove(&(deadline, id)).is_some(),
            None => false,
        }
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its deadline. Tasks scheduled while handling it are seen by the next call.
    pub fn next_due(&mut self, until: Duration) -> Option<TimerTask> {
        let (&(deadline, id), _) = self.queue.first_key_value()?;
        if deadline > until {
            return None;
        }
        self.deadlines.remove(&id);
        let task = self.queue.remove(&(deadline, id))?;
        self.now = self.now.max(deadline);
        Some(task)
    }

    /// Move the clock forward without firing anything
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Time until the next timer fires
    pub fn time_until_next(&self) -> Option<Duration> {
        self.queue
            .keys()
            .next()
            .map(|&(deadline, _)| deadline.saturating_sub(self.now))
    }
}
