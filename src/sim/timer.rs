//! Deferred one-shot actions against a frame clock
//!
//! Owners advance their own clock from the frame `dt` and poll for due actions.
//! An action is pending at most once: scheduling it again moves its deadline.

/// Pending `(fire_at, action)` pairs
#[derive(Debug, Clone)]
pub struct Scheduler<A> {
    pending: Vec<(f64, A)>,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<A: Copy + PartialEq> Scheduler<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any pending `action`, then schedule it to fire `delay` seconds after `now`.
    pub fn reschedule(&mut self, now: f64, delay: f64, action: A) {
        self.cancel(action);
        self.pending.push((now + delay, action));
    }

    /// Drop a pending action. Returns true if one was pending.
    pub fn cancel(&mut self, action: A) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(_, a)| *a != action);
        self.pending.len() != before
    }

    /// Drop every pending action
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Deadline of a pending action
    pub fn deadline(&self, action: A) -> Option<f64> {
        self.pending
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(at, _)| *at)
    }

    pub fn is_pending(&self, action: A) -> bool {
        self.deadline(action).is_some()
    }

    /// Remove and return every action due at `now`, earliest first
    pub fn poll(&mut self, now: f64) -> Vec<A> {
        let mut due: Vec<(f64, A)> = Vec::new();
        self.pending.retain(|&(at, action)| {
            if at <= now {
                due.push((at, action));
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.0.total_cmp(&b.0));
        due.into_iter().map(|(_, action)| action).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Action {
        A,
        B,
    }

    #[test]
    fn test_fires_once_when_due() {
        let mut timers = Scheduler::new();
        timers.reschedule(0.0, 1.0, Action::A);
        assert!(timers.poll(0.5).is_empty());
        assert_eq!(timers.poll(1.0), vec![Action::A]);
        assert!(timers.poll(5.0).is_empty());
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let mut timers = Scheduler::new();
        timers.reschedule(0.0, 1.0, Action::A);
        timers.reschedule(0.8, 1.0, Action::A);
        assert_eq!(timers.deadline(Action::A), Some(1.8));
        assert!(timers.poll(1.5).is_empty());
        assert_eq!(timers.poll(1.8), vec![Action::A]);
    }

    #[test]
    fn test_cancel() {
        let mut timers = Scheduler::new();
        timers.reschedule(0.0, 1.0, Action::A);
        timers.reschedule(0.0, 1.0, Action::B);
        assert!(timers.cancel(Action::A));
        assert!(!timers.cancel(Action::A));
        assert_eq!(timers.poll(2.0), vec![Action::B]);

        timers.reschedule(0.0, 1.0, Action::A);
        timers.cancel_all();
        assert!(!timers.is_pending(Action::A));
    }

    #[test]
    fn test_poll_orders_by_deadline() {
        let mut timers = Scheduler::new();
        timers.reschedule(0.0, 0.3, Action::A);
        timers.reschedule(0.0, 0.1, Action::B);
        assert_eq!(timers.poll(1.0), vec![Action::B, Action::A]);
    }
}
