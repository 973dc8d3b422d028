//! Keyed one-shot timers.
//!
//! The site runs on a single cooperative thread, so "timers" are just
//! deadlines that the coordinator checks on every tick. Scheduling a key
//! that is already pending replaces its deadline: debounces never stack.

use crate::types::Millis;

#[derive(Debug, Clone)]
struct Entry<K> {
    key: K,
    deadline: Millis,
    seq: u64,
}

#[derive(Debug, Clone)]
pub struct TimerQueue<K> {
    entries: Vec<Entry<K>>,
    next_seq: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<K: PartialEq + Clone> TimerQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `key` to fire at `deadline`. Returns true if a pending timer
    /// with the same key was replaced.
    pub fn schedule_at(&mut self, key: K, deadline: Millis) -> bool {
        let replaced = self.cancel(&key);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { key, deadline, seq });
        replaced
    }

    pub fn schedule(&mut self, key: K, now: Millis, delay: Millis) -> bool {
        self.schedule_at(key, now.saturating_add(delay))
    }

    pub fn cancel(&mut self, key: &K) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.key != key);
        before != self.entries.len()
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.entries.iter().any(|e| &e.key == key)
    }

    pub fn deadline(&self, key: &K) -> Option<Millis> {
        self.entries.iter().find(|e| &e.key == key).map(|e| e.deadline)
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return every timer due at `now`, ordered by deadline and
    /// then by the order they were armed.
    pub fn take_due(&mut self, now: Millis) -> Vec<K> {
        let mut due: Vec<Entry<K>> = Vec::new();
        self.entries.retain(|e| {
            if e.deadline <= now {
                due.push(e.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|e| (e.deadline, e.seq));
        due.into_iter().map(|e| e.key).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule("b", 0, 200);
        q.schedule("a", 0, 100);
        q.schedule("c", 0, 100);
        assert!(q.take_due(99).is_empty());
        assert_eq!(q.take_due(150), vec!["a", "c"]);
        assert_eq!(q.take_due(1000), vec!["b"]);
        assert!(q.is_empty());
    }

    #[test]
    fn rescheduling_replaces_instead_of_stacking() {
        let mut q = TimerQueue::new();
        assert!(!q.schedule("resize", 0, 250));
        assert!(q.schedule("resize", 100, 250));
        assert!(q.schedule("resize", 200, 250));
        assert_eq!(q.len(), 1);
        assert_eq!(q.deadline(&"resize"), Some(450));
        assert!(q.take_due(449).is_empty());
        assert_eq!(q.take_due(450), vec!["resize"]);
    }

    #[test]
    fn cancel_removes_pending() {
        let mut q = TimerQueue::new();
        q.schedule(1u8, 0, 10);
        assert!(q.cancel(&1));
        assert!(!q.cancel(&1));
        assert!(q.take_due(100).is_empty());
    }
}
