//! Request Fence
//!
//! Orders overlapping update responses for the same todo. Every update is
//! issued a sequence number; a successful response is applied only when it is
//! newer than the last response applied to that todo. The most recently issued
//! successful update therefore wins, whatever order the responses arrive in,
//! and a failed newer request never masks an older success.

use std::collections::HashMap;

use crate::model::TodoId;

#[derive(Debug, Default)]
pub struct RequestFence {
    next_seq: u64,
    applied: HashMap<TodoId, u64>,
}

impl RequestFence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number for a request about to be sent
    pub fn issue(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Record a successful response. Returns false when a newer response for
    /// the same todo has already been applied and this one must be dropped.
    pub fn accept(&mut self, id: TodoId, seq: u64) -> bool {
        match self.applied.get(&id) {
            Some(&last) if last > seq => false,
            _ => {
                self.applied.insert(id, seq);
                true
            }
        }
    }

    pub fn forget(&mut self, id: TodoId) {
        self.applied.remove(&id);
    }

    /// Number of todos with an applied response on record
    pub fn len(&self) -> usize {
        self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_responses_apply() {
        let mut fence = RequestFence::new();
        let a = fence.issue();
        let b = fence.issue();
        assert!(fence.accept(1, a));
        assert!(fence.accept(1, b));
    }

    #[test]
    fn test_late_older_response_is_dropped() {
        let mut fence = RequestFence::new();
        let a = fence.issue();
        let b = fence.issue();
        assert!(fence.accept(1, b));
        assert!(!fence.accept(1, a));
    }

    #[test]
    fn test_todos_are_fenced_independently() {
        let mut fence = RequestFence::new();
        let a = fence.issue();
        let b = fence.issue();
        assert!(fence.accept(2, b));
        assert!(fence.accept(1, a));
    }

    #[test]
    fn test_forget_resets_todo() {
        let mut fence = RequestFence::new();
        let a = fence.issue();
        let b = fence.issue();
        fence.accept(1, b);
        fence.forget(1);
        assert!(fence.is_empty());
        assert!(fence.accept(1, a));
        assert_eq!(fence.len(), 1);
    }
}
