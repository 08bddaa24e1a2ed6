//! Request Sequencing
//!
//! Requests may complete out of order. Each one takes a ticket when it is
//! issued; a response is applied only if no newer ticket was applied first.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    issued: u64,
    applied: u64,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Returns false (and leaves state untouched) for a stale ticket
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        true
    }

    /// No request is still in flight past the last applied one
    fn is_settled(&self) -> bool {
        self.applied == self.issued
    }
}

/// One sequence per key, for requests that only race against their own kind
/// (two toggles of the same item)
#[derive(Debug, Clone)]
pub struct KeyedSequencer<K> {
    by_key: HashMap<K, Sequencer>,
}

impl<K> Default for KeyedSequencer<K> {
    fn default() -> Self {
        Self { by_key: HashMap::new() }
    }
}

impl<K: Eq + Hash> KeyedSequencer<K> {
    pub fn issue(&mut self, key: K) -> Ticket {
        self.by_key.entry(key).or_default().issue()
    }

    /// Keys drop out once their latest request has been applied
    pub fn accept(&mut self, key: &K, ticket: Ticket) -> bool {
        let Some(seq) = self.by_key.get_mut(key) else {
            return false;
        };
        let accepted = seq.accept(ticket);
        if seq.is_settled() {
            self.by_key.remove(key);
        }
        accepted
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.by_key.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_responses_are_applied() {
        let mut seq = Sequencer::new();
        let first = seq.issue();
        assert!(seq.accept(first));
        let second = seq.issue();
        assert!(seq.accept(second));
    }

    #[test]
    fn test_older_response_after_newer_is_discarded() {
        let mut seq = Sequencer::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(seq.accept(second));
        assert!(!seq.accept(first));
    }

    #[test]
    fn test_same_ticket_is_applied_once() {
        let mut seq = Sequencer::new();
        let ticket = seq.issue();
        assert!(seq.accept(ticket));
        assert!(!seq.accept(ticket));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut seq = KeyedSequencer::default();
        let a1 = seq.issue("a");
        let b1 = seq.issue("b");
        let a2 = seq.issue("a");

        assert!(seq.accept(&"a", a2));
        assert!(!seq.accept(&"a", a1));
        assert!(seq.accept(&"b", b1));
        assert!(!seq.accept(&"c", b1));
    }

    #[test]
    fn test_settled_keys_are_forgotten() {
        let mut seq = KeyedSequencer::default();
        let a1 = seq.issue("a");
        let a2 = seq.issue("a");
        let b1 = seq.issue("b");
        assert_eq!(seq.len(), 2);

        assert!(seq.accept(&"b", b1));
        assert_eq!(seq.len(), 1);

        assert!(seq.accept(&"a", a1));
        assert_eq!(seq.len(), 1);
        assert!(seq.accept(&"a", a2));
        assert_eq!(seq.len(), 0);
    }
}
