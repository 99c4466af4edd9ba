//! Identifier allocation.
//!
//! Identifiers come from an explicit sequence object owned by the store,
//! not from process-global state, so tests can seed it deterministically.

use crate::model::TaskId;

/// Issues strictly increasing identifiers, starting at 1.
///
/// Never reuses a value for the lifetime of the sequence; gaps are allowed
/// (a seeded sequence may start anywhere above zero).
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: TaskId,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Seed the sequence so its first issued id is `first`.
    pub fn starting_at(first: TaskId) -> Self {
        Self {
            next: first.max(1),
        }
    }

    pub fn next_id(&mut self) -> TaskId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strictly_increasing() {
        let mut seq = IdSequence::new();
        let first = seq.next_id();
        let second = seq.next_id();
        let third = seq.next_id();
        assert_eq!(first, 1);
        assert!(second > first);
        assert!(third > second);
    }

    #[test]
    fn seeded_sequence_starts_where_asked() {
        let mut seq = IdSequence::starting_at(100);
        assert_eq!(seq.next_id(), 100);
        assert_eq!(seq.next_id(), 101);
    }

    #[test]
    fn zero_seed_is_clamped_to_one() {
        let mut seq = IdSequence::starting_at(0);
        assert_eq!(seq.next_id(), 1);
    }
}
