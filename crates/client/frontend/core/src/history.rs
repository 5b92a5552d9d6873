//! Bounded log of selection events for display and debugging.
use std::collections::VecDeque;

use game_core::Move;

use crate::selection::SelectionListener;

/// Snapshot of a single selection event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionEntry {
    pub mv: Move,
    pub committed: bool,
    /// Monotonic position of the event since the history was created.
    pub sequence: u64,
}

/// Circular buffer of selection events; oldest entries are evicted first.
#[derive(Clone, Debug)]
pub struct SelectionHistory {
    entries: VecDeque<SelectionEntry>,
    capacity: usize,
    next_sequence: u64,
}

impl SelectionHistory {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, mv: Move, committed: bool) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(SelectionEntry {
            mv,
            committed,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
    }

    /// Most recent entries first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &SelectionEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectionEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&SelectionEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl SelectionListener for SelectionHistory {
    fn on_select(&mut self, mv: &Move, committed: bool) {
        self.push(mv.clone(), committed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::MoveSelectionState;

    #[test]
    fn evicts_oldest_when_full() {
        let mut history = SelectionHistory::new(2);
        history.push(Move::from("draw"), false);
        history.push(Move::from("advance"), false);
        history.push(Move::from("retreat"), false);

        let ids: Vec<_> = history.iter().map(|e| e.mv.as_str()).collect();
        assert_eq!(ids, ["advance", "retreat"]);
        assert_eq!(history.last().map(|e| e.sequence), Some(2));
    }

    #[test]
    fn zero_capacity_is_clamped() {
        assert_eq!(SelectionHistory::new(0).capacity(), 1);
    }

    #[test]
    fn records_selection_events() {
        let mut state = MoveSelectionState::with_candidates(["draw", "advance"]);
        let mut history = SelectionHistory::new(8);

        let _ = state.select(&Move::from("advance"), &mut history);
        let _ = state.select(&Move::from("jump"), &mut history);
        let _ = state.select(&Move::from("draw"), &mut history);

        let recent: Vec<_> = history.recent(5).map(|e| e.mv.as_str()).collect();
        assert_eq!(recent, ["draw", "advance"]);
        assert!(history.iter().all(|e| !e.committed));
    }
}
