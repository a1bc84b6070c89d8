use std::collections::VecDeque;

use crate::model::Diagram;

/// Undo/redo stacks of whole-diagram snapshots.
///
/// Snapshots are opaque: restoring one never runs validation or geometry.
#[derive(Debug, Clone)]
pub struct History {
    /// Diagrams as they were before each recorded command, newest last
    undo_stack: VecDeque<Diagram>,
    /// Diagrams undone since the last recorded command, newest last
    redo_stack: Vec<Diagram>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(100)
    }
}

impl History {
    /// Creates an empty history keeping at most `limit` undo snapshots
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            limit,
        }
    }

    /// Record the state before a command; clears the redo stack
    pub fn record(&mut self, before: Diagram) {
        if self.limit == 0 {
            return;
        }
        self.undo_stack.push_back(before);
        while self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
    }

    /// Step back: returns the previous state and remembers `current` for redo
    pub fn undo(&mut self, current: &Diagram) -> Option<Diagram> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current.clone());
        Some(previous)
    }

    /// Step forward again after an undo
    pub fn redo(&mut self, current: &Diagram) -> Option<Diagram> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push_back(current.clone());
        Some(next)
    }

    /// Returns true if there are snapshots that can be restored by undo
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are snapshots that can be restored by redo
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Clear the history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn undo_then_redo_walks_snapshots() {
        let mut history = History::new(10);
        let empty = Diagram::new();
        let mut one = empty.clone();
        one.add_entity(pos2(0.0, 0.0));

        history.record(empty.clone());
        assert!(history.can_undo());
        assert!(!history.can_redo());

        let restored = history.undo(&one).unwrap();
        assert_eq!(restored, empty);
        assert!(history.can_redo());

        let redone = history.redo(&restored).unwrap();
        assert_eq!(redone, one);
        assert!(history.undo(&redone).is_some());
        assert!(history.undo(&empty).is_none());
    }

    #[test]
    fn oldest_snapshots_are_dropped_past_the_limit() {
        let mut history = History::new(2);
        for _ in 0..5 {
            history.record(Diagram::new());
        }
        assert_eq!(history.undo_len(), 2);
    }

    #[test]
    fn recording_clears_redo() {
        let mut history = History::new(5);
        history.record(Diagram::new());
        history.undo(&Diagram::new());
        assert!(history.can_redo());
        history.record(Diagram::new());
        assert!(!history.can_redo());
    }
}
