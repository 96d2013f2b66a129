//! Linear undo/redo over whole-buffer snapshots.
//!
//! The engine never pushes on its own. Callers push once per completed edit
//! (leaving Insert mode, or right after a Normal-mode delete). Pushing on
//! every keystroke inside Insert mode turns one logical change into many
//! undo steps.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub text: String,
    pub cursor_index: usize,
}

impl Snapshot {
    pub fn new(text: impl Into<String>, cursor_index: usize) -> Self {
        Self {
            text: text.into(),
            cursor_index,
        }
    }
}

/// Two-stack snapshot store. The top of `past` is the current state.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    past: Vec<Snapshot>,
    future: Vec<Snapshot>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stack seeded with the state undo bottoms out at.
    pub fn with_initial(snapshot: Snapshot) -> Self {
        Self {
            past: vec![snapshot],
            future: Vec::new(),
        }
    }

    /// Record a new state. Any redo history is discarded.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.past.push(snapshot);
        self.future.clear();
    }

    /// Step back one state and return it, or `None` when only the initial
    /// snapshot is left.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.past.len() <= 1 {
            return None;
        }
        let top = self.past.pop()?;
        self.future.push(top);
        self.past.last().cloned()
    }

    /// Re-apply the most recently undone state and return it.
    pub fn redo(&mut self) -> Option<Snapshot> {
        let next = self.future.pop()?;
        self.past.push(next.clone());
        Some(next)
    }

    /// The state the stack currently considers live.
    pub fn current(&self) -> Option<&Snapshot> {
        self.past.last()
    }

    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len().saturating_sub(1)
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> HistoryStack {
        HistoryStack::with_initial(Snapshot::new("s0", 0))
    }

    #[test]
    fn undo_returns_previous_state() {
        let mut h = seeded();
        h.push(Snapshot::new("s1", 2));
        assert_eq!(h.undo(), Some(Snapshot::new("s0", 0)));
    }

    #[test]
    fn redo_is_inverse_of_undo() {
        let mut h = seeded();
        h.push(Snapshot::new("s1", 2));
        h.undo();
        assert_eq!(h.redo(), Some(Snapshot::new("s1", 2)));
        assert_eq!(h.current(), Some(&Snapshot::new("s1", 2)));
    }

    #[test]
    fn undo_at_initial_snapshot_returns_none() {
        let mut h = seeded();
        assert_eq!(h.undo(), None);
        assert_eq!(h.current(), Some(&Snapshot::new("s0", 0)));
    }

    #[test]
    fn undo_on_empty_stack_returns_none() {
        let mut h = HistoryStack::new();
        assert_eq!(h.undo(), None);
        assert_eq!(h.redo(), None);
    }

    #[test]
    fn redo_with_empty_future_returns_none() {
        let mut h = seeded();
        h.push(Snapshot::new("s1", 0));
        assert_eq!(h.redo(), None);
    }

    #[test]
    fn push_after_undo_discards_redo() {
        let mut h = seeded();
        h.push(Snapshot::new("s1", 0));
        h.undo();
        h.push(Snapshot::new("s2", 0));
        assert_eq!(h.redo(), None);
        assert!(!h.can_redo());
    }

    #[test]
    fn depths_track_both_stacks() {
        let mut h = seeded();
        h.push(Snapshot::new("s1", 0));
        h.push(Snapshot::new("s2", 0));
        h.undo();
        assert_eq!(h.undo_depth(), 1);
        assert_eq!(h.redo_depth(), 1);
        assert!(h.can_undo());
    }
}
