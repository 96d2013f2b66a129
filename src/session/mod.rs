//! A drill session: the caller that owns the state, forwards keys and decides
//! when history is recorded.
//!
//! Motions never touch history except to read it for undo/redo. After every
//! dispatch the session checks whether it is back in Normal mode with text
//! that differs from the current snapshot, and pushes exactly then. That gives
//! one undo step per Insert-mode visit (recorded on `Escape`) and one per
//! Normal-mode edit such as `x`.

use crossterm::event::KeyEvent;
use tracing::debug;

use crate::buffer;
use crate::history::{HistoryStack, Snapshot};
use crate::input::{self, KeyName};
use crate::mode::Mode;
use crate::motion::{EditorState, MotionContext, insert_text};
use crate::registry::{Dispatch, Registry};

pub struct Session {
    state: EditorState,
    registry: Registry,
}

impl Session {
    pub fn new(text: impl Into<String>, registry: Registry) -> Self {
        let text = text.into();
        let history = HistoryStack::with_initial(Snapshot::new(text.clone(), 0));
        Self {
            state: EditorState::new(text).with_history(history),
            registry,
        }
    }

    /// Forward a terminal key event.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Dispatch {
        let outcome = input::handle_key(event, &self.registry, &mut self.state, insert_literal);
        self.record_history();
        outcome
    }

    /// Dispatch a key identifier such as `"w"`, `"Escape"` or `"ctrl+r"`.
    /// Unbound or blocked single characters are typed in Insert mode.
    pub fn press(&mut self, key: &str) -> Dispatch {
        let name = KeyName::from_identifier(key);
        let outcome = input::dispatch(&name, &self.registry, &mut self.state, insert_literal);
        self.record_history();
        outcome
    }

    /// Press each character of `keys` in turn.
    pub fn type_keys(&mut self, keys: &str) {
        for c in keys.chars() {
            self.press(&c.to_string());
        }
    }

    fn record_history(&mut self) {
        if self.state.mode != Mode::Normal {
            return;
        }
        let Some(history) = self.state.history.as_mut() else {
            return;
        };
        if history.current().is_some_and(|s| s.text == self.state.text) {
            return;
        }
        history.push(Snapshot::new(self.state.text.clone(), self.state.cursor));
        debug!(
            undo_depth = history.undo_depth(),
            cursor = self.state.cursor,
            "history snapshot pushed"
        );
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    /// Zero-based (row, column) of the cursor.
    pub fn cursor_position(&self) -> (usize, usize) {
        buffer::row_col(&self.state.text, self.state.cursor)
    }

    pub fn available_keys(&self) -> Vec<&str> {
        self.registry.available_keys(&self.state)
    }

    pub fn history(&self) -> Option<&HistoryStack> {
        self.state.history.as_ref()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

/// Any-key sink: literal characters are only typed in Insert mode.
fn insert_literal(ctx: &mut dyn MotionContext, c: char) -> bool {
    if ctx.mode() != Mode::Insert || c.is_control() {
        return false;
    }
    insert_text(ctx, c.encode_utf8(&mut [0; 4]));
    true
}
