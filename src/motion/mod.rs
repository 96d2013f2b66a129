mod editing;
mod movement;
mod transition;

pub use editing::{TAB_TEXT, insert_text};

use crate::buffer;
use crate::history::HistoryStack;
use crate::mode::Mode;

/// The only channel through which a motion observes or changes session state.
///
/// Motions read and write text, cursor, virtual column and mode here and
/// nowhere else. The engine keeps no reference to a context between calls.
pub trait MotionContext {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: String);
    fn cursor(&self) -> usize;
    fn set_cursor(&mut self, index: usize);
    fn virtual_column(&self) -> usize;
    fn set_virtual_column(&mut self, column: usize);
    fn mode(&self) -> Mode;
    fn set_mode(&mut self, mode: Mode);

    /// History used by undo/redo motions. Contexts without one make those
    /// motions no-ops.
    fn history_mut(&mut self) -> Option<&mut HistoryStack> {
        None
    }
}

/// Default context: the whole session state in one value.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub text: String,
    pub cursor: usize,
    pub virtual_column: usize,
    pub mode: Mode,
    pub history: Option<HistoryStack>,
}

impl EditorState {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_history(mut self, history: HistoryStack) -> Self {
        self.history = Some(history);
        self
    }
}

impl MotionContext for EditorState {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
        self.cursor = self.cursor.min(buffer::char_len(&self.text));
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    /// Clamped to `[0, len]`.
    fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(buffer::char_len(&self.text));
    }

    fn virtual_column(&self) -> usize {
        self.virtual_column
    }

    fn set_virtual_column(&mut self, column: usize) {
        self.virtual_column = column;
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    fn history_mut(&mut self) -> Option<&mut HistoryStack> {
        self.history.as_mut()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Movement,
    Editing,
    Mode,
}

/// Every built-in motion. Keys, guards and handlers are resolved by `match`,
/// so the built-in set is closed; runtime extension happens in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionId {
    Left,
    Down,
    Up,
    Right,
    WordForward,
    WordBackward,
    WordEnd,
    LineStart,
    FirstNonBlank,
    LineEnd,
    DeleteChar,
    OpenBelow,
    OpenAbove,
    Backspace,
    Newline,
    Tab,
    Undo,
    Redo,
    Insert,
    Append,
    InsertLineStart,
    AppendLineEnd,
    ExitInsert,
}

impl MotionId {
    pub const ALL: [MotionId; 23] = [
        MotionId::Left,
        MotionId::Down,
        MotionId::Up,
        MotionId::Right,
        MotionId::WordForward,
        MotionId::WordBackward,
        MotionId::WordEnd,
        MotionId::LineStart,
        MotionId::FirstNonBlank,
        MotionId::LineEnd,
        MotionId::DeleteChar,
        MotionId::OpenBelow,
        MotionId::OpenAbove,
        MotionId::Backspace,
        MotionId::Newline,
        MotionId::Tab,
        MotionId::Undo,
        MotionId::Redo,
        MotionId::Insert,
        MotionId::Append,
        MotionId::InsertLineStart,
        MotionId::AppendLineEnd,
        MotionId::ExitInsert,
    ];

    /// Trigger keys. Only `FirstNonBlank` has an alias (`^` and `_`).
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            MotionId::Left => &["h"],
            MotionId::Down => &["j"],
            MotionId::Up => &["k"],
            MotionId::Right => &["l"],
            MotionId::WordForward => &["w"],
            MotionId::WordBackward => &["b"],
            MotionId::WordEnd => &["e"],
            MotionId::LineStart => &["0"],
            MotionId::FirstNonBlank => &["^", "_"],
            MotionId::LineEnd => &["$"],
            MotionId::DeleteChar => &["x"],
            MotionId::OpenBelow => &["o"],
            MotionId::OpenAbove => &["O"],
            MotionId::Backspace => &["Backspace"],
            MotionId::Newline => &["Enter"],
            MotionId::Tab => &["Tab"],
            MotionId::Undo => &["u"],
            MotionId::Redo => &["ctrl+r"],
            MotionId::Insert => &["i"],
            MotionId::Append => &["a"],
            MotionId::InsertLineStart => &["I"],
            MotionId::AppendLineEnd => &["A"],
            MotionId::ExitInsert => &["Escape"],
        }
    }

    pub fn from_key(key: &str) -> Option<MotionId> {
        Self::ALL.into_iter().find(|id| id.keys().contains(&key))
    }

    pub fn category(self) -> Category {
        match self {
            MotionId::Left
            | MotionId::Down
            | MotionId::Up
            | MotionId::Right
            | MotionId::WordForward
            | MotionId::WordBackward
            | MotionId::WordEnd
            | MotionId::LineStart
            | MotionId::FirstNonBlank
            | MotionId::LineEnd => Category::Movement,
            MotionId::DeleteChar
            | MotionId::OpenBelow
            | MotionId::OpenAbove
            | MotionId::Backspace
            | MotionId::Newline
            | MotionId::Tab
            | MotionId::Undo
            | MotionId::Redo => Category::Editing,
            MotionId::Insert
            | MotionId::Append
            | MotionId::InsertLineStart
            | MotionId::AppendLineEnd
            | MotionId::ExitInsert => Category::Mode,
        }
    }

    /// The mode this motion is allowed to run in.
    pub fn required_mode(self) -> Mode {
        match self {
            MotionId::Backspace | MotionId::Newline | MotionId::Tab | MotionId::ExitInsert => {
                Mode::Insert
            }
            _ => Mode::Normal,
        }
    }

    pub fn condition(self, ctx: &dyn MotionContext) -> bool {
        ctx.mode() == self.required_mode()
    }

    pub fn execute(self, ctx: &mut dyn MotionContext) {
        match self {
            MotionId::Left => movement::move_left(ctx),
            MotionId::Down => movement::move_down(ctx),
            MotionId::Up => movement::move_up(ctx),
            MotionId::Right => movement::move_right(ctx),
            MotionId::WordForward => movement::move_word_forward(ctx),
            MotionId::WordBackward => movement::move_word_backward(ctx),
            MotionId::WordEnd => movement::move_word_end(ctx),
            MotionId::LineStart => movement::goto_line_start(ctx),
            MotionId::FirstNonBlank => movement::goto_first_non_blank(ctx),
            MotionId::LineEnd => movement::goto_line_end(ctx),
            MotionId::DeleteChar => editing::delete_char_at_cursor(ctx),
            MotionId::OpenBelow => editing::open_line_below(ctx),
            MotionId::OpenAbove => editing::open_line_above(ctx),
            MotionId::Backspace => editing::delete_char_back(ctx),
            MotionId::Newline => editing::insert_newline(ctx),
            MotionId::Tab => editing::insert_tab(ctx),
            MotionId::Undo => editing::undo(ctx),
            MotionId::Redo => editing::redo(ctx),
            MotionId::Insert => transition::enter_insert_mode(ctx),
            MotionId::Append => transition::enter_insert_mode_append(ctx),
            MotionId::InsertLineStart => transition::enter_insert_mode_line_start(ctx),
            MotionId::AppendLineEnd => transition::enter_insert_mode_line_end(ctx),
            MotionId::ExitInsert => transition::exit_insert_mode(ctx),
        }
    }
}

/// Set the virtual column to the cursor's actual column.
fn resync_column(ctx: &mut dyn MotionContext) {
    let column = buffer::column_of(ctx.text(), ctx.cursor());
    ctx.set_virtual_column(column);
}

#[cfg(test)]
pub(crate) fn test_state(text: &str, cursor: usize) -> EditorState {
    let mut state = EditorState::new(text);
    state.set_cursor(cursor);
    resync_column(&mut state);
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_key_resolves_back_to_its_id() {
        for id in MotionId::ALL {
            for key in id.keys() {
                assert_eq!(MotionId::from_key(key), Some(id));
            }
        }
    }

    #[test]
    fn caret_and_underscore_alias() {
        assert_eq!(MotionId::from_key("^"), MotionId::from_key("_"));
    }

    #[test]
    fn insert_only_motions_are_blocked_in_normal_mode() {
        let state = test_state("abc", 0);
        assert!(!MotionId::ExitInsert.condition(&state));
        assert!(!MotionId::Backspace.condition(&state));
        assert!(MotionId::Left.condition(&state));
    }

    #[test]
    fn set_cursor_clamps_to_text_length() {
        let mut state = EditorState::new("abc");
        state.set_cursor(10);
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn set_text_pulls_cursor_back_in_range() {
        let mut state = test_state("abcdef", 5);
        state.set_text("ab".to_string());
        assert_eq!(state.cursor, 2);
    }
}
