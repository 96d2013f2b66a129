use super::{MotionContext, resync_column};
use crate::buffer;
use crate::history::Snapshot;
use crate::mode::Mode;

/// Text inserted by the Tab key.
pub const TAB_TEXT: &str = "  ";

/// `x`: delete the character under the cursor.
///
/// Deleting a line's last character steps the cursor back one so it still
/// sits on a character. An empty line is left alone.
pub fn delete_char_at_cursor(ctx: &mut dyn MotionContext) {
    let cursor = ctx.cursor();
    let (start, end) = buffer::line_bounds(ctx.text(), cursor);
    if end == start || cursor >= end {
        ctx.set_virtual_column(0);
        return;
    }

    let was_last = cursor + 1 == end;
    let text = buffer::splice_remove(ctx.text(), cursor, cursor + 1);
    ctx.set_text(text);
    if was_last && cursor > start {
        ctx.set_cursor(cursor - 1);
        ctx.set_virtual_column(ctx.virtual_column().saturating_sub(1));
    }
}

/// `o`: open an empty line below the current one and start inserting there.
pub fn open_line_below(ctx: &mut dyn MotionContext) {
    let (_, end) = buffer::line_bounds(ctx.text(), ctx.cursor());
    let text = buffer::splice_insert(ctx.text(), end, "\n");
    ctx.set_text(text);
    ctx.set_cursor(end + 1);
    ctx.set_virtual_column(0);
    ctx.set_mode(Mode::Insert);
}

/// `O`: open an empty line above the current one and start inserting there.
pub fn open_line_above(ctx: &mut dyn MotionContext) {
    let start = buffer::find_line_start(ctx.text(), ctx.cursor());
    let text = buffer::splice_insert(ctx.text(), start, "\n");
    ctx.set_text(text);
    ctx.set_cursor(start);
    ctx.set_virtual_column(0);
    ctx.set_mode(Mode::Insert);
}

/// Splice `insert` in at the cursor and advance past it.
pub fn insert_text(ctx: &mut dyn MotionContext, insert: &str) {
    if insert.is_empty() {
        return;
    }
    let cursor = ctx.cursor();
    let text = buffer::splice_insert(ctx.text(), cursor, insert);
    ctx.set_text(text);
    ctx.set_cursor(cursor + buffer::char_len(insert));
}

/// Backspace. Removing a newline joins the two lines.
pub fn delete_char_back(ctx: &mut dyn MotionContext) {
    let cursor = ctx.cursor();
    if cursor == 0 {
        return;
    }
    let text = buffer::splice_remove(ctx.text(), cursor - 1, cursor);
    ctx.set_text(text);
    ctx.set_cursor(cursor - 1);
}

pub fn insert_newline(ctx: &mut dyn MotionContext) {
    insert_text(ctx, "\n");
}

pub fn insert_tab(ctx: &mut dyn MotionContext) {
    insert_text(ctx, TAB_TEXT);
}

/// `u`
pub fn undo(ctx: &mut dyn MotionContext) {
    let restored = ctx.history_mut().and_then(|history| history.undo());
    if let Some(snapshot) = restored {
        restore(ctx, snapshot);
    }
}

/// `ctrl+r`
pub fn redo(ctx: &mut dyn MotionContext) {
    let restored = ctx.history_mut().and_then(|history| history.redo());
    if let Some(snapshot) = restored {
        restore(ctx, snapshot);
    }
}

fn restore(ctx: &mut dyn MotionContext, snapshot: Snapshot) {
    ctx.set_text(snapshot.text);
    ctx.set_cursor(snapshot.cursor_index);
    resync_column(ctx);
}
