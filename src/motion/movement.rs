use super::{MotionContext, resync_column};
use crate::buffer;

/// `h`: one left, never past the line start.
pub fn move_left(ctx: &mut dyn MotionContext) {
    let start = buffer::find_line_start(ctx.text(), ctx.cursor());
    if ctx.cursor() > start {
        ctx.set_cursor(ctx.cursor() - 1);
    }
    resync_column(ctx);
}

/// `l`: one right, never past the line's last character.
pub fn move_right(ctx: &mut dyn MotionContext) {
    let end = buffer::find_line_end(ctx.text(), ctx.cursor());
    if ctx.cursor() < end {
        ctx.set_cursor(ctx.cursor() + 1);
    }
    resync_column(ctx);
}

/// `j`
pub fn move_down(ctx: &mut dyn MotionContext) {
    let Some(target) = buffer::find_next_line_start(ctx.text(), ctx.cursor()) else {
        return;
    };
    move_vertical(ctx, target);
}

/// `k`
pub fn move_up(ctx: &mut dyn MotionContext) {
    let Some(prev_end) = buffer::find_prev_line_end(ctx.text(), ctx.cursor()) else {
        return;
    };
    let target = buffer::find_line_start(ctx.text(), prev_end);
    move_vertical(ctx, target);
}

/// Land on the line starting at `target_start`, at the sticky column clamped
/// to that line. The virtual column only ever grows here.
fn move_vertical(ctx: &mut dyn MotionContext, target_start: usize) {
    let column = buffer::column_of(ctx.text(), ctx.cursor());
    if column > ctx.virtual_column() {
        ctx.set_virtual_column(column);
    }

    let target_len = buffer::line_len(ctx.text(), target_start);
    let cursor = if target_len == 0 {
        target_start
    } else {
        target_start + ctx.virtual_column().min(target_len - 1)
    };
    ctx.set_cursor(cursor);
}

/// `w`
pub fn move_word_forward(ctx: &mut dyn MotionContext) {
    let target = buffer::move_to_next_word_boundary(ctx.text(), ctx.cursor());
    ctx.set_cursor(target);
    resync_column(ctx);
}

/// `b`
pub fn move_word_backward(ctx: &mut dyn MotionContext) {
    let target = buffer::move_to_prev_word_boundary(ctx.text(), ctx.cursor());
    ctx.set_cursor(target);
    resync_column(ctx);
}

/// `e`
pub fn move_word_end(ctx: &mut dyn MotionContext) {
    let target = buffer::move_to_word_end(ctx.text(), ctx.cursor());
    ctx.set_cursor(target);
    resync_column(ctx);
}

/// `0`
pub fn goto_line_start(ctx: &mut dyn MotionContext) {
    let start = buffer::find_line_start(ctx.text(), ctx.cursor());
    ctx.set_cursor(start);
    ctx.set_virtual_column(0);
}

/// `^` and `_`. Like `0`, this resets the virtual column to 0; the next
/// vertical motion picks up the indented column again.
pub fn goto_first_non_blank(ctx: &mut dyn MotionContext) {
    let target = buffer::find_line_start_non_blank(ctx.text(), ctx.cursor());
    ctx.set_cursor(target);
    ctx.set_virtual_column(0);
}

/// `$`. No-op on an empty line.
pub fn goto_line_end(ctx: &mut dyn MotionContext) {
    if buffer::line_len(ctx.text(), ctx.cursor()) == 0 {
        return;
    }
    let end = buffer::find_line_end(ctx.text(), ctx.cursor());
    ctx.set_cursor(end);
    resync_column(ctx);
}

#[cfg(test)]
mod tests {
    use super::super::{MotionId, test_state};
    use super::*;
    use crate::mode::Mode;

    #[test]
    fn move_left_stops_at_line_start() {
        let mut st = test_state("ab\ncd", 3);
        move_left(&mut st);
        assert_eq!(st.cursor, 3);
    }

    #[test]
    fn move_right_stops_at_line_end() {
        let mut st = test_state("ab\ncd", 0);
        for _ in 0..5 {
            move_right(&mut st);
        }
        assert_eq!(st.cursor, 1);
        assert_eq!(st.virtual_column, 1);
    }

    #[test]
    fn move_right_on_empty_line_stays() {
        let mut st = test_state("a\n\nb", 2);
        move_right(&mut st);
        assert_eq!(st.cursor, 2);
    }

    #[test]
    fn move_down_keeps_column() {
        let mut st = test_state("hello\nworld", 3);
        move_down(&mut st);
        assert_eq!(st.cursor, 9);
    }

    #[test]
    fn move_down_clamps_on_shorter_line_then_restores() {
        let mut st = test_state("long line\nhi\nanother line", 8);
        move_down(&mut st);
        assert_eq!(st.cursor, 11); // 'i' of "hi"
        move_down(&mut st);
        assert_eq!(st.cursor, 13 + 8);
    }

    #[test]
    fn move_down_onto_empty_line_lands_at_start() {
        let mut st = test_state("abc\n\nxyz", 2);
        move_down(&mut st);
        assert_eq!(st.cursor, 4);
        move_down(&mut st);
        assert_eq!(st.cursor, 7);
    }

    #[test]
    fn move_down_on_last_line_is_noop() {
        let mut st = test_state("abc\nxyz", 5);
        move_down(&mut st);
        assert_eq!(st.cursor, 5);
    }

    #[test]
    fn move_up_on_first_line_is_noop() {
        let mut st = test_state("abc\nxyz", 1);
        move_up(&mut st);
        assert_eq!(st.cursor, 1);
    }

    #[test]
    fn move_up_never_skips_a_line() {
        let mut st = test_state("abc\n\nxyz", 6);
        move_up(&mut st);
        assert_eq!(st.cursor, 4);
    }

    #[test]
    fn horizontal_motion_lowers_virtual_column() {
        let mut st = test_state("abcdef\nabcdef", 5);
        move_left(&mut st);
        move_left(&mut st);
        assert_eq!(st.virtual_column, 3);
        move_down(&mut st);
        assert_eq!(st.cursor, 10);
    }

    #[test]
    fn word_motions_update_cursor() {
        let mut st = test_state("foo  bar.baz", 0);
        move_word_forward(&mut st);
        assert_eq!(st.cursor, 5);
        move_word_end(&mut st);
        assert_eq!(st.cursor, 7);
        move_word_backward(&mut st);
        assert_eq!(st.cursor, 5);
        assert_eq!(st.virtual_column, 5);
    }

    #[test]
    fn line_start_resets_virtual_column() {
        let mut st = test_state("hello", 4);
        goto_line_start(&mut st);
        assert_eq!(st.cursor, 0);
        assert_eq!(st.virtual_column, 0);
    }

    #[test]
    fn first_non_blank() {
        let mut st = test_state("   hello", 7);
        goto_first_non_blank(&mut st);
        assert_eq!(st.cursor, 3);
        assert_eq!(st.virtual_column, 0);
    }

    #[test]
    fn line_end_sets_virtual_column() {
        let mut st = test_state("hello\nx", 0);
        goto_line_end(&mut st);
        assert_eq!(st.cursor, 4);
        assert_eq!(st.virtual_column, 4);
    }

    #[test]
    fn down_locks_in_column_after_first_non_blank() {
        let mut st = test_state("   foo\nabcdefg", 0);
        goto_first_non_blank(&mut st);
        assert_eq!(st.cursor, 3);
        assert_eq!(st.virtual_column, 0);
        move_down(&mut st);
        assert_eq!(st.cursor, 10);
        assert_eq!(st.virtual_column, 3);
    }

    #[test]
    fn up_locks_in_column_after_insert_at_line_start() {
        let mut st = test_state("abcdef\n  xyz", 7);
        MotionId::InsertLineStart.execute(&mut st);
        st.mode = Mode::Normal;
        assert_eq!(st.cursor, 9);
        assert_eq!(st.virtual_column, 0);
        move_up(&mut st);
        assert_eq!(st.cursor, 2);
        assert_eq!(st.virtual_column, 2);
    }

    #[test]
    fn up_locks_in_column_after_delete() {
        let mut st = test_state("abcdef\n  ab", 7);
        goto_first_non_blank(&mut st);
        MotionId::DeleteChar.execute(&mut st);
        assert_eq!(st.text, "abcdef\n  b");
        assert_eq!(st.cursor, 9);
        assert_eq!(st.virtual_column, 0);
        move_up(&mut st);
        assert_eq!(st.cursor, 2);
        assert_eq!(st.virtual_column, 2);
    }

    #[test]
    fn line_end_on_empty_line_is_noop() {
        let mut st = test_state("abc\n\nx", 4);
        st.virtual_column = 2;
        goto_line_end(&mut st);
        assert_eq!(st.cursor, 4);
        assert_eq!(st.virtual_column, 2);
    }
}
