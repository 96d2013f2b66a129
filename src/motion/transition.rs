use super::{MotionContext, resync_column};
use crate::buffer;
use crate::mode::Mode;

/// `i`
pub fn enter_insert_mode(ctx: &mut dyn MotionContext) {
    ctx.set_mode(Mode::Insert);
}

/// `a`: insert after the cursor. Stays put on an empty line and clamps at
/// the end of the buffer.
pub fn enter_insert_mode_append(ctx: &mut dyn MotionContext) {
    let cursor = ctx.cursor();
    let len = buffer::char_len(ctx.text());
    if buffer::line_len(ctx.text(), cursor) > 0 {
        ctx.set_cursor((cursor + 1).min(len));
    }
    ctx.set_mode(Mode::Insert);
}

/// `I`
pub fn enter_insert_mode_line_start(ctx: &mut dyn MotionContext) {
    let target = buffer::find_line_start_non_blank(ctx.text(), ctx.cursor());
    ctx.set_cursor(target);
    ctx.set_mode(Mode::Insert);
}

/// `A`: insert one past the line's last character.
pub fn enter_insert_mode_line_end(ctx: &mut dyn MotionContext) {
    let (_, end) = buffer::line_bounds(ctx.text(), ctx.cursor());
    ctx.set_cursor(end);
    ctx.set_mode(Mode::Insert);
}

/// `Escape`: back to Normal. The cursor steps back one, but not across the
/// line start, so it never rests past the last character.
pub fn exit_insert_mode(ctx: &mut dyn MotionContext) {
    ctx.set_mode(Mode::Normal);
    let start = buffer::find_line_start(ctx.text(), ctx.cursor());
    if ctx.cursor() > start {
        ctx.set_cursor(ctx.cursor() - 1);
    }
    resync_column(ctx);
}

#[cfg(test)]
mod tests {
    use super::super::test_state;
    use super::*;

    #[test]
    fn insert_keeps_cursor() {
        let mut st = test_state("hello", 2);
        enter_insert_mode(&mut st);
        assert_eq!(st.mode, Mode::Insert);
        assert_eq!(st.cursor, 2);
    }

    #[test]
    fn append_moves_right() {
        let mut st = test_state("hello", 1);
        enter_insert_mode_append(&mut st);
        assert_eq!(st.mode, Mode::Insert);
        assert_eq!(st.cursor, 2);
    }

    #[test]
    fn append_on_last_char_goes_past_it() {
        let mut st = test_state("abc\ndef", 2);
        enter_insert_mode_append(&mut st);
        assert_eq!(st.cursor, 3);
    }

    #[test]
    fn append_on_empty_line_stays() {
        let mut st = test_state("abc\n\ndef", 4);
        enter_insert_mode_append(&mut st);
        assert_eq!(st.cursor, 4);
        assert_eq!(st.mode, Mode::Insert);
    }

    #[test]
    fn append_clamps_at_buffer_end() {
        let mut st = test_state("abc", 3);
        enter_insert_mode_append(&mut st);
        assert_eq!(st.cursor, 3);
    }

    #[test]
    fn insert_at_first_non_blank() {
        let mut st = test_state("x\n   foo", 7);
        enter_insert_mode_line_start(&mut st);
        assert_eq!(st.cursor, 5);
    }

    #[test]
    fn append_at_line_end() {
        let mut st = test_state("abc\ndef", 0);
        enter_insert_mode_line_end(&mut st);
        assert_eq!(st.cursor, 3);
        assert_eq!(st.mode, Mode::Insert);
    }

    #[test]
    fn append_at_end_of_empty_line() {
        let mut st = test_state("abc\n\ndef", 4);
        enter_insert_mode_line_end(&mut st);
        assert_eq!(st.cursor, 4);
    }

    #[test]
    fn escape_steps_back() {
        let mut st = test_state("hello", 3);
        st.mode = Mode::Insert;
        exit_insert_mode(&mut st);
        assert_eq!(st.mode, Mode::Normal);
        assert_eq!(st.cursor, 2);
        assert_eq!(st.virtual_column, 2);
    }

    #[test]
    fn escape_at_line_start_stays() {
        let mut st = test_state("abc\ndef", 4);
        st.mode = Mode::Insert;
        exit_insert_mode(&mut st);
        assert_eq!(st.cursor, 4);
    }
}
