//! Line queries over a flat text buffer.
//!
//! The buffer is a plain `String` with `\n` separators. Nothing here keeps a
//! line table; every query walks the characters around the given offset.
//! All offsets are character offsets, not byte offsets, and every function is
//! total: positions past the end are clamped to the text length.

mod word;

pub use word::{
    CharClass, char_class, is_word_boundary, is_word_end, move_to_next_word_boundary,
    move_to_prev_word_boundary, move_to_word_end,
};

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Start offset and exclusive end offset of the line containing `position`.
///
/// The exclusive end is the offset of the terminating `\n`, or the text
/// length on the last line. An empty line has `start == end`.
pub fn line_bounds(text: &str, position: usize) -> (usize, usize) {
    let chars: Vec<char> = text.chars().collect();
    let pos = position.min(chars.len());

    let mut start = pos;
    while start > 0 && chars[start - 1] != '\n' {
        start -= 1;
    }
    let mut end = pos;
    while end < chars.len() && chars[end] != '\n' {
        end += 1;
    }
    (start, end)
}

/// Offset of the first character of the line containing `position`.
pub fn find_line_start(text: &str, position: usize) -> usize {
    line_bounds(text, position).0
}

/// Offset of the last character of the line containing `position`.
///
/// On an empty line there is no last character, so the line start is
/// returned.
pub fn find_line_end(text: &str, position: usize) -> usize {
    let (start, end) = line_bounds(text, position);
    if end > start { end - 1 } else { start }
}

/// Length in characters of the line containing `position`, without the newline.
pub fn line_len(text: &str, position: usize) -> usize {
    let (start, end) = line_bounds(text, position);
    end - start
}

/// First non-whitespace offset on the line, or the line start if the line is
/// blank.
pub fn find_line_start_non_blank(text: &str, position: usize) -> usize {
    let (start, end) = line_bounds(text, position);
    text.chars()
        .skip(start)
        .take(end - start)
        .position(|c| !c.is_whitespace())
        .map_or(start, |offset| start + offset)
}

/// Offset of the newline that ends the previous line, i.e. one past the
/// previous line's last character. `None` on the first line.
pub fn find_prev_line_end(text: &str, position: usize) -> Option<usize> {
    find_line_start(text, position).checked_sub(1)
}

/// Offset of the first character of the next line. `None` on the last line.
pub fn find_next_line_start(text: &str, position: usize) -> Option<usize> {
    let (_, end) = line_bounds(text, position);
    (end < char_len(text)).then_some(end + 1)
}

/// Column of `position` within its line.
pub fn column_of(text: &str, position: usize) -> usize {
    let pos = position.min(char_len(text));
    pos - find_line_start(text, pos)
}

/// Zero-based (row, column) of `position`, for renderers.
pub fn row_col(text: &str, position: usize) -> (usize, usize) {
    let pos = position.min(char_len(text));
    let row = text.chars().take(pos).filter(|&c| c == '\n').count();
    (row, column_of(text, pos))
}

/// Byte index of character offset `position`, clamped to the end of `text`.
pub(crate) fn byte_index(text: &str, position: usize) -> usize {
    text.char_indices()
        .nth(position)
        .map_or(text.len(), |(idx, _)| idx)
}

/// Copy of `text` with `insert` spliced in at character offset `position`.
pub fn splice_insert(text: &str, position: usize, insert: &str) -> String {
    let at = byte_index(text, position);
    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(&text[..at]);
    out.push_str(insert);
    out.push_str(&text[at..]);
    out
}

/// Copy of `text` with the characters in `start..end` removed.
pub fn splice_remove(text: &str, start: usize, end: usize) -> String {
    let from = byte_index(text, start);
    let to = byte_index(text, end.max(start));
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..from]);
    out.push_str(&text[to..]);
    out
}
