//! Word classification and word-wise scans.
//!
//! Every word motion goes through the two transition tables below. Callers
//! must not classify characters on their own.

/// Symbols that form their own tokens. Underscore is deliberately absent: it
/// is a word character.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^`{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Space,
    Punct,
    Word,
}

impl CharClass {
    const fn index(self) -> usize {
        match self {
            CharClass::Space => 0,
            CharClass::Punct => 1,
            CharClass::Word => 2,
        }
    }
}

pub fn char_class(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Space
    } else if PUNCTUATION.contains(c) {
        CharClass::Punct
    } else {
        CharClass::Word
    }
}

/// `BOUNDARY[prev][cur]`: does a word start at `cur` given the character
/// before it? Rows and columns are ordered Space, Punct, Word.
///
/// A punctuation run glued to the end of a word does not start a new token;
/// the word after it does.
const BOUNDARY: [[bool; 3]; 3] = [
    // cur:  Space  Punct  Word
    [false, true, true],   // prev Space
    [false, false, true],  // prev Punct
    [false, false, false], // prev Word
];

/// `END[cur][next]`: does a word end at `cur` given the character after it?
/// Mirror image of `BOUNDARY`.
const END: [[bool; 3]; 3] = [
    // next: Space  Punct  Word
    [false, false, false], // cur Space
    [true, false, false],  // cur Punct
    [true, true, false],   // cur Word
];

/// True when a word starts at offset `i`. Offset 0 starts a word unless it is
/// whitespace; offsets outside the text never do.
pub fn is_word_boundary(text: &str, i: usize) -> bool {
    let chars: Vec<char> = text.chars().collect();
    boundary_at(&chars, i)
}

/// True when a word ends at offset `i`. The last character of the text ends a
/// word unless it is whitespace.
pub fn is_word_end(text: &str, i: usize) -> bool {
    let chars: Vec<char> = text.chars().collect();
    end_at(&chars, i)
}

fn boundary_at(chars: &[char], i: usize) -> bool {
    let Some(&cur) = chars.get(i) else {
        return false;
    };
    let cur = char_class(cur);
    if i == 0 {
        return cur != CharClass::Space;
    }
    let prev = char_class(chars[i - 1]);
    BOUNDARY[prev.index()][cur.index()]
}

fn end_at(chars: &[char], i: usize) -> bool {
    let Some(&cur) = chars.get(i) else {
        return false;
    };
    let cur = char_class(cur);
    let next = chars.get(i + 1).map_or(CharClass::Space, |&c| char_class(c));
    END[cur.index()][next.index()]
}

/// Start of the next word after `position` (vim `w`), or `position` if there
/// is none.
pub fn move_to_next_word_boundary(text: &str, position: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    (position + 1..chars.len())
        .find(|&i| boundary_at(&chars, i))
        .unwrap_or(position)
}

/// Start of the word before `position` (vim `b`), or `position` if there is
/// none.
pub fn move_to_prev_word_boundary(text: &str, position: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    (0..position.min(chars.len()))
        .rev()
        .find(|&i| boundary_at(&chars, i))
        .unwrap_or(position)
}

/// End of the current or next word after `position` (vim `e`), or `position`
/// if there is none.
pub fn move_to_word_end(text: &str, position: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    (position + 1..chars.len())
        .find(|&i| end_at(&chars, i))
        .unwrap_or(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underscore_is_a_word_char() {
        assert_eq!(char_class('_'), CharClass::Word);
        assert_eq!(char_class('.'), CharClass::Punct);
        assert_eq!(char_class('\n'), CharClass::Space);
        assert_eq!(char_class('é'), CharClass::Word);
    }

    #[test]
    fn boundary_after_whitespace() {
        let text = "foo  bar";
        assert!(is_word_boundary(text, 0));
        assert!(!is_word_boundary(text, 1));
        assert!(!is_word_boundary(text, 3));
        assert!(is_word_boundary(text, 5));
    }

    #[test]
    fn boundary_after_punctuation_run() {
        let text = "bar.baz";
        assert!(!is_word_boundary(text, 3));
        assert!(is_word_boundary(text, 4));
    }

    #[test]
    fn leading_space_is_not_a_boundary() {
        assert!(!is_word_boundary("  x", 0));
        assert!(is_word_boundary("  x", 2));
    }

    #[test]
    fn word_end_before_space_and_punctuation() {
        let text = "bar.baz qux";
        assert!(is_word_end(text, 2));
        assert!(!is_word_end(text, 3));
        assert!(is_word_end(text, 6));
        assert!(is_word_end(text, 10));
    }

    #[test]
    fn next_word_skips_whitespace_and_punctuation() {
        let text = "foo  bar.baz";
        assert_eq!(move_to_next_word_boundary(text, 0), 5);
        assert_eq!(move_to_next_word_boundary(text, 5), 9);
        assert_eq!(move_to_next_word_boundary(text, 9), 9);
    }

    #[test]
    fn next_word_crosses_lines() {
        assert_eq!(move_to_next_word_boundary("ab\n  cd", 0), 5);
    }

    #[test]
    fn prev_word() {
        let text = "foo  bar.baz";
        assert_eq!(move_to_prev_word_boundary(text, 9), 5);
        assert_eq!(move_to_prev_word_boundary(text, 5), 0);
        assert_eq!(move_to_prev_word_boundary(text, 0), 0);
    }

    #[test]
    fn prev_word_with_leading_whitespace_stays_put() {
        assert_eq!(move_to_prev_word_boundary("   x", 3), 3);
    }

    #[test]
    fn word_end() {
        let text = "foo  bar.baz";
        assert_eq!(move_to_word_end(text, 0), 2);
        assert_eq!(move_to_word_end(text, 5), 7);
        assert_eq!(move_to_word_end(text, 7), 11);
        assert_eq!(move_to_word_end(text, 11), 11);
    }

    #[test]
    fn scans_never_panic_out_of_range() {
        assert_eq!(move_to_next_word_boundary("", 0), 0);
        assert_eq!(move_to_prev_word_boundary("ab", 50), 0);
        assert_eq!(move_to_word_end("ab", 50), 50);
        assert!(!is_word_boundary("ab", 50));
        assert!(!is_word_end("", 0));
    }
}
