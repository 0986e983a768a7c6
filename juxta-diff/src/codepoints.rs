//! Text as a sequence of Unicode scalar values.

use core::ops::Range;

/// An index-addressable view of a text, one entry per `char`.
///
/// Diffing over `char`s instead of bytes keeps multi-byte characters whole.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Codepoints {
    chars: Vec<char>,
}

impl Codepoints {
    /// Splits `text` into codepoints.
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// `text` followed by `suffix`, as one sequence.
    pub fn with_suffix(text: &str, suffix: &str) -> Self {
        Self {
            chars: text.chars().chain(suffix.chars()).collect(),
        }
    }

    /// The codepoints.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Number of codepoints.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if there are no codepoints.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The codepoints in `range`, as a string.
    pub fn slice(&self, range: Range<usize>) -> String {
        self.chars[range].iter().collect()
    }
}

/// Returns `text` without its first `start` codepoints.
pub(crate) fn skip_chars(text: &str, start: usize) -> &str {
    match text.char_indices().nth(start) {
        Some((byte, _)) => &text[byte..],
        None => "",
    }
}

/// Returns the first `end` codepoints of `text`.
pub(crate) fn take_chars(text: &str, end: usize) -> &str {
    match text.char_indices().nth(end) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}
