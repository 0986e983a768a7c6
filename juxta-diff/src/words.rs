//! Word boundaries.

use std::sync::LazyLock;

use regex::Regex;

/// Characters that separate words: whitespace, line breaks and a fixed set of
/// punctuation.
pub const WORD_DELIMITER: &str = r"\p{Zs}+|\r\n|[\r\n]|[\[\](){}/\\*+\-#:;.]";

static DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_DELIMITER).expect("WORD_DELIMITER is a valid regex"));

/// A delimiter match, in codepoint offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    /// Offset of the first delimiter codepoint
    pub start: usize,
    /// Offset just past the last delimiter codepoint
    pub end: usize,
}

/// Every delimiter in `text`, left to right.
pub fn delimiters(text: &str) -> Vec<Delimiter> {
    let mut found = Vec::new();
    let mut chars_before = 0;
    let mut bytes_seen = 0;
    for m in DELIMITER.find_iter(text) {
        chars_before += text[bytes_seen..m.start()].chars().count();
        let width = m.as_str().chars().count();
        found.push(Delimiter {
            start: chars_before,
            end: chars_before + width,
        });
        chars_before += width;
        bytes_seen = m.end();
    }
    found
}

pub(crate) fn first_delimiter(text: &str) -> Option<Delimiter> {
    DELIMITER.find(text).map(|m| {
        let start = text[..m.start()].chars().count();
        Delimiter {
            start,
            end: start + m.as_str().chars().count(),
        }
    })
}

pub(crate) fn last_delimiter(text: &str) -> Option<Delimiter> {
    delimiters(text).pop()
}
