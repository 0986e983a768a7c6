//! Word-level simplification of edit scripts.
//!
//! A Myers script is minimal, not readable: `55:01` against `56:03` comes out
//! as a string of one-character edits with one-character equalities in
//! between. This pass walks the script one word at a time and, when a word's
//! edits are too fragmented to read, replaces the whole word with a single
//! change from the actual word to the expected word.
//!
//! Words are delimited by [`WORD_DELIMITER`](crate::WORD_DELIMITER) matches
//! inside equal deltas. The first word has no delimiter before it and the
//! last word has none after it.

use juxta_diff_core::{Delta, EditScript};

use crate::codepoints::{skip_chars, take_chars};
use crate::words::{Delimiter, first_delimiter, last_delimiter};

/// Thresholds that decide whether a word is readable as is.
///
/// A word is left alone when it has at most `max_edits` edits (a change
/// counts as two) and either its shortest edit is at least `shortest_edit`
/// codepoints long or the word itself is at least `longest_word` codepoints
/// long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplifyOptions {
    max_edits: usize,
    shortest_edit: usize,
    longest_word: usize,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SimplifyOptions {
    /// At most 2 edits, shortest edit 3, word length 5.
    pub const fn new() -> Self {
        Self {
            max_edits: 2,
            shortest_edit: 3,
            longest_word: 5,
        }
    }

    /// Sets the number of edits a readable word may contain.
    pub const fn max_edits(mut self, edits: usize) -> Self {
        self.max_edits = edits;
        self
    }

    /// Sets the edit length above which edits are considered readable.
    pub const fn shortest_edit(mut self, len: usize) -> Self {
        self.shortest_edit = len;
        self
    }

    /// Sets the word length above which words are considered readable.
    pub const fn longest_word(mut self, len: usize) -> Self {
        self.longest_word = len;
        self
    }

    fn keeps(&self, edits: usize, shortest_edit: usize, word_len: usize) -> bool {
        edits <= self.max_edits
            && (shortest_edit >= self.shortest_edit || word_len >= self.longest_word)
    }
}

/// Where a word ends.
#[derive(Debug, Clone, Copy)]
struct WordEnd {
    /// Index of the delta that holds the end of the word
    index: usize,
    /// The delimiter that ends the word, or `None` if the word runs to the
    /// end of the script
    delimiter: Option<Delimiter>,
}

/// Merges fragmented edits inside each word.
///
/// The result never has more deltas than `script` and reproduces the same
/// actual and expected texts.
pub fn simplify(script: EditScript, options: &SimplifyOptions) -> EditScript {
    let mut deltas = script.into_deltas();
    if deltas.len() >= 2 {
        let mut start = 0;
        loop {
            let end = find_end_of_word(&deltas, start);
            let end_index = merge_word(&mut deltas, start, end, options);
            if end_index + 1 >= deltas.len() {
                break;
            }
            start = end_index;
        }
    }
    let simplified: EditScript = deltas.into_iter().collect();
    trace!(%simplified, "simplify");
    simplified
}

/// Offset, within `delta`, at which the word that starts in it begins.
fn start_of_word(delta: &Delta) -> usize {
    if !delta.is_equal() {
        return 0;
    }
    last_delimiter(delta.source()).map_or(0, |d| d.end)
}

fn find_end_of_word(deltas: &[Delta], start: usize) -> WordEnd {
    for (index, delta) in deltas.iter().enumerate().skip(start + 1) {
        if !delta.is_equal() {
            continue;
        }
        if let Some(delimiter) = first_delimiter(delta.source()) {
            return WordEnd {
                index,
                delimiter: Some(delimiter),
            };
        }
    }
    WordEnd {
        index: deltas.len() - 1,
        delimiter: None,
    }
}

/// Simplifies `deltas[start..=end.index]` in place, returning the new index
/// of the delta that holds the end of the word.
fn merge_word(
    deltas: &mut Vec<Delta>,
    start: usize,
    end: WordEnd,
    options: &SimplifyOptions,
) -> usize {
    let run = &deltas[start..=end.index];
    if run.len() < 2 {
        return end.index;
    }
    let Some(shortest_edit) = run
        .iter()
        .filter(|d| !d.is_equal())
        .map(Delta::edit_len)
        .min()
    else {
        return end.index;
    };
    let edits: usize = run.iter().map(|d| d.kind().edit_count()).sum();

    let first = &run[0];
    let last = &run[run.len() - 1];
    let word_start = start_of_word(first);
    let after_delimiter = end
        .delimiter
        .map_or(0, |d| last.source_len().saturating_sub(d.end));
    let source_len: usize = run.iter().map(Delta::source_len).sum();
    let target_len: usize = run.iter().map(Delta::target_len).sum();
    let word_len = source_len
        .max(target_len)
        .saturating_sub(word_start + after_delimiter);

    if options.keeps(edits, shortest_edit, word_len) {
        return end.index;
    }

    let word_end = end.delimiter.map(|d| d.start);
    let mut actual_word = String::new();
    let mut expected_word = String::new();
    for (offset, delta) in run.iter().enumerate() {
        let (mut source, mut target) = (delta.source(), delta.target());
        if offset == 0 {
            source = skip_chars(source, word_start);
            target = skip_chars(target, word_start);
        }
        if offset == run.len() - 1
            && let Some(word_end) = word_end
        {
            source = take_chars(source, word_end);
            target = take_chars(target, word_end);
        }
        actual_word.push_str(source);
        expected_word.push_str(target);
    }

    let mut replacement = Vec::with_capacity(3);
    let prefix = take_chars(first.source(), word_start);
    if !prefix.is_empty() {
        replacement.push(Delta::Equal(prefix.to_owned()));
    }
    debug!(actual = %actual_word, expected = %expected_word, edits, word_len, "merging word");
    replacement.extend(Delta::from_spans(actual_word, expected_word));
    if let Some(word_end) = word_end {
        let remainder = skip_chars(last.source(), word_end);
        if !remainder.is_empty() {
            replacement.push(Delta::Equal(remainder.to_owned()));
        }
    }

    let new_end = start + replacement.len().saturating_sub(1);
    deltas.splice(start..=end.index, replacement);
    new_end
}
