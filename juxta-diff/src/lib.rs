#![warn(missing_docs)]
#![forbid(unsafe_code)]
//! Codepoint diffs for assertion messages.
//!
//! [`diff`] compares two texts one Unicode scalar value at a time, cleans the
//! Myers edit script up, merges fragmented edits inside a word and renders
//! the result through a [`LineWriter`](juxta_diff_core::LineWriter):
//!
//! ```
//! use juxta_diff::{TerminalEncoding, diff};
//!
//! let result = diff("2017-05-13T17:55:01", "2017-05-13T17:56:03", TerminalEncoding::None);
//! assert_eq!(result.actual_lines(), &["2017-05-13T17:55  :01  \\0"]);
//! assert_eq!(result.expected_lines(), &["2017-05-13T17:  56:  03\\0"]);
//! ```

#[macro_use]
mod tracing_macros;

mod codepoints;
mod generator;
mod myers;
mod simplify;
mod words;

pub use codepoints::Codepoints;
pub use generator::{Differ, diff};
pub use myers::{cleanup, diff_codepoints};
pub use simplify::{SimplifyOptions, simplify};
pub use words::{WORD_DELIMITER, Delimiter, delimiters};

pub use juxta_diff_core::{
    Delta, DeltaKind, DiffError, DiffResult, DiffWriter, EOS_MARKER, EditScript, LineShape,
    LineWriter, NEWLINE_MARKER, Palette, TerminalEncoding, WriterStyle,
};
