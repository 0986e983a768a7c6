#![warn(missing_docs)]
#![forbid(unsafe_code)]
//! Core types for rendering juxta diffs.
//!
//! This crate holds everything that is shared between the edit-script
//! producer (`juxta-diff`) and the failure-message layer (`juxta-assert`):
//!
//! - [`Delta`] and [`EditScript`], the output of a codepoint diff
//! - [`TerminalEncoding`] and the ANSI [`Palette`]s
//! - [`LineWriter`] / [`DiffWriter`], which turn deltas into aligned lines
//! - [`DiffResult`], the immutable rendering handed back to callers
//!
//! # Rendering
//!
//! ```text
//! actual  : "2017-05-13T17:55  :01  "\0
//! diff    :                --++ --++
//! expected: "2017-05-13T17:  56:  03"\0
//! ```
//!
//! A literal newline is shown as `\n` at the end of its line, the end of the
//! input as `\0`. Color encodings drop the `diff` row and highlight spans
//! instead, padding with `/`.

mod delta;
mod encoding;
mod error;
mod markers;
mod palette;
mod result;
mod symbols;
mod writer;

pub use delta::*;
pub use encoding::*;
pub use error::*;
pub use markers::*;
pub use palette::*;
pub use result::*;
pub use symbols::*;
pub use writer::*;
