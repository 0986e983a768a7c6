//! The diff pipeline: Myers, cleanup, word simplification, rendering.

use juxta_diff_core::{Delta, DiffResult, EditScript, LineWriter, TerminalEncoding};

use crate::{SimplifyOptions, diff_codepoints, simplify};

/// Renders diffs for one encoding.
///
/// ```
/// use juxta_diff::{Differ, TerminalEncoding};
///
/// let differ = Differ::new(TerminalEncoding::None);
/// let result = differ.diff("a\nb", "a\nc");
/// assert_eq!(result.line_count(), 2);
/// assert_eq!(result.equal_lines(), &[true, false]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Differ {
    encoding: TerminalEncoding,
    simplify: SimplifyOptions,
}

impl Differ {
    /// A differ for `encoding` with the default simplification thresholds.
    pub const fn new(encoding: TerminalEncoding) -> Self {
        Self {
            encoding,
            simplify: SimplifyOptions::new(),
        }
    }

    /// Replaces the simplification thresholds.
    pub const fn simplify_options(mut self, options: SimplifyOptions) -> Self {
        self.simplify = options;
        self
    }

    /// The encoding this differ renders.
    pub const fn encoding(&self) -> TerminalEncoding {
        self.encoding
    }

    /// The simplified edit script between `actual` and `expected`.
    pub fn edit_script(&self, actual: &str, expected: &str) -> EditScript {
        simplify(diff_codepoints(actual, expected), &self.simplify)
    }

    /// Diffs `actual` against `expected` and renders the result.
    pub fn diff(&self, actual: &str, expected: &str) -> DiffResult {
        let script = self.edit_script(actual, expected);
        debug!(encoding = ?self.encoding, deltas = script.len(), "rendering diff");
        render(&script, self.encoding)
    }
}

/// Diffs `actual` against `expected` with the default thresholds.
pub fn diff(actual: &str, expected: &str, encoding: TerminalEncoding) -> DiffResult {
    Differ::new(encoding).diff(actual, expected)
}

fn render(script: &EditScript, encoding: TerminalEncoding) -> DiffResult {
    let mut writer = LineWriter::new(encoding.style());
    for delta in script {
        match delta {
            Delta::Equal(text) => writer.keep(text),
            Delta::Delete(text) => writer.delete(text),
            Delta::Insert(text) => writer.insert(text),
            Delta::Change { source, target } => {
                writer.delete(source);
                writer.insert(target);
            }
        }
    }
    writer.finish()
}
