//! Symbols used on the plain-text marker row.

use crate::SpanRole;

/// Characters written to the marker row, one per display column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSymbols {
    /// Under unchanged text (default: space)
    pub equal: char,
    /// Under deleted text (default: `-`)
    pub deleted: char,
    /// Under inserted text (default: `+`)
    pub inserted: char,
}

impl Default for MarkerSymbols {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl MarkerSymbols {
    /// ` `, `-` and `+`.
    pub const STANDARD: Self = Self {
        equal: ' ',
        deleted: '-',
        inserted: '+',
    };

    /// The symbol for an edit role. Padding never reaches the marker row.
    pub const fn for_role(&self, role: SpanRole) -> char {
        match role {
            SpanRole::Equal | SpanRole::Padding => self.equal,
            SpanRole::Delete => self.deleted,
            SpanRole::Insert => self.inserted,
        }
    }
}
