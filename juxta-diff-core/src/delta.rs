//! Deltas and edit scripts.

use core::fmt;

/// The kind of a [`Delta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeltaKind {
    /// Text present on both sides
    Equal,
    /// Text only present in the actual value
    Delete,
    /// Text only present in the expected value
    Insert,
    /// Actual text replaced by expected text
    Change,
}

impl DeltaKind {
    /// Number of edits this kind stands for. A change is a delete plus an insert.
    pub const fn edit_count(self) -> usize {
        match self {
            Self::Equal => 0,
            Self::Delete | Self::Insert => 1,
            Self::Change => 2,
        }
    }
}

/// One contiguous edit operation between the actual and the expected text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Delta {
    /// Text shared by both sides.
    Equal(String),
    /// Text removed from the actual value.
    Delete(String),
    /// Text added by the expected value.
    Insert(String),
    /// Actual text (`source`) replaced by expected text (`target`).
    Change {
        /// Text on the actual side
        source: String,
        /// Text on the expected side
        target: String,
    },
}

impl Delta {
    /// Builds a delta from its two spans, picking the narrowest kind that fits.
    ///
    /// Returns `None` when both spans are empty.
    pub fn from_spans(source: String, target: String) -> Option<Self> {
        match (source.is_empty(), target.is_empty()) {
            (true, true) => None,
            (false, true) => Some(Self::Delete(source)),
            (true, false) => Some(Self::Insert(target)),
            (false, false) if source == target => Some(Self::Equal(source)),
            (false, false) => Some(Self::Change { source, target }),
        }
    }

    /// The kind of this delta.
    pub const fn kind(&self) -> DeltaKind {
        match self {
            Self::Equal(_) => DeltaKind::Equal,
            Self::Delete(_) => DeltaKind::Delete,
            Self::Insert(_) => DeltaKind::Insert,
            Self::Change { .. } => DeltaKind::Change,
        }
    }

    /// Returns true for [`Delta::Equal`].
    pub const fn is_equal(&self) -> bool {
        matches!(self, Self::Equal(_))
    }

    /// The span taken from the actual text (empty for inserts).
    pub fn source(&self) -> &str {
        match self {
            Self::Equal(text) | Self::Delete(text) => text,
            Self::Insert(_) => "",
            Self::Change { source, .. } => source,
        }
    }

    /// The span taken from the expected text (empty for deletes).
    pub fn target(&self) -> &str {
        match self {
            Self::Equal(text) | Self::Insert(text) => text,
            Self::Delete(_) => "",
            Self::Change { target, .. } => target,
        }
    }

    /// Length of the source span in codepoints.
    pub fn source_len(&self) -> usize {
        self.source().chars().count()
    }

    /// Length of the target span in codepoints.
    pub fn target_len(&self) -> usize {
        self.target().chars().count()
    }

    /// Length of the shorter non-empty span, used to judge readability.
    pub fn edit_len(&self) -> usize {
        match self {
            Self::Equal(text) | Self::Delete(text) | Self::Insert(text) => text.chars().count(),
            Self::Change { source, target } => {
                source.chars().count().min(target.chars().count())
            }
        }
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal(text) => write!(f, "={text:?}"),
            Self::Delete(text) => write!(f, "-{text:?}"),
            Self::Insert(text) => write!(f, "+{text:?}"),
            Self::Change { source, target } => write!(f, "-{source:?}+{target:?}"),
        }
    }
}

/// An ordered sequence of deltas that turns the actual text into the expected one.
///
/// Adjacent equal deltas are always coalesced and empty deltas are dropped, so
/// no two neighbours are both [`Delta::Equal`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EditScript {
    deltas: Vec<Delta>,
}

impl EditScript {
    /// An empty script.
    pub const fn new() -> Self {
        Self { deltas: Vec::new() }
    }

    /// Appends a delta, merging it into the previous one when both are equal.
    pub fn push(&mut self, delta: Delta) {
        if delta.source().is_empty() && delta.target().is_empty() {
            return;
        }
        if let (Some(Delta::Equal(previous)), Delta::Equal(text)) = (self.deltas.last_mut(), &delta)
        {
            previous.push_str(text);
            return;
        }
        self.deltas.push(delta);
    }

    /// The deltas, in order.
    pub fn deltas(&self) -> &[Delta] {
        &self.deltas
    }

    /// Iterates over the deltas.
    pub fn iter(&self) -> core::slice::Iter<'_, Delta> {
        self.deltas.iter()
    }

    /// Number of deltas.
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// Returns true if the script holds no deltas.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Returns true if every delta is [`Delta::Equal`].
    pub fn is_identity(&self) -> bool {
        self.deltas.iter().all(Delta::is_equal)
    }

    /// Number of edits (a change counts twice).
    pub fn edit_count(&self) -> usize {
        self.deltas.iter().map(|d| d.kind().edit_count()).sum()
    }

    /// Concatenation of all source spans: the actual text.
    pub fn source_text(&self) -> String {
        self.deltas.iter().map(Delta::source).collect()
    }

    /// Concatenation of all target spans: the expected text.
    pub fn target_text(&self) -> String {
        self.deltas.iter().map(Delta::target).collect()
    }

    /// Consumes the script, returning its deltas.
    pub fn into_deltas(self) -> Vec<Delta> {
        self.deltas
    }
}

impl FromIterator<Delta> for EditScript {
    fn from_iter<I: IntoIterator<Item = Delta>>(iter: I) -> Self {
        let mut script = Self::new();
        for delta in iter {
            script.push(delta);
        }
        script
    }
}

impl IntoIterator for EditScript {
    type Item = Delta;
    type IntoIter = std::vec::IntoIter<Delta>;

    fn into_iter(self) -> Self::IntoIter {
        self.deltas.into_iter()
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a Delta;
    type IntoIter = core::slice::Iter<'a, Delta>;

    fn into_iter(self) -> Self::IntoIter {
        self.deltas.iter()
    }
}

impl fmt::Display for EditScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, delta) in self.deltas.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{delta}")?;
        }
        Ok(())
    }
}
