//! Errors raised by diff writers.

/// Misuse of a [`DiffWriter`](crate::DiffWriter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffError {
    /// The writer was written to, or closed, after it had been closed.
    WriterClosed,

    /// The lines were requested before the writer was closed.
    WriterOpen,

    /// A writer was configured with an empty padding glyph.
    EmptyPadding,
}

impl core::fmt::Display for DiffError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DiffError::WriterClosed => write!(f, "writer was already closed"),
            DiffError::WriterOpen => write!(f, "writer must be closed before its lines are read"),
            DiffError::EmptyPadding => write!(f, "padding may not be empty"),
        }
    }
}

impl core::error::Error for DiffError {}
