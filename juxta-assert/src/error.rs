//! Errors raised when a comparison is set up incorrectly.

/// A precondition of context generation or message assembly was violated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContextError {
    /// A display name was empty or whitespace.
    BlankName,

    /// A display name contained `:`, which separates names from values.
    NameContainsColon {
        /// The offending name
        name: String,
    },

    /// Neither side had a value.
    MissingValues,

    /// A headline was blank or did not end with a period.
    InvalidHeadline {
        /// The offending headline
        headline: String,
    },
}

impl core::fmt::Display for ContextError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ContextError::BlankName => write!(f, "name may not be blank"),
            ContextError::NameContainsColon { name } => {
                write!(f, "name may not contain a colon: {name}")
            }
            ContextError::MissingValues => {
                write!(f, "actual and expected values were both absent")
            }
            ContextError::InvalidHeadline { headline } => {
                write!(f, "headline must be non-blank and end with a period: {headline:?}")
            }
        }
    }
}

impl core::error::Error for ContextError {}

/// Checks a display name used in a comparison.
pub(crate) fn check_name(name: &str) -> Result<(), ContextError> {
    if name.trim().is_empty() {
        return Err(ContextError::BlankName);
    }
    if name.contains(':') {
        return Err(ContextError::NameContainsColon {
            name: name.to_owned(),
        });
    }
    Ok(())
}
