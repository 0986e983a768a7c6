//! Renderable pieces of a failure message.

use unicode_width::UnicodeWidthStr;

/// One piece of a failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSection {
    /// Free text, rendered as is.
    Text(String),
    /// Name/value rows, rendered `name: value` with the colons aligned.
    Context(Vec<(String, String)>),
}

impl MessageSection {
    /// A text section.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// The rows of a context section; empty for text.
    pub fn rows(&self) -> &[(String, String)] {
        match self {
            Self::Text(_) => &[],
            Self::Context(rows) => rows,
        }
    }

    /// Returns the value of the row called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.rows()
            .iter()
            .find(|(row, _)| row == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Joins sections with line breaks, padding every name to the widest one.
pub fn render_sections(sections: &[MessageSection]) -> String {
    let width = sections
        .iter()
        .flat_map(MessageSection::rows)
        .map(|(name, _)| name.width())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for section in sections {
        match section {
            MessageSection::Text(text) => lines.push(text.clone()),
            MessageSection::Context(rows) => {
                for (name, value) in rows {
                    let fill = " ".repeat(width.saturating_sub(name.width()));
                    lines.push(format!("{name}{fill}: {value}"));
                }
            }
        }
    }
    lines.join("\n")
}
