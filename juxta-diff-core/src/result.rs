//! The finished rendering of a diff.

/// What one side contributed to a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineShape {
    /// The side wrote text of its own (anything but padding) on this line
    pub content: bool,
    /// The line ends with a line break that belongs to this side
    pub terminated: bool,
}

/// Line-synchronized rendering of an actual and an expected text.
///
/// `actual_lines()[i]`, `expected_lines()[i]` and, in plain text,
/// `marker_lines()[i]` describe the same region of both inputs and line up
/// column for column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffResult {
    actual_lines: Vec<String>,
    expected_lines: Vec<String>,
    marker_lines: Option<Vec<String>>,
    equal_lines: Vec<bool>,
    actual_shapes: Vec<LineShape>,
    expected_shapes: Vec<LineShape>,
    padding: String,
}

/// Per-line output collected by a writer before it is frozen into a [`DiffResult`].
#[derive(Debug, Default)]
pub(crate) struct Lines {
    pub(crate) actual: Vec<String>,
    pub(crate) expected: Vec<String>,
    pub(crate) markers: Vec<String>,
    pub(crate) equal: Vec<bool>,
    pub(crate) actual_shapes: Vec<LineShape>,
    pub(crate) expected_shapes: Vec<LineShape>,
}

impl DiffResult {
    pub(crate) fn new(lines: Lines, with_markers: bool, padding: String) -> Self {
        Self {
            actual_lines: lines.actual,
            expected_lines: lines.expected,
            marker_lines: with_markers.then_some(lines.markers),
            equal_lines: lines.equal,
            actual_shapes: lines.actual_shapes,
            expected_shapes: lines.expected_shapes,
            padding,
        }
    }

    /// Rendered lines of the actual value.
    pub fn actual_lines(&self) -> &[String] {
        &self.actual_lines
    }

    /// Rendered lines of the expected value.
    pub fn expected_lines(&self) -> &[String] {
        &self.expected_lines
    }

    /// The marker row of each line; only plain text has one.
    pub fn marker_lines(&self) -> Option<&[String]> {
        self.marker_lines.as_deref()
    }

    /// Whether each line is free of inserts and deletes.
    pub fn equal_lines(&self) -> &[bool] {
        &self.equal_lines
    }

    /// Returns true if no line contains an insert or a delete.
    pub fn all_lines_equal(&self) -> bool {
        self.equal_lines.iter().all(|equal| *equal)
    }

    /// Number of rendered lines; both sides always have the same count.
    pub fn line_count(&self) -> usize {
        self.actual_lines.len()
    }

    /// Shape of the actual side of line `index`.
    pub fn actual_shape(&self, index: usize) -> LineShape {
        self.actual_shapes.get(index).copied().unwrap_or_default()
    }

    /// Shape of the expected side of line `index`.
    pub fn expected_shape(&self, index: usize) -> LineShape {
        self.expected_shapes.get(index).copied().unwrap_or_default()
    }

    /// The padding glyph used by the writer.
    pub fn padding(&self) -> &str {
        &self.padding
    }

    /// Returns true if `line` holds nothing but padding (and color codes).
    pub fn is_blank(&self, line: &str) -> bool {
        let plain = strip_ansi_escapes::strip_str(line);
        let mut rest = plain.as_str();
        if self.padding.is_empty() {
            return rest.is_empty();
        }
        while let Some(stripped) = rest.strip_prefix(self.padding.as_str()) {
            rest = stripped;
        }
        rest.is_empty()
    }
}
