//! Writers that turn deltas into line-synchronized output.
//!
//! Every write is split on line breaks. The text before each break gets a
//! [`NEWLINE_MARKER`] appended (through the same operation, so a deleted
//! line break shows up as a deleted marker) and then the current line is
//! flushed on every side at once. This keeps `actual`, `expected` and the
//! marker row at the same line count.

use std::borrow::Cow;

use owo_colors::Style;
use unicode_width::UnicodeWidthChar;

use crate::result::Lines;
use crate::{
    CARRIAGE_RETURN_MARKER, COLOR_PADDING, DiffError, DiffResult, LineShape, MarkerSymbols,
    NEWLINE_MARKER, PLAIN_PADDING, Palette, SpanRole,
};

/// How a writer decorates its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterStyle {
    /// No escape sequences; a marker row shows `-`/`+` under edits.
    Plain,
    /// ANSI colors from the given palette; no marker row.
    Ansi(&'static Palette),
}

impl WriterStyle {
    /// The padding glyph this style uses by default.
    pub const fn default_padding(self) -> &'static str {
        match self {
            Self::Plain => PLAIN_PADDING,
            Self::Ansi(_) => COLOR_PADDING,
        }
    }
}

/// One side of the rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The actual value
    Actual,
    /// The expected value
    Expected,
}

/// Which sides have an open color that must be reset before more output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetState {
    /// No color is open
    #[default]
    Unmarked,
    /// The actual side has an open color
    ResetActual,
    /// The expected side has an open color
    ResetExpected,
    /// Both sides have an open color
    ResetBoth,
}

impl ResetState {
    /// Returns true if `side` has an open color.
    pub const fn needs_reset(self, side: Side) -> bool {
        match (self, side) {
            (Self::ResetBoth, _)
            | (Self::ResetActual, Side::Actual)
            | (Self::ResetExpected, Side::Expected) => true,
            (Self::Unmarked, _)
            | (Self::ResetActual, Side::Expected)
            | (Self::ResetExpected, Side::Actual) => false,
        }
    }

    /// The state after a color was opened on `side`.
    pub const fn mark(self, side: Side) -> Self {
        match (self, side) {
            (Self::Unmarked | Self::ResetActual, Side::Actual) => Self::ResetActual,
            (Self::Unmarked | Self::ResetExpected, Side::Expected) => Self::ResetExpected,
            (Self::ResetExpected | Self::ResetBoth, Side::Actual)
            | (Self::ResetActual | Self::ResetBoth, Side::Expected) => Self::ResetBoth,
        }
    }

    /// The state after `side` was reset.
    pub const fn clear(self, side: Side) -> Self {
        match (self, side) {
            (Self::Unmarked | Self::ResetActual, Side::Actual)
            | (Self::Unmarked | Self::ResetExpected, Side::Expected) => Self::Unmarked,
            (Self::ResetExpected, Side::Actual) | (Self::ResetBoth, Side::Actual) => {
                Self::ResetExpected
            }
            (Self::ResetActual, Side::Expected) | (Self::ResetBoth, Side::Expected) => {
                Self::ResetActual
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Keep,
    Insert,
    Delete,
}

/// An open writer whose operations cannot fail.
///
/// [`LineWriter::finish`] consumes it, so it cannot be written to after it
/// has produced its [`DiffResult`]. Use [`DiffWriter`] when the writer has to
/// outlive its own closing.
#[derive(Debug)]
pub struct LineWriter {
    style: WriterStyle,
    padding: String,
    symbols: MarkerSymbols,
    actual: String,
    expected: String,
    markers: String,
    actual_shape: LineShape,
    expected_shape: LineShape,
    line_equal: bool,
    reset: ResetState,
    /// Style of the color run left open on each side
    actual_open: Style,
    expected_open: Style,
    lines: Lines,
}

impl LineWriter {
    /// A writer using the style's default padding glyph.
    pub fn new(style: WriterStyle) -> Self {
        Self {
            style,
            padding: style.default_padding().to_owned(),
            symbols: MarkerSymbols::STANDARD,
            actual: String::new(),
            expected: String::new(),
            markers: String::new(),
            actual_shape: LineShape::default(),
            expected_shape: LineShape::default(),
            line_equal: true,
            reset: ResetState::Unmarked,
            actual_open: Style::new(),
            expected_open: Style::new(),
            lines: Lines::default(),
        }
    }

    /// A writer with a custom padding glyph.
    pub fn with_padding(style: WriterStyle, padding: impl Into<String>) -> Result<Self, DiffError> {
        let padding = padding.into();
        if padding.is_empty() {
            return Err(DiffError::EmptyPadding);
        }
        let mut writer = Self::new(style);
        writer.padding = padding;
        Ok(writer)
    }

    /// The writer's style.
    pub fn style(&self) -> WriterStyle {
        self.style
    }

    /// Writes text that is present on both sides.
    pub fn keep(&mut self, text: &str) {
        self.write_lines(Op::Keep, text);
    }

    /// Writes text that is only present in the expected value.
    pub fn insert(&mut self, text: &str) {
        self.write_lines(Op::Insert, text);
    }

    /// Writes text that is only present in the actual value.
    pub fn delete(&mut self, text: &str) {
        self.write_lines(Op::Delete, text);
    }

    /// Flushes the last line and freezes the output.
    pub fn finish(mut self) -> DiffResult {
        self.take_result()
    }

    pub(crate) fn take_result(&mut self) -> DiffResult {
        self.flush_line();
        let lines = core::mem::take(&mut self.lines);
        tracing::trace!(lines = lines.actual.len(), "closing diff writer");
        DiffResult::new(
            lines,
            matches!(self.style, WriterStyle::Plain),
            self.padding.clone(),
        )
    }

    fn write_lines(&mut self, op: Op, text: &str) {
        let mut pieces = text.split('\n').peekable();
        while let Some(piece) = pieces.next() {
            let piece = escape_carriage_returns(piece);
            if pieces.peek().is_none() {
                if !piece.is_empty() {
                    self.write_piece(op, &piece, false);
                }
                break;
            }
            let mut line = piece.into_owned();
            line.push_str(NEWLINE_MARKER);
            self.write_piece(op, &line, true);
            self.flush_line();
        }
    }

    fn write_piece(&mut self, op: Op, text: &str, terminated: bool) {
        let width = columns(text);
        match op {
            Op::Keep => {
                self.write_span(Side::Actual, SpanRole::Equal, text);
                self.write_span(Side::Expected, SpanRole::Equal, text);
                self.actual_shape.content = true;
                self.expected_shape.content = true;
                self.actual_shape.terminated |= terminated;
                self.expected_shape.terminated |= terminated;
                self.write_markers(SpanRole::Equal, width);
            }
            Op::Delete => {
                let padding = self.padding.repeat(width);
                self.write_span(Side::Actual, SpanRole::Delete, text);
                self.write_span(Side::Expected, SpanRole::Padding, &padding);
                self.actual_shape.content = true;
                self.actual_shape.terminated |= terminated;
                self.line_equal = false;
                self.write_markers(SpanRole::Delete, width);
            }
            Op::Insert => {
                let padding = self.padding.repeat(width);
                self.write_span(Side::Actual, SpanRole::Padding, &padding);
                self.write_span(Side::Expected, SpanRole::Insert, text);
                self.expected_shape.content = true;
                self.expected_shape.terminated |= terminated;
                self.line_equal = false;
                self.write_markers(SpanRole::Insert, width);
            }
        }
    }

    fn write_span(&mut self, side: Side, role: SpanRole, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.style {
            WriterStyle::Plain => self.buffer(side).push_str(text),
            WriterStyle::Ansi(palette) => {
                let reset = self.close_run(side);
                let style = palette.paint(role).style();
                let buffer = self.buffer(side);
                buffer.push_str(&reset);
                buffer.push_str(&style.prefix_formatter().to_string());
                buffer.push_str(text);
                match side {
                    Side::Actual => self.actual_open = style,
                    Side::Expected => self.expected_open = style,
                }
                self.reset = self.reset.mark(side);
            }
        }
    }

    fn buffer(&mut self, side: Side) -> &mut String {
        match side {
            Side::Actual => &mut self.actual,
            Side::Expected => &mut self.expected,
        }
    }

    /// The sequence that ends the color run open on `side`, if any.
    fn close_run(&mut self, side: Side) -> String {
        if !self.reset.needs_reset(side) {
            return String::new();
        }
        self.reset = self.reset.clear(side);
        let open = match side {
            Side::Actual => self.actual_open,
            Side::Expected => self.expected_open,
        };
        open.suffix_formatter().to_string()
    }

    fn write_markers(&mut self, role: SpanRole, width: usize) {
        if let WriterStyle::Plain = self.style {
            let symbol = self.symbols.for_role(role);
            self.markers.extend(core::iter::repeat_n(symbol, width));
        }
    }

    fn flush_line(&mut self) {
        for side in [Side::Actual, Side::Expected] {
            let reset = self.close_run(side);
            self.buffer(side).push_str(&reset);
        }
        debug_assert_eq!(self.reset, ResetState::Unmarked);

        self.lines.actual.push(core::mem::take(&mut self.actual));
        self.lines.expected.push(core::mem::take(&mut self.expected));
        self.lines.markers.push(core::mem::take(&mut self.markers));
        self.lines.equal.push(self.line_equal);
        self.lines
            .actual_shapes
            .push(core::mem::take(&mut self.actual_shape));
        self.lines
            .expected_shapes
            .push(core::mem::take(&mut self.expected_shape));
        self.line_equal = true;
    }
}

/// Marker and padding columns for `text`: its display width, except that
/// every codepoint takes at least one column so zero-width edits stay visible.
fn columns(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(1).max(1)).sum()
}

fn escape_carriage_returns(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace('\r', CARRIAGE_RETURN_MARKER))
    } else {
        Cow::Borrowed(text)
    }
}

#[derive(Debug)]
enum WriterState {
    Open(LineWriter),
    Closed(DiffResult),
}

/// A diff writer with an explicit close step.
///
/// Writing after [`close`](DiffWriter::close) or reading lines before it
/// returns a [`DiffError`].
#[derive(Debug)]
pub struct DiffWriter {
    state: WriterState,
}

impl DiffWriter {
    /// A writer using the style's default padding glyph.
    pub fn new(style: WriterStyle) -> Self {
        Self {
            state: WriterState::Open(LineWriter::new(style)),
        }
    }

    /// A writer with a custom padding glyph.
    pub fn with_padding(style: WriterStyle, padding: impl Into<String>) -> Result<Self, DiffError> {
        Ok(Self {
            state: WriterState::Open(LineWriter::with_padding(style, padding)?),
        })
    }

    fn open(&mut self) -> Result<&mut LineWriter, DiffError> {
        match &mut self.state {
            WriterState::Open(writer) => Ok(writer),
            WriterState::Closed(_) => Err(DiffError::WriterClosed),
        }
    }

    fn closed(&self) -> Result<&DiffResult, DiffError> {
        match &self.state {
            WriterState::Open(_) => Err(DiffError::WriterOpen),
            WriterState::Closed(result) => Ok(result),
        }
    }

    /// Writes text that is present on both sides.
    pub fn keep(&mut self, text: &str) -> Result<(), DiffError> {
        self.open()?.keep(text);
        Ok(())
    }

    /// Writes text that is only present in the expected value.
    pub fn insert(&mut self, text: &str) -> Result<(), DiffError> {
        self.open()?.insert(text);
        Ok(())
    }

    /// Writes text that is only present in the actual value.
    pub fn delete(&mut self, text: &str) -> Result<(), DiffError> {
        self.open()?.delete(text);
        Ok(())
    }

    /// Flushes the last line. A writer can only be closed once.
    pub fn close(&mut self) -> Result<(), DiffError> {
        let result = self.open()?.take_result();
        self.state = WriterState::Closed(result);
        Ok(())
    }

    /// Returns true once [`close`](DiffWriter::close) succeeded.
    pub fn is_closed(&self) -> bool {
        matches!(self.state, WriterState::Closed(_))
    }

    /// Rendered lines of the actual value.
    pub fn actual_lines(&self) -> Result<&[String], DiffError> {
        Ok(self.closed()?.actual_lines())
    }

    /// Rendered lines of the expected value.
    pub fn expected_lines(&self) -> Result<&[String], DiffError> {
        Ok(self.closed()?.expected_lines())
    }

    /// The marker rows, for plain text.
    pub fn marker_lines(&self) -> Result<Option<&[String]>, DiffError> {
        Ok(self.closed()?.marker_lines())
    }

    /// Consumes the writer, returning its result.
    pub fn into_result(self) -> Result<DiffResult, DiffError> {
        match self.state {
            WriterState::Open(_) => Err(DiffError::WriterOpen),
            WriterState::Closed(result) => Ok(result),
        }
    }
}
