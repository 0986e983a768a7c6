//! Markers and padding glyphs shared by every writer.

/// Shown in place of a line break, at the end of the line it terminates.
pub const NEWLINE_MARKER: &str = "\\n";

/// Appended to both sides before diffing so trailing differences stay visible.
pub const EOS_MARKER: &str = "\\0";

/// Shown in place of a carriage return, which would otherwise move the cursor.
pub const CARRIAGE_RETURN_MARKER: &str = "\\r";

/// Padding glyph of the plain-text writer.
pub const PLAIN_PADDING: &str = " ";

/// Padding glyph of the color writers.
pub const COLOR_PADDING: &str = "/";
