//! Output encodings.

use crate::{Palette, WriterStyle};

/// The encoding used to render a diff.
///
/// Detecting what the terminal supports is left to the caller; this type only
/// names the choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TerminalEncoding {
    /// Plain text with a `diff` marker row
    #[default]
    None,
    /// The eight basic ANSI colors
    Xterm8Color,
    /// Sixteen colors, using bold and the aixterm bright extensions
    Xterm16Color,
    /// The xterm 256-color palette
    Xterm256Color,
    /// 24-bit truecolor
    Rgb888Color,
}

impl TerminalEncoding {
    /// Every encoding, from the least to the most capable.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Xterm8Color,
        Self::Xterm16Color,
        Self::Xterm256Color,
        Self::Rgb888Color,
    ];

    /// The palette for this encoding, or `None` for plain text.
    pub const fn palette(self) -> Option<&'static Palette> {
        match self {
            Self::None => None,
            Self::Xterm8Color => Some(&Palette::XTERM_8_COLOR),
            Self::Xterm16Color => Some(&Palette::XTERM_16_COLOR),
            Self::Xterm256Color => Some(&Palette::XTERM_256_COLOR),
            Self::Rgb888Color => Some(&Palette::RGB_888_COLOR),
        }
    }

    /// The writer style that renders this encoding.
    pub const fn style(self) -> WriterStyle {
        match self.palette() {
            Some(palette) => WriterStyle::Ansi(palette),
            None => WriterStyle::Plain,
        }
    }

    /// Returns true if this encoding emits escape sequences.
    pub const fn is_colored(self) -> bool {
        !matches!(self, Self::None)
    }
}
