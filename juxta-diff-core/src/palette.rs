//! Color palettes for the ANSI encodings.

use owo_colors::{AnsiColors, DynColors, Rgb, Style, XtermColors};

/// A terminal color, in one of the addressing schemes ANSI terminals support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// One of the basic or aixterm bright colors, or the terminal default
    Ansi(AnsiColors),
    /// An index into the xterm 256-color table
    Xterm(u8),
    /// A 24-bit color
    Rgb(Rgb),
}

impl Tone {
    /// The terminal's default color.
    pub const DEFAULT: Self = Self::Ansi(AnsiColors::Default);

    fn dyn_color(self) -> DynColors {
        match self {
            Tone::Ansi(color) => DynColors::Ansi(color),
            Tone::Xterm(index) => DynColors::Xterm(XtermColors::from(index)),
            Tone::Rgb(Rgb(r, g, b)) => DynColors::Rgb(r, g, b),
        }
    }
}

/// Foreground, background and weight of one kind of span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    /// Text color
    pub foreground: Tone,
    /// Cell color
    pub background: Tone,
    /// Whether the text is bold
    pub bold: bool,
}

impl Paint {
    /// The terminal's default colors.
    pub const DEFAULT: Self = Self::new(Tone::DEFAULT, Tone::DEFAULT);

    /// A non-bold paint.
    pub const fn new(foreground: Tone, background: Tone) -> Self {
        Self {
            foreground,
            background,
            bold: false,
        }
    }

    /// The same paint, in bold.
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// The paint as an `owo-colors` style.
    pub fn style(&self) -> Style {
        let style = Style::new()
            .color(self.foreground.dyn_color())
            .on_color(self.background.dyn_color());
        if self.bold { style.bold() } else { style }
    }
}

/// The role a span plays in a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanRole {
    /// Text present on both sides
    Equal,
    /// Text only in the expected value
    Insert,
    /// Text only in the actual value
    Delete,
    /// Filler standing in for the other side's text
    Padding,
}

/// The colors a color writer uses for each [`SpanRole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Color of unchanged text
    pub equal: Paint,
    /// Color of inserted text
    pub insert: Paint,
    /// Color of deleted text
    pub delete: Paint,
    /// Color of padding
    pub padding: Paint,
}

const fn ansi(color: AnsiColors) -> Tone {
    Tone::Ansi(color)
}

impl Palette {
    /// Eight basic colors.
    pub const XTERM_8_COLOR: Self = Self {
        equal: Paint::DEFAULT,
        insert: Paint::new(ansi(AnsiColors::Black), ansi(AnsiColors::Green)),
        delete: Paint::new(ansi(AnsiColors::Black), ansi(AnsiColors::Red)),
        padding: Paint::new(ansi(AnsiColors::Black), ansi(AnsiColors::White)),
    };

    /// Bright aixterm backgrounds with bold edits.
    pub const XTERM_16_COLOR: Self = Self {
        equal: Paint::DEFAULT,
        insert: Paint::new(ansi(AnsiColors::Black), ansi(AnsiColors::BrightGreen)).bold(),
        delete: Paint::new(ansi(AnsiColors::Black), ansi(AnsiColors::BrightRed)).bold(),
        padding: Paint::new(ansi(AnsiColors::BrightBlack), ansi(AnsiColors::BrightWhite)),
    };

    /// The xterm 256-color table.
    pub const XTERM_256_COLOR: Self = Self {
        equal: Paint::DEFAULT,
        insert: Paint::new(Tone::Xterm(231), Tone::Xterm(28)),
        delete: Paint::new(Tone::Xterm(231), Tone::Xterm(124)),
        padding: Paint::new(Tone::Xterm(244), Tone::Xterm(236)),
    };

    /// 24-bit colors.
    pub const RGB_888_COLOR: Self = Self {
        equal: Paint::DEFAULT,
        insert: Paint::new(Tone::Rgb(Rgb(255, 255, 255)), Tone::Rgb(Rgb(40, 130, 40))),
        delete: Paint::new(Tone::Rgb(Rgb(255, 255, 255)), Tone::Rgb(Rgb(170, 40, 40))),
        padding: Paint::new(Tone::Rgb(Rgb(140, 140, 140)), Tone::Rgb(Rgb(60, 60, 60))),
    };

    /// The paint for a span role.
    pub const fn paint(&self, role: SpanRole) -> Paint {
        match role {
            SpanRole::Equal => self.equal,
            SpanRole::Insert => self.insert,
            SpanRole::Delete => self.delete,
            SpanRole::Padding => self.padding,
        }
    }
}
