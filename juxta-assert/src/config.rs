use juxta_diff::{SimplifyOptions, TerminalEncoding};

use crate::StringMappers;

/// Settings for building comparison contexts.
///
/// ```
/// use juxta_assert::{ContextConfig, TerminalEncoding};
///
/// let config = ContextConfig::new()
///     .encoding(TerminalEncoding::Xterm256Color)
///     .allow_diff(false);
/// assert!(!config.diff_allowed());
/// ```
#[derive(Debug, Clone)]
pub struct ContextConfig {
    encoding: TerminalEncoding,
    allow_diff: bool,
    allow_legend: bool,
    simplify: SimplifyOptions,
    mappers: StringMappers,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextConfig {
    /// Plain text, diffs and legend enabled, default mappers.
    pub fn new() -> Self {
        Self {
            encoding: TerminalEncoding::None,
            allow_diff: true,
            allow_legend: true,
            simplify: SimplifyOptions::new(),
            mappers: StringMappers::new(),
        }
    }

    /// Sets the output encoding.
    pub fn encoding(mut self, encoding: TerminalEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Enables or disables visual diffs.
    pub fn allow_diff(mut self, allow: bool) -> Self {
        self.allow_diff = allow;
        self
    }

    /// Enables or disables the legend after plain-text diffs.
    pub fn allow_legend(mut self, allow: bool) -> Self {
        self.allow_legend = allow;
        self
    }

    /// Sets the word simplification thresholds.
    pub fn simplify_options(mut self, options: SimplifyOptions) -> Self {
        self.simplify = options;
        self
    }

    /// Replaces the value-to-text mappers.
    pub fn mappers(mut self, mappers: StringMappers) -> Self {
        self.mappers = mappers;
        self
    }

    /// The output encoding.
    pub fn terminal_encoding(&self) -> TerminalEncoding {
        self.encoding
    }

    /// Whether visual diffs may be shown.
    pub fn diff_allowed(&self) -> bool {
        self.allow_diff
    }

    /// Whether the legend may be shown.
    pub fn legend_allowed(&self) -> bool {
        self.allow_legend
    }

    /// The word simplification thresholds.
    pub fn simplify(&self) -> &SimplifyOptions {
        &self.simplify
    }

    /// The value-to-text mappers.
    pub fn string_mappers(&self) -> &StringMappers {
        &self.mappers
    }
}
