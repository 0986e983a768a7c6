//! Failure messages: a headline, context rows and an optional diff.

use core::fmt;

use crate::error::check_name;
use crate::{ContextConfig, ContextError, MessageSection, Value, build_context, render_sections};

/// Renderings shorter than this (in chars, without a line break) are shown
/// inline instead of diffed.
pub const MINIMUM_LENGTH_FOR_DIFF: usize = 10;

/// A failure message under construction.
///
/// ```
/// use juxta_assert::{ContextConfig, FailureMessage, Value};
///
/// let message = FailureMessage::new("\"count\" must be positive.", &ContextConfig::new())?
///     .with_context("count", &Value::of(-2))?;
/// assert_eq!(message.to_string(), "\"count\" must be positive.\ncount: -2");
/// # Ok::<(), juxta_assert::ContextError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FailureMessage {
    headline: String,
    context: Vec<(String, String)>,
    diff: Vec<MessageSection>,
    config: ContextConfig,
}

impl FailureMessage {
    /// Starts a message. The headline must be non-blank and end with a period.
    pub fn new(headline: impl Into<String>, config: &ContextConfig) -> Result<Self, ContextError> {
        let headline = headline.into();
        if headline.trim().is_empty() || !headline.ends_with('.') {
            return Err(ContextError::InvalidHeadline { headline });
        }
        Ok(Self {
            headline,
            context: Vec::new(),
            diff: Vec::new(),
            config: config.clone(),
        })
    }

    /// Adds a `name: value` row.
    pub fn with_context(mut self, name: &str, value: &Value) -> Result<Self, ContextError> {
        check_name(name)?;
        let text = self.config.string_mappers().to_text(value);
        self.context.push((name.to_owned(), text));
        Ok(self)
    }

    /// Appends a comparison of `actual` and `expected`.
    pub fn add_diff(
        mut self,
        actual_name: &str,
        actual: Option<&Value>,
        expected_name: &str,
        expected: Option<&Value>,
    ) -> Result<Self, ContextError> {
        let sections = build_context(actual_name, actual, expected_name, expected, &self.config)?;
        self.diff.extend(sections);
        Ok(self)
    }

    /// The headline as given.
    pub fn headline(&self) -> &str {
        &self.headline
    }

    /// Everything below the headline, in display order.
    pub fn sections(&self) -> Vec<MessageSection> {
        let mut sections = Vec::new();
        if !self.context.is_empty() {
            sections.push(MessageSection::Context(self.context.clone()));
        }
        if !self.diff.is_empty() {
            if !sections.is_empty() {
                sections.push(MessageSection::text(""));
            }
            sections.extend(self.diff.iter().cloned());
        }
        sections
    }
}

impl fmt::Display for FailureMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.sections();
        let headline = if body.is_empty()
            && !self.headline.contains('\n')
            && !self.headline.contains(',')
        {
            self.headline.strip_suffix('.').unwrap_or(&self.headline)
        } else {
            self.headline.as_str()
        };

        let mut sections = vec![MessageSection::text(headline)];
        if !self.diff.is_empty() && self.context.is_empty() {
            sections.push(MessageSection::text(""));
        }
        sections.extend(body);
        f.write_str(&render_sections(&sections))
    }
}

/// Describes a failed comparison between two values.
///
/// Short renderings are stated inline:
/// `"actual" must be equal to 5.`, followed by the actual value (and the
/// expected one, when it has a name). Longer ones get a diff under
/// `"actual" had an unexpected value.`
pub fn compare_values(
    actual_name: &str,
    actual: &Value,
    relationship: &str,
    expected_name: Option<&str>,
    expected: &Value,
    config: &ContextConfig,
) -> Result<FailureMessage, ContextError> {
    check_name(actual_name)?;
    if let Some(name) = expected_name {
        check_name(name)?;
    }

    let mappers = config.string_mappers();
    let actual_text = mappers.to_text(actual);
    let expected_text = mappers.to_text(expected);
    let inline = |text: &str| text.chars().count() < MINIMUM_LENGTH_FOR_DIFF && !text.contains('\n');

    if !config.diff_allowed() || inline(&actual_text) || inline(&expected_text) {
        debug!(actual_name, relationship, "stating comparison inline");
        let target = expected_name.map_or(expected_text, quote_name);
        let headline = format!("{} {relationship} {target}.", quote_name(actual_name));
        let mut message = FailureMessage::new(headline, config)?.with_context(actual_name, actual)?;
        if let Some(name) = expected_name {
            message = message.with_context(name, expected)?;
        }
        return Ok(message);
    }

    debug!(actual_name, relationship, "diffing comparison");
    let headline = format!("{} had an unexpected value.", quote_name(actual_name));
    FailureMessage::new(headline, config)?.add_diff(
        actual_name,
        Some(actual),
        expected_name.unwrap_or("expected"),
        Some(expected),
    )
}

/// Quotes a plain name; paths such as `user.name` are left alone.
pub fn quote_name(name: &str) -> String {
    if name.contains('.') {
        name.to_owned()
    } else {
        format!("\"{name}\"")
    }
}
