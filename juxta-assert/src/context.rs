//! Name/value sections that show where two values part ways.

use juxta_diff::Differ;
use juxta_diff_core::{DiffResult, LineShape};

use crate::error::check_name;
use crate::{ContextConfig, ContextError, MessageSection, Value};

/// Explains the notation of plain-text diffs.
pub const DIFF_LEGEND: &str = "\nLegend\n------\n\
+           : Add this character to the value\n\
-           : Remove this character from the value\n\
[index]     : Refers to the index of a collection element\n\
@line-number: Refers to the line number of a multiline string";

/// Stands in for a run of equal lines or elements.
const ELISION: &str = "[...]";

/// Name of the marker row.
const DIFF_ROW: &str = "diff";

/// Describes how `actual` differs from `expected`.
///
/// Lists are compared element by element, anything else is rendered through
/// the configured [`StringMappers`](crate::StringMappers) and diffed. Equal
/// lines and elements between the first and the last are elided. When both
/// renderings agree but the values don't, their types, hashes or identities
/// are compared instead.
///
/// ```
/// use juxta_assert::{ContextConfig, MessageSection, Value, build_context};
///
/// let sections = build_context(
///     "actual",
///     Some(&Value::of(true)),
///     "expected",
///     Some(&Value::of(false)),
///     &ContextConfig::new(),
/// )?;
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].get("actual"), Some("true"));
/// # Ok::<(), juxta_assert::ContextError>(())
/// ```
pub fn build_context(
    actual_name: &str,
    actual: Option<&Value>,
    expected_name: &str,
    expected: Option<&Value>,
    config: &ContextConfig,
) -> Result<Vec<MessageSection>, ContextError> {
    check_name(actual_name)?;
    check_name(expected_name)?;
    if actual.is_none() && expected.is_none() {
        return Err(ContextError::MissingValues);
    }

    let comparison = Comparison::new(config);
    let mut part = comparison.compare(actual_name, actual, expected_name, expected);
    if part.marked && config.legend_allowed() {
        part.sections.push(MessageSection::text(DIFF_LEGEND));
    }
    Ok(part.sections)
}

/// The sections produced by one level of the comparison.
#[derive(Debug, Default)]
struct Part {
    sections: Vec<MessageSection>,
    /// A marker row was emitted
    marked: bool,
}

impl Part {
    /// Adds a section, separated from the previous one by a blank line.
    fn push(&mut self, section: MessageSection) {
        if !self.sections.is_empty() {
            self.sections.push(MessageSection::text(""));
        }
        self.sections.push(section);
    }

    fn push_elision(&mut self) {
        self.push(MessageSection::text(ELISION));
    }

    fn append(&mut self, other: Part) {
        self.marked |= other.marked;
        let mut sections = other.sections.into_iter();
        if let Some(first) = sections.next() {
            self.push(first);
            self.sections.extend(sections);
        }
    }
}

struct Comparison<'c> {
    config: &'c ContextConfig,
    differ: Differ,
}

impl<'c> Comparison<'c> {
    fn new(config: &'c ContextConfig) -> Self {
        Self {
            config,
            differ: Differ::new(config.terminal_encoding()).simplify_options(*config.simplify()),
        }
    }

    fn compare(
        &self,
        actual_name: &str,
        actual: Option<&Value>,
        expected_name: &str,
        expected: Option<&Value>,
    ) -> Part {
        match as_lists(actual, expected) {
            Some((actual, expected)) => {
                self.compare_lists(actual_name, actual, expected_name, expected)
            }
            None => self.compare_scalars(actual_name, actual, expected_name, expected),
        }
    }

    fn compare_lists(
        &self,
        actual_name: &str,
        actual: &[Value],
        expected_name: &str,
        expected: &[Value],
    ) -> Part {
        let len = actual.len().max(expected.len());
        debug!(
            actual_len = actual.len(),
            expected_len = expected.len(),
            "comparing lists"
        );

        let mut part = Part::default();
        let mut elided = false;
        for index in 0..len {
            let actual_item = actual.get(index);
            let expected_item = expected.get(index);
            let equal = matches!((actual_item, expected_item), (Some(a), Some(e)) if a == e);
            if equal && index != 0 && index + 1 != len {
                trace!(index, "eliding equal element");
                elided = true;
                continue;
            }
            if core::mem::take(&mut elided) {
                part.push_elision();
            }

            let actual_item_name = element_name(actual_name, index, actual_item);
            let expected_item_name = element_name(expected_name, index, expected_item);
            part.append(self.compare(
                &actual_item_name,
                actual_item,
                &expected_item_name,
                expected_item,
            ));
        }
        part
    }

    fn compare_scalars(
        &self,
        actual_name: &str,
        actual: Option<&Value>,
        expected_name: &str,
        expected: Option<&Value>,
    ) -> Part {
        let mappers = self.config.string_mappers();
        let actual_text = actual.map(|value| mappers.to_text(value)).unwrap_or_default();
        let expected_text = expected.map(|value| mappers.to_text(value)).unwrap_or_default();

        let without_diff = !self.config.diff_allowed()
            || actual.is_some_and(Value::is_bool)
            || expected.is_some_and(Value::is_bool);

        let (mut part, renderings_equal) = if without_diff {
            debug!(actual_name, "comparing without a diff");
            let equal = actual_text == expected_text;
            let mut part = Part::default();
            part.push(MessageSection::Context(vec![
                (actual_name.to_owned(), actual_text),
                (expected_name.to_owned(), expected_text),
            ]));
            (part, equal)
        } else {
            let result = self.differ.diff(&actual_text, &expected_text);
            debug!(actual_name, lines = result.line_count(), "comparing renderings");
            (
                line_sections(actual_name, expected_name, &result),
                result.all_lines_equal(),
            )
        };

        if let (Some(actual), Some(expected)) = (actual, expected) {
            if renderings_equal && actual != expected {
                part.append(self.compare_identities(actual_name, actual, expected_name, expected));
            }
        }
        part
    }

    /// Tells apart values whose renderings are identical.
    fn compare_identities(
        &self,
        actual_name: &str,
        actual: &Value,
        expected_name: &str,
        expected: &Value,
    ) -> Part {
        let mappers = self.config.string_mappers();
        let (suffix, actual_text, expected_text) = if actual.type_name() != expected.type_name() {
            (
                "type",
                mappers.to_text(&Value::of(actual.type_name())),
                mappers.to_text(&Value::of(expected.type_name())),
            )
        } else if actual.hash_code() != expected.hash_code() {
            (
                "hashCode",
                actual.hash_code().to_string(),
                expected.hash_code().to_string(),
            )
        } else if actual.identity() != expected.identity() {
            (
                "identityHashCode",
                actual.identity().to_string(),
                expected.identity().to_string(),
            )
        } else {
            return Part::default();
        };

        debug!(suffix, "renderings match");
        let mut part = Part::default();
        part.push(MessageSection::Context(vec![
            (format!("{actual_name}.{suffix}"), actual_text),
            (format!("{expected_name}.{suffix}"), expected_text),
        ]));
        part
    }
}

/// One context section per shown line of `result`, with equal runs elided.
fn line_sections(actual_name: &str, expected_name: &str, result: &DiffResult) -> Part {
    let count = result.line_count();
    let single = count == 1;
    let mut actual_number = 0;
    let mut expected_number = 0;
    let mut part = Part::default();
    let mut elided = false;

    for index in 0..count {
        let actual_shape = result.actual_shape(index);
        let expected_shape = result.expected_shape(index);
        let equal = result.equal_lines()[index];
        if equal && index != 0 && index + 1 != count {
            trace!(index, "eliding equal line");
            actual_number += usize::from(actual_shape.terminated);
            expected_number += usize::from(expected_shape.terminated);
            elided = true;
            continue;
        }
        if core::mem::take(&mut elided) {
            part.push_elision();
        }

        let mut rows = vec![(
            line_name(actual_name, single, actual_shape, &mut actual_number),
            result.actual_lines()[index].clone(),
        )];
        if let Some(markers) = result.marker_lines() {
            if !equal {
                rows.push((DIFF_ROW.to_owned(), markers[index].clone()));
                part.marked = true;
            }
        }
        rows.push((
            line_name(expected_name, single, expected_shape, &mut expected_number),
            result.expected_lines()[index].clone(),
        ));
        part.push(MessageSection::Context(rows));
    }
    part
}

/// Both sides as lists, when one is a non-empty list and the other a list or absent.
fn as_lists<'v>(
    actual: Option<&'v Value>,
    expected: Option<&'v Value>,
) -> Option<(&'v [Value], &'v [Value])> {
    let (actual, expected) = match (actual.map(Value::as_list), expected.map(Value::as_list)) {
        (Some(Some(actual)), Some(Some(expected))) => (actual, expected),
        (Some(Some(actual)), None) => (actual, &[][..]),
        (None, Some(Some(expected))) => (&[][..], expected),
        _ => return None,
    };
    (!actual.is_empty() || !expected.is_empty()).then_some((actual, expected))
}

fn element_name(name: &str, index: usize, item: Option<&Value>) -> String {
    match item {
        Some(_) => format!("{name}[{index}]"),
        None => name.to_owned(),
    }
}

fn line_name(name: &str, single: bool, shape: LineShape, number: &mut usize) -> String {
    if single || !shape.content {
        return name.to_owned();
    }
    let numbered = format!("{name}@{number}");
    if shape.terminated {
        *number += 1;
    }
    numbered
}
