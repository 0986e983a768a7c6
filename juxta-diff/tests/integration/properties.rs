//! Properties every diff must satisfy, whatever the input.

use juxta_diff::{
    DiffResult, EOS_MARKER, NEWLINE_MARKER, SimplifyOptions, TerminalEncoding, diff,
    diff_codepoints, simplify,
};
use proptest::prelude::*;

/// Short texts over an alphabet that mixes word characters, delimiters,
/// line breaks and a multi-byte character.
fn text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[abé :.\n-]{0,16}").unwrap()
}

/// Rebuilds one side of a plain-text result by dropping the columns that the
/// marker row attributes to the other side.
fn rebuild(result: &DiffResult, lines: &[String], foreign: char) -> String {
    let markers = result.marker_lines().unwrap();
    let mut text = String::new();
    for (line, marker) in lines.iter().zip(markers) {
        for (c, m) in line.chars().zip(marker.chars()) {
            if m != foreign {
                text.push(c);
            }
        }
    }
    text.replace(NEWLINE_MARKER, "\n")
}

proptest! {
    #[test]
    fn rendered_lines_reconstruct_both_inputs(actual in text(), expected in text()) {
        let result = diff(&actual, &expected, TerminalEncoding::None);
        prop_assert_eq!(
            rebuild(&result, result.actual_lines(), '+'),
            format!("{actual}{EOS_MARKER}")
        );
        prop_assert_eq!(
            rebuild(&result, result.expected_lines(), '-'),
            format!("{expected}{EOS_MARKER}")
        );
    }

    #[test]
    fn simplification_preserves_both_texts(actual in text(), expected in text()) {
        let raw = diff_codepoints(&actual, &expected);
        let simplified = simplify(raw.clone(), &SimplifyOptions::default());
        prop_assert_eq!(simplified.source_text(), raw.source_text());
        prop_assert_eq!(simplified.target_text(), raw.target_text());
        prop_assert!(simplified.len() <= raw.len());
        for pair in simplified.deltas().windows(2) {
            prop_assert!(!(pair[0].is_equal() && pair[1].is_equal()));
        }
    }

    #[test]
    fn a_text_against_itself_has_no_edits(text in text()) {
        let script = diff_codepoints(&text, &text);
        prop_assert!(script.is_identity());
        let result = diff(&text, &text, TerminalEncoding::None);
        prop_assert!(result.all_lines_equal());
        for line in result.marker_lines().unwrap() {
            prop_assert!(!line.contains(['-', '+']));
        }
    }

    #[test]
    fn both_sides_have_the_same_line_count(
        actual in text(),
        expected in text(),
        encoding in prop::sample::select(TerminalEncoding::ALL.to_vec()),
    ) {
        let result = diff(&actual, &expected, encoding);
        prop_assert_eq!(result.actual_lines().len(), result.expected_lines().len());
        prop_assert_eq!(result.equal_lines().len(), result.line_count());
        if let Some(markers) = result.marker_lines() {
            prop_assert_eq!(markers.len(), result.line_count());
        }
    }
}
