use insta::assert_snapshot;
use juxta_diff::{TerminalEncoding, diff};
use juxta_testhelpers::test;

use crate::layout;

const RESET: &str = "\x1b[0m";

#[test]
fn nearby_edits_in_a_timestamp() {
    let result = diff(
        "2017-05-13T17:55:01",
        "2017-05-13T17:56:03",
        TerminalEncoding::None,
    );
    assert_snapshot!(layout(&result), @r"
    actual  : 2017-05-13T17:55  :01  \0|
    diff    :               --++ --++  |
    expected: 2017-05-13T17:  56:  03\0|
    ");
}

#[test]
fn changed_second_line() {
    let result = diff("a\nb", "a\nc", TerminalEncoding::None);
    assert_eq!(result.equal_lines(), &[true, false]);
    assert_snapshot!(layout(&result), @r"
    actual  : a\n|
    diff    :    |
    expected: a\n|
    actual  : b \0|
    diff    : -+  |
    expected:  c\0|
    ");
}

#[test]
fn inserted_line() {
    let result = diff("first\nthird", "first\nsecond\nthird", TerminalEncoding::None);
    assert_snapshot!(layout(&result), @r"
    actual  : first\n|
    diff    :        |
    expected: first\n|
    actual  :         |
    diff    : ++++++++|
    expected: second\n|
    actual  : third\0|
    diff    :        |
    expected: third\0|
    ");
    let inserted = result.actual_shape(1);
    assert!(!inserted.content);
    assert!(!inserted.terminated);
    assert!(result.expected_shape(1).terminated);
}

#[test]
fn xterm_8_color_spans() {
    let result = diff("ab", "ac", TerminalEncoding::Xterm8Color);
    assert_eq!(result.marker_lines(), None);
    assert_eq!(
        result.actual_lines(),
        &[format!(
            "\x1b[30;41mab{RESET}\x1b[30;47m//{RESET}\x1b[39;49m\\0{RESET}"
        )]
    );
    assert_eq!(
        result.expected_lines(),
        &[format!(
            "\x1b[30;47m//{RESET}\x1b[30;42mac{RESET}\x1b[39;49m\\0{RESET}"
        )]
    );
}

#[test]
fn truecolor_uses_rgb_parameters() {
    let result = diff("left", "right", TerminalEncoding::Rgb888Color);
    let line = &result.actual_lines()[0];
    assert!(line.contains("\x1b[38;2;255;255;255;48;2;170;40;40m"));
    assert!(line.contains("\x1b[38;2;140;140;140;48;2;60;60;60m"));
    assert!(line.ends_with(RESET));
}

#[test]
fn zero_width_edits_are_marked() {
    let result = diff("resume\u{301}", "resume", TerminalEncoding::None);
    assert_eq!(result.equal_lines(), &[false]);
    assert!(result.marker_lines().unwrap()[0].contains('-'));

    let result = diff("hello world", "hello\u{200b} world", TerminalEncoding::None);
    assert!(result.marker_lines().unwrap()[0].contains('+'));
    assert_eq!(
        result.actual_lines()[0].chars().count(),
        result.marker_lines().unwrap()[0].chars().count()
    );
}
