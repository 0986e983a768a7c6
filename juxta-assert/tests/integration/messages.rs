use insta::assert_snapshot;
use juxta_assert::{
    ContextConfig, FailureMessage, TerminalEncoding, Value, compare_values,
};
use juxta_testhelpers::{test, visible_escapes};

use crate::framed;

#[test]
fn list_message_with_legend() {
    let message = compare_values(
        "actual",
        &Value::list_of([1, 2, 3, 4, 5]),
        "must be equal to",
        None,
        &Value::list_of([1, 2, 9, 4, 5]),
        &ContextConfig::new(),
    )
    .unwrap();
    assert_snapshot!(framed(&message.to_string()), @r#"
    "actual" had an unexpected value.|
    |
    actual[0]  : 1\0|
    expected[0]: 1\0|
    |
    [...]|
    |
    actual[2]  : 3 \0|
    diff       : -+  |
    expected[2]:  9\0|
    |
    [...]|
    |
    actual[4]  : 5\0|
    expected[4]: 5\0|
    |
    Legend|
    ------|
    +           : Add this character to the value|
    -           : Remove this character from the value|
    [index]     : Refers to the index of a collection element|
    @line-number: Refers to the line number of a multiline string|
    "#);
}

#[test]
fn timestamp_message() {
    let message = compare_values(
        "actual",
        &Value::of("2017-05-13T17:55:01"),
        "must be equal to",
        Some("deadline"),
        &Value::of("2017-05-13T17:56:03"),
        &ContextConfig::new().allow_legend(false),
    )
    .unwrap();
    assert_snapshot!(framed(&message.to_string()), @r#"
    "actual" had an unexpected value.|
    |
    actual  : "2017-05-13T17:55  :01"   \0|
    diff    :                --++ ---+++  |
    deadline: "2017-05-13T17:  56:   03"\0|
    "#);
}

#[test]
fn short_values_are_stated_in_the_headline() {
    let message = compare_values(
        "actual",
        &Value::of("int[6]"),
        "must be equal to",
        None,
        &Value::of("int[5]"),
        &ContextConfig::new(),
    )
    .unwrap();
    assert_snapshot!(message.to_string(), @r#"
    "actual" must be equal to "int[5]".
    actual: "int[6]"
    "#);
}

#[test]
fn disabled_diff_states_long_values_inline() {
    let message = compare_values(
        "user.name",
        &Value::of("Ada Lovelace"),
        "must be equal to",
        Some("expected"),
        &Value::of("Ada King"),
        &ContextConfig::new().allow_diff(false),
    )
    .unwrap();
    assert_snapshot!(message.to_string(), @r#"
    user.name must be equal to "expected".
    user.name: "Ada Lovelace"
    expected : "Ada King"
    "#);
}

#[test]
fn context_rows_precede_the_diff() {
    let message = FailureMessage::new("\"config\" is invalid.", &ContextConfig::new())
        .unwrap()
        .with_context("path", &Value::of("/etc/app.toml"))
        .unwrap()
        .add_diff(
            "actual",
            Some(&Value::of(true)),
            "expected",
            Some(&Value::of(false)),
        )
        .unwrap();
    assert_snapshot!(message.to_string(), @r#"
    "config" is invalid.
    path    : "/etc/app.toml"

    actual  : true
    expected: false
    "#);
}

#[test]
fn colored_messages_skip_markers_and_legend() {
    let message = compare_values(
        "actual",
        &Value::of("first value"),
        "must be equal to",
        None,
        &Value::of("second value"),
        &ContextConfig::new().encoding(TerminalEncoding::Xterm8Color),
    )
    .unwrap();
    let text = visible_escapes(&message.to_string());
    assert!(text.contains("␛["));
    assert!(!text.contains("diff"));
    assert!(!text.contains("Legend"));
}
