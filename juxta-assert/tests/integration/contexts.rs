use std::hash::{Hash, Hasher};

use juxta_assert::{
    ContextConfig, DIFF_LEGEND, MessageSection, StringMappers, Value, build_context,
};
use juxta_testhelpers::test;

fn rows(section: &MessageSection) -> Vec<(&str, &str)> {
    section
        .rows()
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect()
}

fn blank() -> MessageSection {
    MessageSection::text("")
}

fn elision() -> MessageSection {
    MessageSection::text("[...]")
}

#[test]
fn equal_elements_between_the_ends_are_elided() {
    let sections = build_context(
        "actual",
        Some(&Value::list_of([1, 2, 3, 4, 5])),
        "expected",
        Some(&Value::list_of([1, 2, 9, 4, 5])),
        &ContextConfig::new(),
    )
    .unwrap();

    assert_eq!(sections.len(), 10);
    assert_eq!(
        rows(&sections[0]),
        [("actual[0]", "1\\0"), ("expected[0]", "1\\0")]
    );
    assert_eq!(sections[1..4], [blank(), elision(), blank()]);
    assert_eq!(
        rows(&sections[4]),
        [
            ("actual[2]", "3 \\0"),
            ("diff", "-+  "),
            ("expected[2]", " 9\\0"),
        ]
    );
    assert_eq!(sections[5..8], [blank(), elision(), blank()]);
    assert_eq!(
        rows(&sections[8]),
        [("actual[4]", "5\\0"), ("expected[4]", "5\\0")]
    );
    assert_eq!(sections[9], MessageSection::text(DIFF_LEGEND));
}

#[test]
fn missing_elements_keep_the_bare_name() {
    let sections = build_context(
        "actual",
        Some(&Value::list_of([1, 2])),
        "expected",
        Some(&Value::list_of([1, 2, 3])),
        &ContextConfig::new().allow_legend(false),
    )
    .unwrap();

    assert_eq!(sections.len(), 5);
    assert_eq!(sections[2], elision());
    assert_eq!(
        rows(&sections[4]),
        [("actual", " \\0"), ("diff", "+  "), ("expected[2]", "3\\0")]
    );
}

#[test]
fn absent_list_compares_as_empty() {
    let sections = build_context(
        "actual",
        None,
        "expected",
        Some(&Value::list_of(["a"])),
        &ContextConfig::new().allow_diff(false),
    )
    .unwrap();
    assert_eq!(
        rows(&sections[0]),
        [("actual", ""), ("expected[0]", "\"a\"")]
    );
}

#[test]
fn disabled_diff_yields_a_single_pair() {
    let sections = build_context(
        "actual",
        Some(&Value::of("int[6]")),
        "expected",
        Some(&Value::of("int[5]")),
        &ContextConfig::new().allow_diff(false),
    )
    .unwrap();
    assert_eq!(
        sections,
        [MessageSection::Context(vec![
            ("actual".to_owned(), "\"int[6]\"".to_owned()),
            ("expected".to_owned(), "\"int[5]\"".to_owned()),
        ])]
    );
}

#[test]
fn multi_line_values_are_numbered_per_side() {
    let sections = build_context(
        "actual",
        Some(&Value::of("alpha\nbeta\ngamma\ndelta")),
        "expected",
        Some(&Value::of("alpha\nbeta\ngamma\nepsilon")),
        &ContextConfig::new().allow_legend(false),
    )
    .unwrap();

    assert_eq!(sections.len(), 5);
    assert_eq!(
        rows(&sections[0]),
        [("actual@0", "\"alpha\\n"), ("expected@0", "\"alpha\\n")]
    );
    assert_eq!(sections[1..4], [blank(), elision(), blank()]);
    let last: Vec<&str> = rows(&sections[4]).into_iter().map(|(name, _)| name).collect();
    assert_eq!(last, ["actual@3", "diff", "expected@3"]);
}

#[derive(Debug, Hash, PartialEq)]
struct Token {
    id: u32,
}

#[test]
fn equal_renderings_fall_back_to_hash_codes() {
    let config = ContextConfig::new()
        .allow_legend(false)
        .mappers(StringMappers::new().put(|_: &Token| "x".to_owned()));
    let actual = Value::of(Token { id: 1 });
    let expected = Value::of(Token { id: 2 });
    let sections =
        build_context("actual", Some(&actual), "expected", Some(&expected), &config).unwrap();

    assert_eq!(sections.len(), 3);
    assert_eq!(
        rows(&sections[0]),
        [("actual", "x\\0"), ("expected", "x\\0")]
    );
    assert_eq!(sections[1], blank());
    let actual_hash = actual.hash_code().to_string();
    let expected_hash = expected.hash_code().to_string();
    assert_eq!(
        rows(&sections[2]),
        [
            ("actual.hashCode", actual_hash.as_str()),
            ("expected.hashCode", expected_hash.as_str()),
        ]
    );
}

/// Equality looks at `label`, hashing doesn't.
#[derive(Debug, PartialEq)]
struct Opaque {
    label: &'static str,
}

impl Hash for Opaque {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

#[test]
fn matching_hashes_fall_back_to_identities() {
    let config = ContextConfig::new()
        .allow_diff(false)
        .mappers(StringMappers::new().put(|_: &Opaque| "opaque".to_owned()));
    let actual = Value::of(Opaque { label: "left" });
    let expected = Value::of(Opaque { label: "right" });
    let sections =
        build_context("left", Some(&actual), "right", Some(&expected), &config).unwrap();

    assert_eq!(sections.len(), 3);
    let names: Vec<&str> = rows(&sections[2]).into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["left.identityHashCode", "right.identityHashCode"]);
    assert_eq!(
        sections[2].get("left.identityHashCode"),
        Some(actual.identity().to_string().as_str())
    );
}

#[test]
fn equal_values_need_no_fallback() {
    let value = Value::of(String::from("same text here"));
    let sections = build_context(
        "actual",
        Some(&value),
        "expected",
        Some(&value.clone()),
        &ContextConfig::new(),
    )
    .unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].get("diff"), None);
}
