//! Invariants of generated contexts over arbitrary lists.

use juxta_assert::{ContextConfig, MessageSection, Value, build_context};
use proptest::prelude::*;

fn items() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..4, 0..8)
}

fn names(sections: &[MessageSection]) -> Vec<String> {
    sections
        .iter()
        .flat_map(MessageSection::rows)
        .map(|(name, _)| name.clone())
        .collect()
}

proptest! {
    #[test]
    fn identical_lists_show_no_markers(list in items()) {
        let value = Value::list_of(list);
        let sections = build_context(
            "actual",
            Some(&value),
            "expected",
            Some(&value),
            &ContextConfig::new(),
        )
        .unwrap();
        prop_assert!(!names(&sections).iter().any(|name| name == "diff"));
    }

    #[test]
    fn every_row_names_a_side(actual in items(), expected in items()) {
        let sections = build_context(
            "actual",
            Some(&Value::list_of(actual)),
            "expected",
            Some(&Value::list_of(expected)),
            &ContextConfig::new().allow_legend(false),
        )
        .unwrap();
        for name in names(&sections) {
            prop_assert!(
                name == "diff" || name.starts_with("actual") || name.starts_with("expected"),
                "unexpected row {name}"
            );
        }
        for pair in sections.windows(2) {
            prop_assert!(!matches!(
                pair,
                [MessageSection::Context(_), MessageSection::Context(_)]
            ));
        }
    }
}
