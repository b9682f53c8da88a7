//! Integration tests for the grammar helpers

use proptest::prelude::*;
use soul_foundation::grammar::{capitalize, is_terminated, join, ordinal, possessive};

#[test]
fn joining_lists() {
    assert_eq!(join(&["wave"], "and"), "wave");
    assert_eq!(join(&["bob", "carol"], "and"), "bob and carol");
    assert_eq!(
        join(&["waves happily", "bows", "smiles"], "and"),
        "waves happily, bows and smiles"
    );
}

#[test]
fn possessives() {
    assert_eq!(possessive("Bob"), "Bob's");
    assert_eq!(possessive("James"), "James'");
}

#[test]
fn ordinals() {
    assert_eq!(ordinal(1), "first");
    assert_eq!(ordinal(12), "twelfth");
    assert_eq!(ordinal(13), "13th");
    assert_eq!(ordinal(21), "21st");
    assert_eq!(ordinal(22), "22nd");
    assert_eq!(ordinal(111), "111th");
}

#[test]
fn capitals_and_terminators() {
    assert_eq!(capitalize("alice"), "Alice");
    assert_eq!(capitalize(""), "");
    assert!(is_terminated("la la la!"));
    assert!(is_terminated("really?"));
    assert!(!is_terminated("smiles"));
}

proptest! {
    #[test]
    fn join_keeps_every_item(items in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let joined = join(&items, "and");
        for item in &items {
            prop_assert!(joined.contains(item.as_str()));
        }
        prop_assert_eq!(joined.matches(", ").count(), items.len().saturating_sub(2));
    }
}
