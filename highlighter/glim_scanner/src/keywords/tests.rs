use super::*;
use pretty_assertions::assert_eq;

#[test]
fn matching_ignores_ascii_case() {
    let set = KeywordSet::new(["function"]);
    assert!(set.contains("function"));
    assert!(set.contains("FUNCTION"));
    assert!(set.contains("Function"));
    assert!(set.contains("fUnCtIoN"));
}

#[test]
fn keywords_stored_in_any_case() {
    let set = KeywordSet::new(["Return", "IF"]);
    assert!(set.contains("return"));
    assert!(set.contains("if"));
    assert!(set.contains("If"));
}

#[test]
fn whole_token_only() {
    let set = KeywordSet::new(["function"]);
    assert!(!set.contains("functional"));
    assert!(!set.contains("func"));
    assert!(!set.contains("function2"));
}

#[test]
fn empty_set_matches_nothing() {
    let set = KeywordSet::default();
    assert!(set.is_empty());
    assert!(!set.contains("anything"));
    assert!(!set.contains(""));
}

#[test]
fn empty_entries_are_dropped() {
    let set = KeywordSet::new(["", "let"]);
    assert_eq!(set.len(), 1);
    assert!(set.contains("let"));
    assert!(!set.contains(""));
}

#[test]
fn duplicate_entries_collapse() {
    let set = KeywordSet::new(["let", "LET", "Let"]);
    assert_eq!(set.len(), 1);
}

#[test]
fn length_fast_reject() {
    let set = KeywordSet::new(["if", "do"]);
    // Longer than every keyword: rejected before hashing.
    assert!(!set.contains("iffy"));
    assert!(set.contains("IF"));
}

#[test]
fn dollar_and_underscore_keywords() {
    let set = KeywordSet::new(["$scope", "_init"]);
    assert!(set.contains("$SCOPE"));
    assert!(set.contains("_Init"));
}
