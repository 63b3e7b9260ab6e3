#![cfg(feature = "serde")]

//! Integration tests for serde support in chainable.
//!
//! These tests verify that `Chainable` and `Path` serialize with lowercase
//! tags and round-trip through JSON.

use chainable::control::{Chainable, Path};
use rstest::rstest;

// =============================================================================
// Chainable Integration Tests
// =============================================================================

#[rstest]
#[case(Chainable::left(1), r#"{"left":1}"#)]
#[case(Chainable::right(2), r#"{"right":2}"#)]
#[case(Chainable::ok(3), r#"{"ok":3}"#)]
#[case(Chainable::error("boom".to_string()), r#"{"error":"boom"}"#)]
#[case(Chainable::nothing(), r#""nothing""#)]
fn test_chainable_json_format(#[case] chainable: Chainable<i32, String>, #[case] expected: &str) {
    let json = serde_json::to_string(&chainable).unwrap();
    assert_eq!(json, expected);
}

#[rstest]
fn test_chainable_json_roundtrip() {
    let values: Vec<Chainable<Vec<i32>, String>> = vec![
        Chainable::left(vec![1, 2]),
        Chainable::right(vec![]),
        Chainable::ok(vec![3]),
        Chainable::error("bad input".to_string()),
        Chainable::nothing(),
    ];

    let json = serde_json::to_string(&values).unwrap();
    let restored: Vec<Chainable<Vec<i32>, String>> = serde_json::from_str(&json).unwrap();

    assert_eq!(values, restored);
}

#[rstest]
fn test_chainable_rejects_unknown_tag() {
    let result: Result<Chainable<i32, String>, _> = serde_json::from_str(r#"{"maybe":1}"#);
    assert!(result.is_err());
}

// =============================================================================
// Path Integration Tests
// =============================================================================

#[rstest]
fn test_path_json_roundtrip() {
    let json = serde_json::to_string(&Path::ALL).unwrap();
    assert_eq!(json, r#"["left","right","ok","error","nothing"]"#);

    let restored: [Path; 5] = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, Path::ALL);
}
