#![cfg(feature = "serde")]

//! Integration tests for serde support of `Maybe`.

use monadic::maybe::Maybe;
use rstest::rstest;

#[rstest]
fn test_maybe_json_roundtrip() {
    let just: Maybe<i32> = Maybe::Just(42);
    let nothing: Maybe<i32> = Maybe::Nothing;

    let just_json = serde_json::to_string(&just).unwrap();
    let nothing_json = serde_json::to_string(&nothing).unwrap();

    let restored_just: Maybe<i32> = serde_json::from_str(&just_json).unwrap();
    let restored_nothing: Maybe<i32> = serde_json::from_str(&nothing_json).unwrap();

    assert_eq!(just, restored_just);
    assert_eq!(nothing, restored_nothing);
}

#[rstest]
fn test_maybe_json_shape() {
    assert_eq!(serde_json::to_string(&Maybe::Just("a")).unwrap(), r#"{"Just":"a"}"#);
    assert_eq!(serde_json::to_string(&Maybe::<i32>::Nothing).unwrap(), r#""Nothing""#);
}

#[rstest]
fn test_nested_maybe_roundtrip() {
    let nested: Maybe<Maybe<String>> = Maybe::Just(Maybe::Just("inner".to_string()));
    let json = serde_json::to_string(&nested).unwrap();
    let restored: Maybe<Maybe<String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, nested);
}
