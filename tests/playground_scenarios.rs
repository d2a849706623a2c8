#![cfg(feature = "typeclass")]
//! Scenario tests for sequencing and mapping over `Maybe`.
//!
//! Each case builds a small chain with `wrap`, `bind`, `then` (or `>>`) and
//! `fmap`, then extracts the result.

use monadic::prelude::*;
use rstest::rstest;

// =============================================================================
// Keeping the payload type
// =============================================================================

#[rstest]
fn then_keeps_second_value() {
    let example = Maybe::wrap(5) >> Maybe::wrap(6);
    assert_eq!(example, Maybe::Just(6));
    assert_eq!(example.force_unwrap(), 6);
}

#[rstest]
fn bind_increments_value() {
    let example = Maybe::wrap(5).bind(|x| Maybe::wrap(x + 1));
    assert_eq!(example, Maybe::Just(6));
    assert_eq!(example.force_unwrap(), 6);
}

// =============================================================================
// Changing the payload type
// =============================================================================

#[rstest]
fn then_changes_payload_type() {
    let example = Maybe::wrap(5) >> Maybe::wrap(true);
    assert_eq!(example, Maybe::Just(true));
    assert!(example.force_unwrap());
}

#[rstest]
fn bind_changes_payload_type() {
    let example = Maybe::wrap(5).bind(|_| Maybe::wrap(true));
    assert_eq!(example, Maybe::Just(true));
    assert!(example.force_unwrap());
}

#[rstest]
fn fmap_chain_changes_payload_type() {
    let example = Maybe::wrap(7).fmap(|x| x + 1).fmap(|x| x == 8);
    assert_eq!(example, Maybe::Just(true));
}

// =============================================================================
// Free-function forms
// =============================================================================

#[rstest]
#[case(Maybe::wrap(5), Maybe::wrap(6), Maybe::Just(6))]
#[case(Maybe::Nothing, Maybe::wrap(6), Maybe::Nothing)]
#[case(Maybe::wrap(5), Maybe::Nothing, Maybe::Nothing)]
fn free_then(#[case] lhs: Maybe<i32>, #[case] rhs: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(then(lhs, rhs), expected);
}

#[rstest]
#[case(Maybe::wrap(5), Maybe::Just(6))]
#[case(Maybe::Nothing, Maybe::Nothing)]
fn free_bind(#[case] lhs: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(bind(lhs, |x| Maybe::wrap(x + 1)), expected);
}

// =============================================================================
// The same chains over Option
// =============================================================================

#[rstest]
fn option_family_supports_the_same_chains() {
    assert_eq!(Option::wrap(5).then(Option::wrap(6)), Some(6));
    assert_eq!(Option::wrap(5).bind(|x| Option::wrap(x + 1)), Some(6));
    assert_eq!(Option::wrap(5).then(Option::wrap(true)), Some(true));
    assert_eq!(Option::wrap(7).fmap(|x| x + 1).fmap(|x| x == 8), Some(true));
}

#[rstest]
fn crossing_families_requires_explicit_conversion() {
    let from_option: Maybe<i32> = Option::wrap(5).into();
    let example = Maybe::wrap(1) >> from_option;
    assert_eq!(example.into_option(), Some(5));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
#[should_panic(expected = "attempted to extract a value from Nothing")]
fn force_unwrap_on_short_circuited_chain_panics() {
    let example = Maybe::<i32>::Nothing.bind(|x| Maybe::wrap(x + 1));
    let _ = example.force_unwrap();
}

#[rstest]
fn try_unwrap_on_short_circuited_chain_errors() {
    let example = Maybe::wrap(5).then(Maybe::<bool>::Nothing);
    assert_eq!(example.try_unwrap(), Err(EmptyValueAccess));
}
