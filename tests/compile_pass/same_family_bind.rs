//! `bind` accepts a function returning the same family.

use monadic::prelude::*;

fn main() {
    let bound: Maybe<bool> = Maybe::wrap(5).bind(|_| Maybe::wrap(true));
    let standard: Option<bool> = Option::wrap(5).bind(|_| Option::wrap(true));

    assert_eq!(bound, Maybe::Just(true));
    assert_eq!(standard, Some(true));
}
