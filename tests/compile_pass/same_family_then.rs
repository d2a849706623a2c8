//! `then` and `>>` accept a second value of the same family.

use monadic::prelude::*;

fn main() {
    let sequenced: Maybe<i32> = Maybe::wrap(5).then(Maybe::wrap(5));
    let operator: Maybe<bool> = Maybe::wrap(5) >> Maybe::wrap(true);
    let standard: Option<i32> = Option::wrap(5).then(Option::wrap(5));

    assert_eq!(sequenced, Maybe::Just(5));
    assert_eq!(operator, Maybe::Just(true));
    assert_eq!(standard, Some(5));
}
