//! The free `then` keeps the family of its first argument.

use monadic::prelude::*;

fn main() {
    let standard: Option<i32> = then(Option::wrap(5), Option::wrap(6));
    let maybe: Maybe<i32> = then(Maybe::wrap(5), Maybe::wrap(6));
    let crossed: Maybe<i32> = then(Maybe::wrap(5), Maybe::from(Option::wrap(6)));

    assert_eq!(standard, Some(6));
    assert_eq!(maybe, Maybe::Just(6));
    assert_eq!(crossed, Maybe::Just(6));
}
