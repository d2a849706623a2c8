//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Functor` with
//! `wrap` (lifting a plain value) and `bind` (sequencing a computation that
//! depends on the previous result).
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::wrap(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.bind(Self::wrap) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! # Staying in one family
//!
//! The function given to `bind` must return `Self::WithType<B>`, and `then`
//! only accepts `Self::WithType<B>`. A `Maybe` chain therefore cannot
//! continue with an `Option`, and the mistake is caught at compile time:
//!
//! ```rust,compile_fail,E0308
//! use monadic::prelude::*;
//!
//! let mixed = Maybe::wrap(5).then(Option::wrap(5));
//! ```
//!
//! ```rust,compile_fail,E0308
//! use monadic::prelude::*;
//!
//! let mixed = Maybe::wrap(5).bind(|_| Option::wrap(true));
//! ```
//!
//! ```rust,compile_fail,E0308
//! use monadic::prelude::*;
//!
//! let mixed = then(Option::wrap(5), Maybe::wrap(6));
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::maybe::Maybe;
//! use monadic::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     text.parse::<i32>().ok().filter(|&n| n > 0).into()
//! }
//!
//! let result = Maybe::wrap("42")
//!     .bind(parse_positive)
//!     .bind(|n| Maybe::wrap(n * 2));
//! assert_eq!(result, Maybe::Just(84));
//!
//! let rejected = Maybe::wrap("-1").bind(parse_positive);
//! assert_eq!(rejected, Maybe::Nothing);
//! ```

use super::functor::Functor;
use crate::maybe::Maybe;

/// A type class for types that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use monadic::maybe::Maybe;
/// use monadic::typeclass::Monad;
///
/// let x = Maybe::wrap(5);
/// assert_eq!(x.bind(|n| Maybe::wrap(n + 1)), Maybe::Just(6));
///
/// let y: Maybe<i32> = Maybe::Nothing;
/// assert_eq!(y.bind(|n| Maybe::wrap(n + 1)), Maybe::Nothing);
/// ```
pub trait Monad: Functor {
    /// Lifts a plain value into the monad.
    ///
    /// Always produces the "present" variant. This never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::maybe::Maybe;
    /// use monadic::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::wrap(5), Maybe::Just(5));
    /// assert_eq!(Option::wrap(5), Some(5));
    /// ```
    fn wrap(value: Self::Inner) -> Self
    where
        Self: Sized;

    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// An empty monad is returned as is and `function` is not called.
    /// In Haskell, this is `>>=`.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a monad
    ///   of the same family
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `bind`.
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.bind(function)
    }

    /// Alias for `bind`, matching `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.bind(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// In Haskell, this is the `>>` operator. An empty `self` still
    /// short-circuits, so `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::maybe::Maybe;
    /// use monadic::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::wrap(5).then(Maybe::wrap(true)), Maybe::Just(true));
    /// assert_eq!(Maybe::<i32>::Nothing.then(Maybe::wrap(true)), Maybe::Nothing);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.bind(|_| next)
    }
}

/// Sequences `lhs` into `function`. The free-function form of `>>=`.
///
/// # Examples
///
/// ```rust
/// use monadic::maybe::Maybe;
/// use monadic::typeclass::{Monad, bind};
///
/// assert_eq!(bind(Maybe::wrap(5), |x| Maybe::wrap(x + 1)), Maybe::Just(6));
/// ```
#[inline]
pub fn bind<MA, B, F>(lhs: MA, function: F) -> MA::WithType<B>
where
    MA: Monad,
    F: FnOnce(MA::Inner) -> MA::WithType<B>,
{
    lhs.bind(function)
}

/// Sequences `lhs` and `rhs`, keeping `rhs`. The free-function form of `>>`.
///
/// # Examples
///
/// ```rust
/// use monadic::maybe::Maybe;
/// use monadic::typeclass::{Monad, then};
///
/// assert_eq!(then(Maybe::wrap(5), Maybe::wrap(6)), Maybe::Just(6));
/// ```
#[inline]
pub fn then<MA, B>(lhs: MA, rhs: MA::WithType<B>) -> MA::WithType<B>
where
    MA: Monad,
{
    lhs.then(rhs)
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Monad for Maybe<A> {
    #[inline]
    fn wrap(value: A) -> Self {
        Self::Just(value)
    }

    #[inline]
    fn bind<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn wrap(value: A) -> Self {
        Some(value)
    }

    #[inline]
    fn bind<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}
