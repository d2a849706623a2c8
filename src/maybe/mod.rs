//! Maybe type - a container holding zero or one value.
//!
//! This module provides the `Maybe<T>` type, which is either `Nothing` or
//! `Just(T)`. It is the library's own optional-value family, distinct from
//! the standard `Option<T>`: both implement [`Functor`](crate::typeclass::Functor)
//! and [`Monad`](crate::typeclass::Monad), but a computation cannot switch
//! from one family to the other through `bind` or `then`.
//!
//! Instances are immutable. Every transformation consumes the receiver (or
//! borrows it) and produces a new `Maybe`.
//!
//! # Examples
//!
//! ```rust
//! use monadic::maybe::Maybe;
//!
//! let present: Maybe<i32> = Maybe::Just(5);
//! let absent: Maybe<i32> = Maybe::Nothing;
//!
//! assert_eq!(present.map(|x| x + 1), Maybe::Just(6));
//! assert_eq!(absent.map(|x| x + 1), Maybe::Nothing);
//!
//! // `>>` sequences two values of the same family, keeping the second
//! assert_eq!(Maybe::Just(5) >> Maybe::Just(true), Maybe::Just(true));
//! assert_eq!(Maybe::<i32>::Nothing >> Maybe::Just(true), Maybe::Nothing);
//! ```

mod error;

pub use error::EmptyValueAccess;

use std::fmt;
use std::ops::Shr;

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// Exactly one variant is active at any time.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use monadic::maybe::Maybe;
///
/// let value = Maybe::Just(7)
///     .map(|x| x + 1)
///     .map(|x| x == 8);
/// assert_eq!(value, Maybe::Just(true));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// The absent variant. Carries no payload.
    #[default]
    Nothing,
    /// The present variant. Carries exactly one value.
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Variant Checks
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::maybe::Maybe;
    ///
    /// assert!(Maybe::Just(1).is_just());
    /// assert!(!Maybe::<i32>::Nothing.is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::maybe::Maybe;
    ///
    /// assert!(Maybe::<i32>::Nothing.is_nothing());
    /// assert!(!Maybe::Just(1).is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value, or [`EmptyValueAccess`] for `Nothing`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyValueAccess` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::maybe::{EmptyValueAccess, Maybe};
    ///
    /// assert_eq!(Maybe::Just(5).try_unwrap(), Ok(5));
    /// assert_eq!(Maybe::<i32>::Nothing.try_unwrap(), Err(EmptyValueAccess));
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, EmptyValueAccess> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(EmptyValueAccess),
        }
    }

    /// Returns the contained value, panicking on `Nothing`.
    ///
    /// This is the unchecked escape hatch of the type and is not part of the
    /// Functor or Monad interface. Prefer [`try_unwrap`](Self::try_unwrap),
    /// [`unwrap_or`](Self::unwrap_or) or pattern matching.
    ///
    /// # Panics
    ///
    /// Panics with the [`EmptyValueAccess`] message if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(5).force_unwrap(), 5);
    /// ```
    ///
    /// ```rust,should_panic
    /// use monadic::maybe::Maybe;
    ///
    /// let _ = Maybe::<i32>::Nothing.force_unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn force_unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the contained value or the given default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(5).unwrap_or(0), 5);
    /// assert_eq!(Maybe::Nothing.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value or computes one from a closure.
    ///
    /// The closure is only called for `Nothing`.
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default(),
        }
    }

    /// Folds the `Maybe` into a single value.
    ///
    /// Applies `function` to a `Just` payload, otherwise returns `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(3).maybe(0, |x| x * 2), 6);
    /// assert_eq!(Maybe::<i32>::Nothing.maybe(0, |x| x * 2), 0);
    /// ```
    #[inline]
    pub fn maybe<B, F>(self, default: B, function: F) -> B
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => default,
        }
    }

    /// Converts into an `Option<T>`, consuming the `Maybe`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Maps a `Maybe<T>` to `Maybe<U>` by applying a function to a `Just` payload.
    ///
    /// `function` is never called on `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(5).map(|x| x.to_string()), Maybe::Just("5".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns `Nothing` for `Nothing`, otherwise calls `function` with the payload.
    ///
    /// This is the bind operation of the `Maybe` monad.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::maybe::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::Just(x / 2) } else { Maybe::Nothing };
    /// assert_eq!(Maybe::Just(8).and_then(half).and_then(half), Maybe::Just(2));
    /// assert_eq!(Maybe::Just(6).and_then(half).and_then(half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(Maybe::Just(1)).flatten(), Maybe::Just(1));
    /// assert_eq!(Maybe::Just(Maybe::<i32>::Nothing).flatten(), Maybe::Nothing);
    /// assert_eq!(Maybe::<Maybe<i32>>::Nothing.flatten(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.and_then(|inner| inner)
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// Sequencing Operator
// =============================================================================

impl<A, B> Shr<Maybe<B>> for Maybe<A> {
    type Output = Maybe<B>;

    /// Sequences two `Maybe` values, discarding the payload of the first.
    ///
    /// `Nothing >> next` is `Nothing`; `Just(_) >> next` is `next`.
    #[inline]
    fn shr(self, next: Maybe<B>) -> Maybe<B> {
        self.and_then(|_| next)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// `Some(x)` becomes `Just(x)`, and `None` becomes `Nothing`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// `Just(x)` becomes `Some(x)`, and `Nothing` becomes `None`.
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Copy, Send, Sync, Default);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);
