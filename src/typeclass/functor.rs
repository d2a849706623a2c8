//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value while preserving the structure.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! For types that are also a [`Monad`](super::Monad), `fmap` must agree with
//! the monad structure:
//!
//! ```text
//! fa.fmap(f) == fa.bind(|x| Self::wrap(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::maybe::Maybe;
//! use monadic::typeclass::Functor;
//!
//! let just_value = Maybe::Just(5);
//! let transformed: Maybe<String> = just_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::Just("5".to_string()));
//!
//! // Nothing is preserved
//! let nothing: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(nothing.fmap(|n| n.to_string()), Maybe::Nothing);
//! ```

use super::higher::TypeConstructor;
use crate::maybe::Maybe;

/// A type class for types that can have a function mapped over their contents.
///
/// The function is applied to the payload, if any, and the result is
/// rewrapped in the same container family. An empty container stays empty
/// and the function is not called.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor of the same family with the transformed value
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor must stay available afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::maybe::Maybe;
    /// use monadic::typeclass::Functor;
    ///
    /// let x = Maybe::Just("hello".to_string());
    /// let y: Maybe<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Maybe::Just(5));
    /// assert_eq!(x, Maybe::Just("hello".to_string()));
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::maybe::Maybe;
    /// use monadic::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Just(5).replace("replaced"), Maybe::Just("replaced"));
    /// assert_eq!(Maybe::<i32>::Nothing.replace("replaced"), Maybe::Nothing);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).void(), Some(()));
    /// assert_eq!(None::<i32>.void(), None);
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}
