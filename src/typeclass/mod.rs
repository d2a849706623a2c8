//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Monad`]: Sequencing computations with dependency
//! - [`bind`], [`then`]: Free-function forms of `>>=` and `>>`
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! which is what lets `Functor` and `Monad` be written once for every
//! container family.
//!
//! ## Instances
//!
//! Both traits are implemented for [`Maybe`](crate::maybe::Maybe) and for
//! the standard `Option`.
//!
//! # Examples
//!
//! ```rust
//! use monadic::maybe::Maybe;
//! use monadic::typeclass::{Functor, Monad};
//!
//! let example = Maybe::wrap(7).fmap(|x| x + 1).fmap(|x| x == 8);
//! assert_eq!(example, Maybe::Just(true));
//!
//! let same_shape = Some(7).fmap(|x| x + 1).bind(|x| Option::wrap(x == 8));
//! assert_eq!(same_shape, Some(true));
//! ```

mod functor;
mod higher;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::{Monad, bind, then};
