//! # monadic
//!
//! Monad and Functor type classes for Rust, together with a `Maybe`
//! container that implements them.
//!
//! ## Overview
//!
//! - **Type Classes**: [`TypeConstructor`](typeclass::TypeConstructor),
//!   [`Functor`](typeclass::Functor) and [`Monad`](typeclass::Monad),
//!   implemented for [`Maybe`](maybe::Maybe) and the standard `Option`
//! - **Maybe**: an optional-value enumeration with `Nothing` and `Just`
//!
//! Sequencing only works inside one container family. A `Maybe` computation
//! cannot bind into an `Option` computation; the compiler rejects it.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad) and their instances
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! let example1 = Maybe::wrap(5) >> Maybe::wrap(6);
//! let example2 = Maybe::wrap(5).bind(|x| Maybe::wrap(x + 1));
//! let example3 = Maybe::wrap(5).then(Maybe::wrap(true));
//!
//! assert_eq!(example1.force_unwrap(), 6);
//! assert_eq!(example2.force_unwrap(), 6);
//! assert!(example3.force_unwrap());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    pub use crate::maybe::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub mod maybe;
