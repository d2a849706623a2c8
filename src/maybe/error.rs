use std::fmt;

/// Error returned when the payload of a `Maybe::Nothing` is requested.
///
/// This error is returned by [`Maybe::try_unwrap`](super::Maybe::try_unwrap).
///
/// Note: [`Maybe::force_unwrap`](super::Maybe::force_unwrap) panics with this error's
/// message instead of returning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyValueAccess;

impl fmt::Display for EmptyValueAccess {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Maybe: attempted to extract a value from Nothing")
    }
}

impl std::error::Error for EmptyValueAccess {}
