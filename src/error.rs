//! Error type for ordered set operations.
//!
//! Only one thing can go wrong: handing an absent value to one of the
//! `try_*` insertion methods. Duplicate inserts, removing a non-member and
//! popping an empty set are ordinary outcomes reported through `bool` and
//! `Option` return values.

use thiserror::Error;

/// Errors returned by [`OrderedSet`](crate::OrderedSet).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderedSetError {
    /// An absent value (`None`) was offered for insertion.
    #[error("invalid value: an absent value cannot be stored in an ordered set")]
    InvalidValue,
}

/// Result alias used by the fallible insertion paths.
pub type Result<T> = std::result::Result<T, OrderedSetError>;
