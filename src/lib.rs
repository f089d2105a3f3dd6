//! # ordered-set-slab
//!
//! An insertion-ordered set of unique values.
//!
//! ## Architecture
//!
//! - **OrderedSet**: doubly-linked list of slab nodes plus a value index
//! - **Error**: the single `InvalidValue` failure of the `try_*` inserts
//!
//! ## Design Principles
//!
//! 1. **Uniqueness**: A value is stored at most once; re-inserting is a no-op
//! 2. **Insertion Order**: Iteration always runs in the order values were linked
//! 3. **O(1) Mutation**: Either end, or any known value, in constant time
//! 4. **Handles, Not Pointers**: Links are slab keys, so there is no unsafe code
//!
//! ## Threading
//!
//! The set has no internal synchronization. Share it across threads behind
//! an exclusive lock.

// ============================================================================
// Module declarations
// ============================================================================

/// Error type for the fallible insertion paths
pub mod error;

/// The ordered set and its iterators
pub mod ordered_set;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{OrderedSetError, Result};
pub use ordered_set::{IntoIter, Iter, OrderedSet};
