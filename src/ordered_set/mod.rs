//! Ordered set module.
//!
//! ## Architecture
//!
//! The set couples two structures that always agree:
//!
//! - **Slab-backed doubly-linked list**: values in insertion order
//! - **Value index**: `HashMap` from value to the node's slab key
//!
//! ## Components
//!
//! - [`OrderedSet`]: The container
//! - [`Iter`] / [`IntoIter`]: Front-to-back (and back-to-front) traversal
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push_front` / `push_back` | O(1)* |
//! | `pop` by value | O(1) |
//! | `pop_front` / `pop_back` | O(1) |
//! | `contains` | O(1) |
//! | `front` / `back` / `len` | O(1) |
//! | `clear`, `to_vec`, `to_map`, `clone` | O(n) |
//!
//! *Amortized; pre-size with `with_capacity` to avoid growth.
//!
//! ## Example
//!
//! ```
//! use ordered_set_slab::OrderedSet;
//!
//! let mut set = OrderedSet::new();
//! set.push_back("a");
//! set.push_back("b");
//! set.push_back("c");
//! assert_eq!(set.to_vec(), vec!["a", "b", "c"]);
//!
//! assert_eq!(set.pop("a"), Some("a"));
//! set.push_front("z");
//! assert_eq!(set.to_vec(), vec!["z", "b", "c"]);
//!
//! assert_eq!(set.pop_back(), Some("c"));
//! assert_eq!(set.len(), 2);
//! ```

mod iter;
mod links;
mod node;
mod set;

pub use iter::{IntoIter, Iter};
pub use set::OrderedSet;
