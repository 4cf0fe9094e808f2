//! # linkset
//!
//! An ordered, duplicate-free set backed by a doubly-linked list.
//!
//! ## Overview
//!
//! [`LinkedSet`](set::LinkedSet) keeps its elements in strictly ascending
//! order along a chain of nodes linked in both directions. It offers:
//!
//! - **Mutation and queries**: `insert`, `remove`, `contains`, `len`,
//!   `is_empty`, `first`, `last`, `pop_first`, `pop_last`
//! - **Set algebra**: union, intersection, complement and equality, both
//!   against another `LinkedSet` and against any [`SetLike`](set::SetLike)
//!   container (including `BTreeSet` and `HashSet`)
//! - **Iteration**: ascending, descending, and power-set enumeration
//! - **Checked cursors**: [`SetCursor`](set::SetCursor) reports running past
//!   the end and unsupported removal as [`IterationError`](error::IterationError)
//!
//! Nodes live in a per-set arena and link to each other by index, so derived
//! sets never share nodes with their operands.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `LinkedSet`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use linkset::prelude::*;
//!
//! let mut set = LinkedSet::new();
//! for element in [4, 1, 5, 3, 1, 2, 2, 3] {
//!     set.insert(element);
//! }
//! assert_eq!(set.len(), 5);
//! assert_eq!(set.to_string(), "[1, 2, 3, 4, 5]");
//!
//! let subsets = set.power_set().count();
//! assert_eq!(subsets, 32);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the set types, the capability and cursor traits, and the
/// error type.
///
/// # Usage
///
/// ```rust
/// use linkset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::set::*;
}

pub mod error;
pub mod set;
