//! Ordered sets and the capability trait they are compared through.
//!
//! This module provides:
//!
//! - [`LinkedSet`]: ordered, duplicate-free set stored as a doubly-linked
//!   list of arena nodes
//! - [`SetLike`]: the minimal read-only capability a foreign container must
//!   expose to take part in [`LinkedSet`]'s generic set algebra
//! - [`SetCursor`]: checked cursor access to the set iterators
//!
//! # Same-type and generic operands
//!
//! [`LinkedSet::union`], [`LinkedSet::intersection`] and
//! [`LinkedSet::complement`] take another `LinkedSet` and walk both ascending
//! chains in lock step. The `*_with` variants accept any [`SetLike`]
//! container and only ever call its `len`, `is_empty`, `contains` and
//! `elements` methods.
//!
//! # Examples
//!
//! ```rust
//! use linkset::set::{LinkedSet, SetLike};
//! use std::collections::BTreeSet;
//!
//! let set: LinkedSet<i32> = [1, 2, 3, 4].into_iter().collect();
//! let other: BTreeSet<i32> = [3, 4, 5].into_iter().collect();
//!
//! let union = set.union_with(&other);
//! assert_eq!(union.to_string(), "[1, 2, 3, 4, 5]");
//!
//! let intersection = set.intersection_with(&other);
//! assert_eq!(intersection.to_string(), "[3, 4]");
//!
//! let complement = set.complement_with(&other);
//! assert_eq!(complement.to_string(), "[1, 2]");
//!
//! assert!(SetLike::contains(&union, &5));
//! ```

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

mod arena;
mod cursor;
mod iter;
mod linked_set;

pub use cursor::SetCursor;
pub use iter::DescendingIter;
pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::PowerSetIter;
pub use linked_set::LinkedSet;

/// Read-only set capability used by the generic set-algebra operations.
///
/// Implementors must be duplicate-free: `elements` yields each member exactly
/// once and `len` equals the number of members. No ordering is assumed.
pub trait SetLike<T> {
    /// Iterator over references to the members.
    type Elements<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of members.
    fn len(&self) -> usize;

    /// Returns `true` if the set has no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `element` is a member.
    fn contains(&self, element: &T) -> bool;

    /// Returns an iterator over the members.
    fn elements(&self) -> Self::Elements<'_>;
}

impl<T: Ord> SetLike<T> for BTreeSet<T> {
    type Elements<'a>
        = std::collections::btree_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }
}

impl<T: Hash + Eq, S: BuildHasher> SetLike<T> for HashSet<T, S> {
    type Elements<'a>
        = std::collections::hash_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn describe<S: SetLike<i32>>(set: &S) -> (usize, bool, bool) {
        (set.len(), set.is_empty(), set.contains(&2))
    }

    #[rstest]
    fn test_std_sets_expose_capability() {
        let btree: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
        let hash: HashSet<i32> = [1, 2, 3].into_iter().collect();
        let linked: LinkedSet<i32> = [1, 2, 3].into_iter().collect();

        assert_eq!(describe(&btree), (3, false, true));
        assert_eq!(describe(&hash), (3, false, true));
        assert_eq!(describe(&linked), (3, false, true));
    }

    #[rstest]
    fn test_empty_std_sets() {
        assert_eq!(describe(&BTreeSet::<i32>::new()), (0, true, false));
        assert_eq!(describe(&HashSet::<i32>::new()), (0, true, false));
        assert_eq!(describe(&LinkedSet::<i32>::new()), (0, true, false));
    }

    #[rstest]
    fn test_elements_of_linked_set_are_ascending() {
        let linked: LinkedSet<i32> = [3, 1, 2].into_iter().collect();
        let elements: Vec<&i32> = SetLike::elements(&linked).collect();
        assert_eq!(elements, vec![&1, &2, &3]);
    }
}
