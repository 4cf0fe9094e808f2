//! Checked cursor access to set iterators.
//!
//! [`Iterator::next`] reports the end of a traversal with `None`. Callers
//! that treat running past the end as a failure can use
//! [`SetCursor::try_next`] instead, which reports it as
//! [`IterationError::Exhausted`]. Set iterators are read-only, so
//! [`SetCursor::remove`] always fails with
//! [`IterationError::UnsupportedOperation`].

use crate::error::IterationError;

/// An iterator over a set that exposes checked, cursor-style access.
///
/// # Examples
///
/// ```rust
/// use linkset::error::IterationError;
/// use linkset::set::{LinkedSet, SetCursor};
///
/// let set: LinkedSet<i32> = [1].into_iter().collect();
/// let mut cursor = set.iter();
///
/// assert!(cursor.has_next());
/// assert_eq!(cursor.try_next(), Ok(&1));
/// assert!(!cursor.has_next());
/// assert_eq!(cursor.try_next(), Err(IterationError::Exhausted));
/// assert_eq!(
///     cursor.remove(),
///     Err(IterationError::UnsupportedOperation { operation: "remove" })
/// );
/// ```
pub trait SetCursor: Iterator {
    /// Returns `true` if another element is available.
    fn has_next(&self) -> bool;

    /// Returns the next element, or [`IterationError::Exhausted`] when the
    /// cursor has already yielded every element.
    ///
    /// # Errors
    ///
    /// Returns [`IterationError::Exhausted`] past the last element.
    fn try_next(&mut self) -> Result<Self::Item, IterationError> {
        self.next().ok_or(IterationError::Exhausted)
    }

    /// Removing through a cursor is not supported. The underlying set is
    /// never modified.
    ///
    /// # Errors
    ///
    /// Always returns [`IterationError::UnsupportedOperation`].
    fn remove(&mut self) -> Result<(), IterationError> {
        Err(IterationError::UnsupportedOperation {
            operation: "remove",
        })
    }
}
