//! Iterators over a [`LinkedSet`].
//!
//! - [`Iter`]: ascending traversal along `next` links (double-ended)
//! - [`DescendingIter`]: descending traversal along `prev` links
//! - [`IntoIter`]: owning ascending traversal
//! - [`PowerSetIter`]: every subset, by binary enumeration

use super::arena::{Arena, NodeIndex};
use super::cursor::SetCursor;
use super::linked_set::LinkedSet;
use smallvec::SmallVec;
use std::iter::FusedIterator;

// =============================================================================
// Iter
// =============================================================================

/// An iterator over references to the elements of a [`LinkedSet`] in
/// ascending order.
///
/// Iterating from the back follows `prev` links from the rear. The two ends
/// never cross: the iterator is exhausted once it has yielded `len` elements.
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    front: Option<NodeIndex>,
    back: Option<NodeIndex>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(super) const fn new(
        arena: &'a Arena<T>,
        front: Option<NodeIndex>,
        back: Option<NodeIndex>,
        remaining: usize,
    ) -> Self {
        Self {
            arena,
            front,
            back,
            remaining,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> SetCursor for Iter<'_, T> {
    #[inline]
    fn has_next(&self) -> bool {
        self.remaining > 0
    }
}

// =============================================================================
// DescendingIter
// =============================================================================

/// An iterator over references to the elements of a [`LinkedSet`] in
/// descending order, starting at the rear.
pub struct DescendingIter<'a, T> {
    inner: Iter<'a, T>,
}

impl<'a, T> DescendingIter<'a, T> {
    #[inline]
    pub(super) const fn new(inner: Iter<'a, T>) -> Self {
        Self { inner }
    }
}

impl<T> Clone for DescendingIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for DescendingIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for DescendingIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T> ExactSizeIterator for DescendingIter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for DescendingIter<'_, T> {}

impl<T> SetCursor for DescendingIter<'_, T> {
    #[inline]
    fn has_next(&self) -> bool {
        self.inner.has_next()
    }
}

// =============================================================================
// IntoIter
// =============================================================================

/// An owning iterator over the elements of a [`LinkedSet`] in ascending
/// order.
pub struct IntoIter<T> {
    set: LinkedSet<T>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(super) const fn new(set: LinkedSet<T>) -> Self {
        Self { set }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.set.pop_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.set.len(), Some(self.set.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.set.pop_last()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.set.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> SetCursor for IntoIter<T> {
    #[inline]
    fn has_next(&self) -> bool {
        !self.set.is_empty()
    }
}

// =============================================================================
// PowerSetIter
// =============================================================================

const WORD_BITS: usize = u64::BITS as usize;

/// An iterator over every subset of a [`LinkedSet`].
///
/// The iterator holds the set's elements in ascending order and a binary
/// counter one bit wider than the element count. Each step materializes the
/// subset selected by the counter's low bits and then increments it; the
/// iterator is exhausted once the extra high bit becomes set, after exactly
/// `2^n` subsets.
///
/// The counter is stored inline for sets of up to 63 elements.
pub struct PowerSetIter<'a, T> {
    elements: Vec<&'a T>,
    counter: SmallVec<[u64; 1]>,
    exhausted: bool,
}

impl<'a, T> PowerSetIter<'a, T> {
    pub(super) fn new(elements: Vec<&'a T>) -> Self {
        let words = elements.len() / WORD_BITS + 1;
        Self {
            elements,
            counter: SmallVec::from_elem(0, words),
            exhausted: false,
        }
    }

    #[inline]
    fn bit(&self, position: usize) -> bool {
        (self.counter[position / WORD_BITS] >> (position % WORD_BITS)) & 1 == 1
    }

    fn advance(&mut self) {
        for word in &mut self.counter {
            let (incremented, carry) = word.overflowing_add(1);
            *word = incremented;
            if !carry {
                break;
            }
        }
        self.exhausted = self.bit(self.elements.len());
    }
}

impl<T: Clone + Ord> Iterator for PowerSetIter<'_, T> {
    type Item = LinkedSet<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let subset = LinkedSet::from_ascending(
            self.elements
                .iter()
                .enumerate()
                .filter(|(position, _)| self.bit(*position))
                .map(|(_, element)| (*element).clone()),
        );
        self.advance();
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        let size = self.elements.len();
        if size >= WORD_BITS {
            return (usize::MAX, None);
        }
        match usize::try_from((1_u64 << size) - self.counter[0]) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T: Clone + Ord> FusedIterator for PowerSetIter<'_, T> {}

impl<T: Clone + Ord> SetCursor for PowerSetIter<'_, T> {
    #[inline]
    fn has_next(&self) -> bool {
        !self.exhausted
    }
}

// =============================================================================
// Tests
// =============================================================================
