//! Ordered set backed by a doubly-linked chain of arena nodes.
//!
//! This module provides [`LinkedSet`], a mutable, duplicate-free collection
//! whose elements are kept in strictly ascending order along a doubly-linked
//! chain.
//!
//! # Overview
//!
//! Every mutation is a local splice: `insert` walks the chain to the first
//! node not less than the new element and links a fresh node in front of it,
//! and `remove` re-links the neighbours of the removed node. Nodes are stored
//! in a per-set arena and refer to each other by index, so no two sets ever
//! share a node.
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity |
//! |----------------------------|------------|
//! | `insert`                   | O(n), O(1) at either end |
//! | `remove` / `take`          | O(n)       |
//! | `contains`                 | O(n)       |
//! | `len` / `is_empty`         | O(1)       |
//! | `first` / `last`           | O(1)       |
//! | `pop_first` / `pop_last`   | O(1)       |
//! | `union` / `intersection` / `complement` (same type) | O(n + m) |
//! | `*_with` (any [`SetLike`]) | O(n * cost of `contains`) |
//! | `power_set`                | O(n * 2^n) to exhaust |
//!
//! # Examples
//!
//! ```rust
//! use linkset::set::LinkedSet;
//!
//! let mut set = LinkedSet::new();
//! for element in [4, 1, 5, 3, 1, 2, 2, 3] {
//!     set.insert(element);
//! }
//!
//! assert_eq!(set.len(), 5);
//! assert_eq!(set.to_string(), "[1, 2, 3, 4, 5]");
//!
//! let descending: Vec<i32> = set.descending_iter().copied().collect();
//! assert_eq!(descending, vec![5, 4, 3, 2, 1]);
//! ```

use super::SetLike;
use super::arena::{Arena, Node, NodeIndex};
use super::iter::{DescendingIter, IntoIter, Iter, PowerSetIter};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An ordered, duplicate-free set stored as a doubly-linked list.
///
/// Elements are kept in strictly ascending order according to their `Ord`
/// implementation. The chain is anchored at `front` (the minimum) and `rear`
/// (the maximum); both are `None` exactly when the set is empty.
///
/// # Type Parameters
///
/// * `T` - The element type. Most operations require `T: Ord`; operations
///   that build a new set additionally require `T: Clone`.
///
/// # Examples
///
/// ```rust
/// use linkset::set::LinkedSet;
///
/// let left: LinkedSet<i32> = [1, 2, 3, 4].into_iter().collect();
/// let right: LinkedSet<i32> = [3, 4, 5].into_iter().collect();
///
/// assert_eq!(left.union(&right).to_vec(), vec![1, 2, 3, 4, 5]);
/// assert_eq!(left.intersection(&right).to_vec(), vec![3, 4]);
/// assert_eq!(left.complement(&right).to_vec(), vec![1, 2]);
/// ```
pub struct LinkedSet<T> {
    pub(super) arena: Arena<T>,
    pub(super) front: Option<NodeIndex>,
    pub(super) rear: Option<NodeIndex>,
}

static_assertions::assert_impl_all!(LinkedSet<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(LinkedSet<String>: Send, Sync, Clone, Default);

impl<T> LinkedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkset::set::LinkedSet;
    ///
    /// let set: LinkedSet<i32> = LinkedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            front: None,
            rear: None,
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Returns the smallest element, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkset::set::LinkedSet;
    ///
    /// let set: LinkedSet<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.front.map(|index| &self.arena[index].element)
    }

    /// Returns the largest element, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkset::set::LinkedSet;
    ///
    /// let set: LinkedSet<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.rear.map(|index| &self.arena[index].element)
    }

    /// Removes and returns the smallest element.
    pub fn pop_first(&mut self) -> Option<T> {
        let index = self.front?;
        Some(self.unlink(index))
    }

    /// Removes and returns the largest element.
    pub fn pop_last(&mut self) -> Option<T> {
        let index = self.rear?;
        Some(self.unlink(index))
    }

    /// Removes every element, leaving an empty set.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.front = None;
        self.rear = None;
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// The iterator follows `next` links from the front of the chain. Calling
    /// `iter` again starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkset::set::LinkedSet;
    ///
    /// let set: LinkedSet<i32> = [2, 3, 1].into_iter().collect();
    /// let elements: Vec<&i32> = set.iter().collect();
    /// assert_eq!(elements, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.front, self.rear, self.len())
    }

    /// Returns an iterator over the elements in descending order.
    ///
    /// The iterator follows `prev` links from the rear of the chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkset::set::LinkedSet;
    ///
    /// let set: LinkedSet<i32> = (1..=6).collect();
    /// let elements: Vec<i32> = set.descending_iter().copied().collect();
    /// assert_eq!(elements, vec![6, 5, 4, 3, 2, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn descending_iter(&self) -> DescendingIter<'_, T> {
        DescendingIter::new(self.iter())
    }

    /// Links a new node holding `element` immediately before `successor`,
    /// or at the rear when `successor` is `None`.
    ///
    /// The caller guarantees that the position keeps the chain ascending.
    fn splice(&mut self, element: T, successor: Option<NodeIndex>) {
        let predecessor = match successor {
            Some(index) => self.arena[index].prev,
            None => self.rear,
        };
        let index = self
            .arena
            .allocate(Node::linked(element, predecessor, successor));

        match predecessor {
            Some(previous) => self.arena[previous].next = Some(index),
            None => self.front = Some(index),
        }
        match successor {
            Some(next) => self.arena[next].prev = Some(index),
            None => self.rear = Some(index),
        }
    }

    /// Appends `element` at the rear. It must exceed the current maximum.
    #[inline]
    fn push_back(&mut self, element: T) {
        self.splice(element, None);
    }

    /// Prepends `element` at the front. It must be below the current minimum.
    #[inline]
    fn push_front(&mut self, element: T) {
        self.splice(element, self.front);
    }

    /// Detaches the node at `index`, re-links its neighbours, and returns its
    /// element.
    fn unlink(&mut self, index: NodeIndex) -> T {
        let node = self.arena.release(index);

        match node.prev {
            Some(previous) => self.arena[previous].next = node.next,
            None => self.front = node.next,
        }
        match node.next {
            Some(next) => self.arena[next].prev = node.prev,
            None => self.rear = node.prev,
        }

        node.element
    }
}

impl<T: Ord> LinkedSet<T> {
    /// Walks the chain from the front looking for `element`.
    ///
    /// Returns `Ok(index)` of the equal node, or `Err(successor)` where
    /// `successor` is the first node greater than `element` (`None` when every
    /// node is smaller).
    fn locate<Q>(&self, element: &Q) -> Result<NodeIndex, Option<NodeIndex>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.front;
        while let Some(index) = cursor {
            let node = &self.arena[index];
            match node.element.borrow().cmp(element) {
                Ordering::Less => cursor = node.next,
                Ordering::Equal => return Ok(index),
                Ordering::Greater => return Err(Some(index)),
            }
        }
        Err(None)
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// This method supports borrowed forms of the element type through the
    /// `Borrow` trait, so a `LinkedSet<String>` can be searched with a `&str`.
    ///
    /// # Complexity
    ///
    /// O(n). The scan stops at the first element that is not smaller than the
    /// argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkset::set::LinkedSet;
    ///
    /// let set: LinkedSet<i32> = (0..=10).filter(|element| *element != 5).collect();
    /// assert!(set.contains(&4));
    /// assert!(!set.contains(&5));
    ///
    /// let words: LinkedSet<String> = ["hello".to_string()].into_iter().collect();
    /// assert!(words.contains("hello"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate(element).is_ok()
    }

    /// Inserts an element, keeping the chain in ascending order.
    ///
    /// Returns `true` if the set changed and `false` if an equal element was
    /// already present (the set is then left untouched and `element` is
    /// dropped).
    ///
    /// Elements greater than the current maximum or smaller than the current
    /// minimum are linked directly at the rear or front. Anything else is
    /// spliced in front of the first node that is not smaller than it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkset::set::LinkedSet;
    ///
    /// let mut set = LinkedSet::new();
    /// assert!(set.insert(2));
    /// assert!(set.insert(1));
    /// assert!(!set.insert(2));
    /// assert_eq!(set.to_vec(), vec![1, 2]);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        let (Some(front), Some(rear)) = (self.front, self.rear) else {
            self.push_back(element);
            return true;
        };

        if element > self.arena[rear].element {
            self.push_back(element);
            return true;
        }
        if element < self.arena[front].element {
            self.push_front(element);
            return true;
        }

        match self.locate(&element) {
            Ok(_) => false,
            Err(successor) => {
                self.splice(element, successor);
                true
            }
        }
    }

    /// Removes an element, returning `true` if it was present.
    ///
    /// Removing from an empty set, or removing an absent element, returns
    /// `false` and leaves the set unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkset::set::LinkedSet;
    ///
    /// let mut set: LinkedSet<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&2));
    /// assert_eq!(set.to_vec(), vec![1, 3]);
    ///
    /// let mut empty: LinkedSet<i32> = LinkedSet::new();
    /// assert!(!empty.remove(&1));
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(element).is_some()
    }

    /// Removes an element and returns the stored value, if present.
    pub fn take<Q>(&mut self, element: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self.locate(element).ok()?;
        Some(self.unlink(index))
    }

    /// Returns `true` if both sets hold the same elements.
    ///
    /// `other` may be any [`SetLike`] container. Sizes are compared first and
    /// then every element of `self` is looked up in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkset::set::LinkedSet;
    /// use std::collections::BTreeSet;
    ///
    /// let set: LinkedSet<i32> = [2, 3, 4].into_iter().collect();
    /// let same: BTreeSet<i32> = [4, 3, 2].into_iter().collect();
    /// let larger: BTreeSet<i32> = [1, 2, 3, 4].into_iter().collect();
    ///
    /// assert!(set.set_eq(&same));
    /// assert!(!set.set_eq(&larger));
    /// ```
    #[must_use]
    pub fn set_eq<S>(&self, other: &S) -> bool
    where
        S: SetLike<T> + ?Sized,
    {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `self` is contained in `other`.
    #[must_use]
    pub fn is_subset<S>(&self, other: &S) -> bool
    where
        S: SetLike<T> + ?Sized,
    {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Builds a set from elements that already arrive in strictly ascending
    /// order, linking each one at the rear.
    pub(crate) fn from_ascending<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::new();
        for element in iter {
            debug_assert!(
                set.last().is_none_or(|last| last < &element),
                "{}",
                ASCENDING_INVARIANT_PANIC_MESSAGE
            );
            set.push_back(element);
        }
        set
    }
}

impl<T: Clone + Ord> LinkedSet<T> {
    /// Returns a new set holding every element of `self` and `other`.
    ///
    /// `other` may be any [`SetLike`] container. The result starts as a copy
    /// of `self`, and every element of `other` is added through
    /// [`insert`](Self::insert), which drops duplicates and keeps the order.
    /// Neither operand is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkset::set::LinkedSet;
    /// use std::collections::HashSet;
    ///
    /// let set: LinkedSet<i32> = [1, 3].into_iter().collect();
    /// let other: HashSet<i32> = [2, 3, 4].into_iter().collect();
    /// assert_eq!(set.union_with(&other).to_vec(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn union_with<S>(&self, other: &S) -> Self
    where
        S: SetLike<T> + ?Sized,
    {
        let mut result = self.clone();
        result.extend(other.elements().cloned());
        result
    }

    /// Returns a new set holding the elements present in both `self` and
    /// `other`, where `other` may be any [`SetLike`] container.
    #[must_use]
    pub fn intersection_with<S>(&self, other: &S) -> Self
    where
        S: SetLike<T> + ?Sized,
    {
        Self::from_ascending(
            self.iter()
                .filter(|element| other.contains(element))
                .cloned(),
        )
    }

    /// Returns a new set holding the elements of `self` that are absent from
    /// `other`, where `other` may be any [`SetLike`] container.
    ///
    /// When either operand is empty the result is a fresh copy of `self`.
    #[must_use]
    pub fn complement_with<S>(&self, other: &S) -> Self
    where
        S: SetLike<T> + ?Sized,
    {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }

        Self::from_ascending(
            self.iter()
                .filter(|element| !other.contains(element))
                .cloned(),
        )
    }

    /// Returns the union of two `LinkedSet`s.
    ///
    /// Both chains are already ascending, so the result is produced by a
    /// single two-cursor merge into a fresh set.
    ///
    /// # Complexity
    ///
    /// O(n + m) where n and m are the sizes of the two sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkset::set::LinkedSet;
    ///
    /// let left: LinkedSet<i32> = [1, 3, 5].into_iter().collect();
    /// let right: LinkedSet<i32> = [2, 3, 4].into_iter().collect();
    /// assert_eq!(left.union(&right).to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut left = self.iter().peekable();
        let mut right = other.iter().peekable();
        let mut result = Self::new();

        loop {
            let next = match (left.peek().copied(), right.peek().copied()) {
                (Some(left_element), Some(right_element)) => {
                    match left_element.cmp(right_element) {
                        Ordering::Less => left.next(),
                        Ordering::Greater => right.next(),
                        Ordering::Equal => {
                            right.next();
                            left.next()
                        }
                    }
                }
                (Some(_), None) => left.next(),
                (None, Some(_)) => right.next(),
                (None, None) => break,
            };
            if let Some(element) = next {
                result.push_back(element.clone());
            }
        }

        result
    }

    /// Returns the intersection of two `LinkedSet`s.
    ///
    /// # Complexity
    ///
    /// O(n + m) where n and m are the sizes of the two sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkset::set::LinkedSet;
    ///
    /// let left: LinkedSet<i32> = (1..=5).collect();
    /// let right: LinkedSet<i32> = (3..=7).collect();
    /// assert_eq!(left.intersection(&right).to_vec(), vec![3, 4, 5]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = Self::new();
        if self.is_empty() || other.is_empty() {
            return result;
        }

        let mut left = self.iter().peekable();
        let mut right = other.iter().peekable();

        while let (Some(left_element), Some(right_element)) =
            (left.peek().copied(), right.peek().copied())
        {
            match left_element.cmp(right_element) {
                Ordering::Less => {
                    left.next();
                }
                Ordering::Greater => {
                    right.next();
                }
                Ordering::Equal => {
                    result.push_back(left_element.clone());
                    left.next();
                    right.next();
                }
            }
        }

        result
    }

    /// Returns the elements of `self` that are absent from `other`.
    ///
    /// When either operand is empty the result is a fresh copy of `self`.
    ///
    /// # Complexity
    ///
    /// O(n + m) where n and m are the sizes of the two sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkset::set::LinkedSet;
    ///
    /// let left: LinkedSet<i32> = (1..=5).collect();
    /// let right: LinkedSet<i32> = (3..=7).collect();
    /// assert_eq!(left.complement(&right).to_vec(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn complement(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }

        let mut result = Self::new();
        let mut right = other.iter().peekable();

        for element in self {
            while right.next_if(|candidate| *candidate < element).is_some() {}
            if right.peek() != Some(&element) {
                result.push_back(element.clone());
            }
        }

        result
    }

    /// Returns an iterator over every subset of this set.
    ///
    /// Subsets are produced by counting from `0` to `2^n - 1`: the subset for
    /// a count includes the element at ascending position `i` exactly when bit
    /// `i` of the count is set. The first subset is therefore empty and the
    /// last one is a copy of the whole set. Each subset is an independent
    /// `LinkedSet`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkset::set::LinkedSet;
    ///
    /// let set: LinkedSet<char> = ['a', 'b'].into_iter().collect();
    /// let subsets: Vec<String> = set.power_set().map(|subset| subset.to_string()).collect();
    /// assert_eq!(subsets, vec!["[]", "[a]", "[b]", "[a, b]"]);
    /// ```
    #[must_use]
    pub fn power_set(&self) -> PowerSetIter<'_, T> {
        PowerSetIter::new(self.iter().collect())
    }

    /// Returns the elements in ascending order as a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedSet<T> {
    /// Copies every element into a freshly allocated, compacted chain.
    fn clone(&self) -> Self {
        let mut set = Self {
            arena: Arena::with_capacity(self.len()),
            front: None,
            rear: None,
        };
        for element in self {
            set.push_back(element.clone());
        }
        set
    }
}

impl<T: Ord> FromIterator<T> for LinkedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for LinkedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> IntoIterator for LinkedSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LinkedSet<T> {
    /// Both chains are ascending, so equal sets line up element by element.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSet<T> {}

impl<T: Hash> Hash for LinkedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T: Ord> SetLike<T> for LinkedSet<T> {
    type Elements<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.arena.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.locate(element).is_ok()
    }

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }
}

/// Message constant for panic when `from_ascending` receives invalid input.
const ASCENDING_INVARIANT_PANIC_MESSAGE: &str =
    "from_ascending requires strictly increasing elements (sorted + deduplicated)";

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for LinkedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct LinkedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> LinkedSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for LinkedSetVisitor<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    type Value = LinkedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Input order is not trusted; every element goes through insert.
        let mut set = LinkedSet::new();
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for LinkedSet<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(LinkedSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Walks the chain in both directions and checks every structural
    /// invariant of the set.
    fn assert_chain_consistent<T: Ord + fmt::Debug>(set: &LinkedSet<T>) {
        let mut forward = Vec::new();
        let mut previous = None;
        let mut cursor = set.front;
        while let Some(index) = cursor {
            let node = &set.arena[index];
            assert_eq!(node.prev, previous, "prev link is not the inverse of next");
            forward.push(index);
            previous = Some(index);
            cursor = node.next;
        }
        assert_eq!(set.rear, previous);
        assert_eq!(forward.len(), set.len());

        let mut backward = Vec::new();
        let mut cursor = set.rear;
        while let Some(index) = cursor {
            backward.push(index);
            cursor = set.arena[index].prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);

        assert!(
            forward
                .windows(2)
                .all(|pair| set.arena[pair[0]].element < set.arena[pair[1]].element),
            "chain is not strictly ascending"
        );
        assert_eq!(set.is_empty(), set.front.is_none() && set.rear.is_none());
    }

    #[rstest]
    fn test_new_has_no_front_or_rear() {
        let set: LinkedSet<i32> = LinkedSet::new();
        assert!(set.front.is_none());
        assert!(set.rear.is_none());
        assert_eq!(set.len(), 0);
    }

    #[rstest]
    fn test_first_insert_is_front_and_rear() {
        let mut set = LinkedSet::new();
        assert!(set.insert(7));
        assert_eq!(set.front, set.rear);
        assert_eq!(set.first(), Some(&7));
        assert_chain_consistent(&set);
    }

    #[rstest]
    #[case::append_at_rear(vec![1, 2, 3], 4)]
    #[case::prepend_at_front(vec![2, 3, 4], 1)]
    #[case::splice_in_middle(vec![1, 2, 4, 5], 3)]
    #[case::splice_before_rear(vec![1, 5], 4)]
    #[case::splice_after_front(vec![1, 5], 2)]
    fn test_insert_positions(#[case] initial: Vec<i32>, #[case] element: i32) {
        let mut set: LinkedSet<i32> = initial.iter().copied().collect();
        assert!(set.insert(element));

        let mut expected = initial;
        expected.push(element);
        expected.sort_unstable();

        assert_eq!(set.to_vec(), expected);
        assert_chain_consistent(&set);
    }

    #[rstest]
    #[case::front(1)]
    #[case::middle(3)]
    #[case::rear(5)]
    fn test_insert_duplicate_leaves_chain_untouched(#[case] element: i32) {
        let mut set: LinkedSet<i32> = (1..=5).collect();
        assert!(!set.insert(element));
        assert_eq!(set.len(), 5);
        assert_chain_consistent(&set);
    }

    #[rstest]
    #[case::front(1, vec![2, 3, 4])]
    #[case::middle(3, vec![1, 2, 4])]
    #[case::rear(4, vec![1, 2, 3])]
    fn test_remove_relinks_neighbours(#[case] element: i32, #[case] expected: Vec<i32>) {
        let mut set: LinkedSet<i32> = (1..=4).collect();
        assert!(set.remove(&element));
        assert_eq!(set.to_vec(), expected);
        assert_chain_consistent(&set);
    }

    #[rstest]
    fn test_remove_only_element_clears_front_and_rear() {
        let mut set: LinkedSet<i32> = std::iter::once(1).collect();
        assert!(set.remove(&1));
        assert!(set.front.is_none());
        assert!(set.rear.is_none());
        assert_chain_consistent(&set);
    }

    #[rstest]
    fn test_remove_from_empty_set_returns_false() {
        let mut set: LinkedSet<i32> = LinkedSet::new();
        assert!(!set.remove(&1));
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_removed_slots_are_reused() {
        let mut set: LinkedSet<i32> = (1..=4).collect();
        set.remove(&2);
        set.remove(&3);
        set.insert(10);
        set.insert(0);

        assert_eq!(set.to_vec(), vec![0, 1, 4, 10]);
        assert_chain_consistent(&set);
    }

    #[rstest]
    fn test_interleaved_mutations_keep_chain_consistent() {
        let mut set = LinkedSet::new();
        for step in 0..200_i32 {
            let element = (step * 37) % 23;
            if step % 3 == 0 {
                set.remove(&element);
            } else {
                set.insert(element);
            }
            assert_chain_consistent(&set);
        }
    }

    #[rstest]
    fn test_pop_first_and_last() {
        let mut set: LinkedSet<i32> = (1..=3).collect();
        assert_eq!(set.pop_first(), Some(1));
        assert_eq!(set.pop_last(), Some(3));
        assert_eq!(set.pop_last(), Some(2));
        assert_eq!(set.pop_first(), None);
        assert_chain_consistent(&set);
    }

    #[rstest]
    fn test_take_returns_stored_value() {
        let mut set: LinkedSet<String> = ["apple", "banana"].into_iter().map(String::from).collect();
        assert_eq!(set.take("apple"), Some("apple".to_string()));
        assert_eq!(set.take("apple"), None);
        assert_chain_consistent(&set);
    }

    #[rstest]
    fn test_clear_then_reuse() {
        let mut set: LinkedSet<i32> = (1..=3).collect();
        set.clear();
        assert!(set.is_empty());
        set.insert(5);
        assert_eq!(set.to_vec(), vec![5]);
        assert_chain_consistent(&set);
    }

    #[rstest]
    fn test_clone_is_compacted_and_independent() {
        let mut original: LinkedSet<i32> = (1..=5).collect();
        original.remove(&3);
        let mut copy = original.clone();

        assert_eq!(copy.arena.len(), 4);
        assert_eq!(copy.front, Some(0));
        assert_eq!(copy.rear, Some(3));

        copy.insert(3);
        assert!(!original.contains(&3));
        assert_chain_consistent(&copy);
    }

    #[rstest]
    fn test_same_type_operations_build_consistent_chains() {
        let left: LinkedSet<i32> = [1, 3, 5, 7, 9].into_iter().collect();
        let right: LinkedSet<i32> = [2, 3, 4, 9, 10].into_iter().collect();

        for result in [
            left.union(&right),
            left.intersection(&right),
            left.complement(&right),
        ] {
            assert_chain_consistent(&result);
        }
    }

    #[rstest]
    fn test_complement_skips_smaller_right_elements() {
        let left: LinkedSet<i32> = [5, 6, 20].into_iter().collect();
        let right: LinkedSet<i32> = [1, 2, 3, 6, 30].into_iter().collect();
        assert_eq!(left.complement(&right).to_vec(), vec![5, 20]);
    }

    #[rstest]
    fn test_from_ascending_links_in_order() {
        let set = LinkedSet::from_ascending([1, 4, 9]);
        assert_eq!(set.to_vec(), vec![1, 4, 9]);
        assert_chain_consistent(&set);
    }

    #[rstest]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "strictly increasing")]
    fn test_from_ascending_unsorted_panics_in_debug() {
        let _ = LinkedSet::from_ascending([3, 1, 2]);
    }

    #[rstest]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "strictly increasing")]
    fn test_from_ascending_duplicate_panics_in_debug() {
        let _ = LinkedSet::from_ascending([1, 2, 2]);
    }

    #[rstest]
    fn test_display_empty() {
        let set: LinkedSet<i32> = LinkedSet::new();
        assert_eq!(format!("{set}"), "[]");
    }

    #[rstest]
    fn test_display_single() {
        let set: LinkedSet<i32> = std::iter::once(42).collect();
        assert_eq!(format!("{set}"), "[42]");
    }

    #[rstest]
    fn test_debug_uses_set_notation() {
        let set: LinkedSet<i32> = [2, 1].into_iter().collect();
        assert_eq!(format!("{set:?}"), "{1, 2}");
    }

    #[rstest]
    fn test_hash_matches_for_equal_sets() {
        use std::collections::hash_map::DefaultHasher;

        let hash_of = |set: &LinkedSet<i32>| {
            let mut hasher = DefaultHasher::new();
            set.hash(&mut hasher);
            hasher.finish()
        };

        let left: LinkedSet<i32> = [3, 1, 2].into_iter().collect();
        let right: LinkedSet<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(hash_of(&left), hash_of(&right));
    }
}
