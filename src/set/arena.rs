//! Index-based node storage for [`LinkedSet`](super::LinkedSet).
//!
//! Nodes live in a `Vec` of slots and refer to their neighbours by slot
//! index, so the chain has no owning cycles and no raw pointers. Released
//! slots are threaded into a free list and reused by later allocations.

use std::ops::{Index, IndexMut};

/// Position of a node inside its owning [`Arena`].
pub(crate) type NodeIndex = usize;

/// A single chain cell: one element plus its neighbour links.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) prev: Option<NodeIndex>,
    pub(crate) next: Option<NodeIndex>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) const fn linked(
        element: T,
        prev: Option<NodeIndex>,
        next: Option<NodeIndex>,
    ) -> Self {
        Self {
            element,
            prev,
            next,
        }
    }
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeIndex> },
}

/// Growable slot storage with a free list.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<NodeIndex>,
    occupied: usize,
}

impl<T> Arena<T> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            occupied: 0,
        }
    }

    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            occupied: 0,
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.occupied
    }

    /// Stores `node`, reusing a released slot when one is available.
    pub(crate) fn allocate(&mut self, node: Node<T>) -> NodeIndex {
        self.occupied += 1;
        match self.free_head {
            Some(index) => {
                if let Slot::Vacant { next_free } = self.slots[index] {
                    self.free_head = next_free;
                }
                self.slots[index] = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Vacates the slot at `index` and hands back its node.
    ///
    /// # Panics
    ///
    /// Panics if the slot is already vacant.
    pub(crate) fn release(&mut self, index: NodeIndex) -> Node<T> {
        let slot = std::mem::replace(
            &mut self.slots[index],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        match slot {
            Slot::Occupied(node) => {
                self.free_head = Some(index);
                self.occupied -= 1;
                node
            }
            Slot::Vacant { .. } => panic!("{DANGLING_INDEX_PANIC_MESSAGE}"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.occupied = 0;
    }
}

impl<T> Index<NodeIndex> for Arena<T> {
    type Output = Node<T>;

    #[inline]
    fn index(&self, index: NodeIndex) -> &Self::Output {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("{DANGLING_INDEX_PANIC_MESSAGE}"),
        }
    }
}

impl<T> IndexMut<NodeIndex> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("{DANGLING_INDEX_PANIC_MESSAGE}"),
        }
    }
}

const DANGLING_INDEX_PANIC_MESSAGE: &str = "node index refers to a vacant arena slot";

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn detached<T>(element: T) -> Node<T> {
        Node::linked(element, None, None)
    }

    #[rstest]
    fn test_allocate_appends_slots() {
        let mut arena = Arena::new();
        let first = arena.allocate(detached('a'));
        let second = arena.allocate(detached('b'));

        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena[second].element, 'b');
    }

    #[rstest]
    fn test_release_returns_node_and_recycles_slot() {
        let mut arena = Arena::new();
        let first = arena.allocate(detached(10));
        let _second = arena.allocate(detached(20));

        let node = arena.release(first);
        assert_eq!(node.element, 10);
        assert_eq!(arena.len(), 1);

        let reused = arena.allocate(detached(30));
        assert_eq!(reused, first);
        assert_eq!(arena[reused].element, 30);
        assert_eq!(arena.len(), 2);
    }

    #[rstest]
    fn test_free_list_is_last_in_first_out() {
        let mut arena = Arena::new();
        let indices: Vec<NodeIndex> = (0..4).map(|value| arena.allocate(detached(value))).collect();

        arena.release(indices[1]);
        arena.release(indices[3]);

        assert_eq!(arena.allocate(detached(7)), indices[3]);
        assert_eq!(arena.allocate(detached(8)), indices[1]);
        assert_eq!(arena.allocate(detached(9)), 4);
    }

    #[rstest]
    fn test_index_mut_updates_links() {
        let mut arena = Arena::new();
        let first = arena.allocate(detached(1));
        let second = arena.allocate(detached(2));

        arena[first].next = Some(second);
        arena[second].prev = Some(first);

        assert_eq!(arena[first].next, Some(second));
        assert_eq!(arena[second].prev, Some(first));
    }

    #[rstest]
    #[should_panic(expected = "vacant arena slot")]
    fn test_index_of_released_slot_panics() {
        let mut arena = Arena::new();
        let index = arena.allocate(detached(1));
        arena.release(index);
        let _element = arena[index].element;
    }

    #[rstest]
    #[should_panic(expected = "vacant arena slot")]
    fn test_double_release_panics() {
        let mut arena = Arena::new();
        let index = arena.allocate(detached(1));
        arena.release(index);
        arena.release(index);
    }

    #[rstest]
    fn test_clear_resets_everything() {
        let mut arena: Arena<i32> = Arena::with_capacity(4);
        let index = arena.allocate(detached(1));
        arena.release(index);
        arena.allocate(detached(2));

        arena.clear();

        assert_eq!(arena.len(), 0);
        assert_eq!(arena.allocate(detached(3)), 0);
    }
}
