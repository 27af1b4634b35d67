//! Bidirectional chain with head and tail tracking.
//!
//! Nodes sit in a [`NodeArena`] and refer to each other by [`Key`]. The arena
//! owns every node; `next` forms the chain and `prev` is a plain back-index
//! used only to walk towards the head, so there is no ownership cycle to
//! break on removal.
//!
//! # Traversal
//!
//! Positional lookup picks the nearer end. For a list of `n` elements, index
//! `i` is reached from the head when `i <= n / 2` and from the tail otherwise,
//! so no lookup walks more than about `n / 2` links.
//!
//! ```text
//!  head                               tail
//!   [a] <-> [b] <-> [c] <-> [d] <-> [e]
//!   ---- walk forward ---->
//!                   <---- walk backward ----
//! ```

use crate::error::{check_access, check_insert};
use crate::node::DoublyNode;
use crate::storage::NodeArena;
use crate::{Backing, Error, Key, Sequence};

/// A sequence stored as a doubly-linked chain of nodes.
///
/// Caching the tail makes `append` O(1), the only linked backing where it is.
/// `get`, `get_mut`, and middle inserts and removals go through a
/// direction-aware lookup that walks at most half the chain.
///
/// # Example
///
/// ```
/// use motion_seq::{DoublyLinkedSequence, Sequence};
///
/// let mut seq = DoublyLinkedSequence::new();
/// for i in 0..5 {
///     seq.append(i);
/// }
/// seq.insert_at(4, 99).unwrap();
///
/// assert_eq!(seq.get(4), Ok(&99));
/// assert_eq!(seq.get(5), Ok(&4));
/// assert_eq!(seq.remove_at(0), Ok(0));
/// ```
#[derive(Debug)]
pub struct DoublyLinkedSequence<T, K: Key = u32> {
    nodes: NodeArena<DoublyNode<T, K>, K>,
    head: K,
    tail: K,
    len: usize,
}

impl<T> DoublyLinkedSequence<T> {
    /// Creates an empty sequence with `u32` links.
    ///
    /// Use [`Default`] to pick another key type.
    #[inline]
    pub const fn new() -> Self {
        Self::empty()
    }
}

impl<T, K: Key> Default for DoublyLinkedSequence<T, K> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, K: Key> DoublyLinkedSequence<T, K> {
    #[inline]
    const fn empty() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: K::NONE,
            tail: K::NONE,
            len: 0,
        }
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.nodes.get(self.head).map(|node| &node.value)
    }

    /// Returns the last element, if any. O(1).
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.nodes.get(self.tail).map(|node| &node.value)
    }

    /// Returns the key of the node at `index`, walking from the nearer end.
    ///
    /// Caller guarantees `index < len`.
    fn node_at(&self, index: usize) -> K {
        debug_assert!(index < self.len);

        if index <= self.len / 2 {
            let mut key = self.head;
            for _ in 0..index {
                key = self.nodes[key].next;
            }
            key
        } else {
            let mut key = self.tail;
            for _ in index + 1..self.len {
                key = self.nodes[key].prev;
            }
            key
        }
    }
}

impl<T, K: Key> Sequence<T> for DoublyLinkedSequence<T, K> {
    fn append(&mut self, element: T) -> bool {
        let key = self.nodes.insert(DoublyNode::new(element));

        if self.tail.is_some() {
            self.nodes[key].prev = self.tail;
            self.nodes[self.tail].next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
        true
    }

    fn insert_at(&mut self, index: usize, element: T) -> Result<(), Error> {
        check_insert(index, self.len)?;

        if self.len == 0 || index == self.len {
            self.append(element);
            return Ok(());
        }

        let key = self.nodes.insert(DoublyNode::new(element));
        if index == 0 {
            self.nodes[key].next = self.head;
            self.nodes[self.head].prev = key;
            self.head = key;
        } else {
            let next = self.node_at(index);
            let prev = self.nodes[next].prev;

            let node = &mut self.nodes[key];
            node.prev = prev;
            node.next = next;

            self.nodes[prev].next = key;
            self.nodes[next].prev = key;
        }

        self.len += 1;
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        check_access(index, self.len)?;

        let target = if self.len == 1 {
            let target = self.head;
            self.head = K::NONE;
            self.tail = K::NONE;
            target
        } else if index == 0 {
            let target = self.head;
            self.head = self.nodes[target].next;
            self.nodes[self.head].prev = K::NONE;
            target
        } else if index == self.len - 1 {
            let target = self.tail;
            self.tail = self.nodes[target].prev;
            self.nodes[self.tail].next = K::NONE;
            target
        } else {
            let target = self.node_at(index);
            let prev = self.nodes[target].prev;
            let next = self.nodes[target].next;
            self.nodes[prev].next = next;
            self.nodes[next].prev = prev;
            target
        };

        // Clear the removed node's links
        let node = &mut self.nodes[target];
        node.prev = K::NONE;
        node.next = K::NONE;

        self.len -= 1;
        Ok(self.nodes.remove(target).value)
    }

    fn get(&self, index: usize) -> Result<&T, Error> {
        check_access(index, self.len)?;
        Ok(&self.nodes[self.node_at(index)].value)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        check_access(index, self.len)?;
        let key = self.node_at(index);
        Ok(&mut self.nodes[key].value)
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    #[inline]
    fn backing(&self) -> Backing {
        Backing::Doubly
    }
}
