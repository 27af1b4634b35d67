//! One-directional chain, head-tracked only.

use crate::error::{check_access, check_insert};
use crate::node::SinglyNode;
use crate::storage::NodeArena;
use crate::{Backing, Error, Key, Sequence};

/// A sequence stored as a singly-linked chain of nodes.
///
/// Only the head is tracked. Every positional operation walks the chain from
/// the head, including `append`, which walks to the last node before linking
/// the new one: O(n). Nodes live in a private [`NodeArena`]; each insert
/// allocates exactly one slot and each removal releases it.
///
/// # Example
///
/// ```
/// use motion_seq::{Sequence, SinglyLinkedSequence};
///
/// let mut seq = SinglyLinkedSequence::new();
/// seq.append("b");
/// seq.insert_at(0, "a").unwrap();
///
/// assert_eq!(seq.get(0), Ok(&"a"));
/// assert_eq!(seq.remove_at(1), Ok("b"));
/// ```
#[derive(Debug)]
pub struct SinglyLinkedSequence<T, K: Key = u32> {
    nodes: NodeArena<SinglyNode<T, K>, K>,
    head: K,
    len: usize,
}

impl<T> SinglyLinkedSequence<T> {
    /// Creates an empty sequence with `u32` links.
    ///
    /// Use [`Default`] to pick another key type.
    #[inline]
    pub const fn new() -> Self {
        Self::empty()
    }
}

impl<T, K: Key> Default for SinglyLinkedSequence<T, K> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, K: Key> SinglyLinkedSequence<T, K> {
    #[inline]
    const fn empty() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: K::NONE,
            len: 0,
        }
    }

    /// Returns the key of the node `steps` links after the head.
    ///
    /// Caller guarantees `steps < len`.
    fn walk(&self, steps: usize) -> K {
        let mut key = self.head;
        for _ in 0..steps {
            key = self.nodes[key].next;
        }
        key
    }
}

impl<T, K: Key> Sequence<T> for SinglyLinkedSequence<T, K> {
    fn append(&mut self, element: T) -> bool {
        let key = self.nodes.insert(SinglyNode::new(element));

        if self.head.is_none() {
            self.head = key;
        } else {
            let mut last = self.head;
            while self.nodes[last].next.is_some() {
                last = self.nodes[last].next;
            }
            self.nodes[last].next = key;
        }

        self.len += 1;
        true
    }

    fn insert_at(&mut self, index: usize, element: T) -> Result<(), Error> {
        check_insert(index, self.len)?;

        let key = self.nodes.insert(SinglyNode::new(element));
        if index == 0 {
            self.nodes[key].next = self.head;
            self.head = key;
        } else {
            let prev = self.walk(index - 1);
            self.nodes[key].next = self.nodes[prev].next;
            self.nodes[prev].next = key;
        }

        self.len += 1;
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        check_access(index, self.len)?;

        let target = if index == 0 {
            let target = self.head;
            self.head = self.nodes[target].next;
            target
        } else {
            let prev = self.walk(index - 1);
            let target = self.nodes[prev].next;
            self.nodes[prev].next = self.nodes[target].next;
            target
        };

        self.nodes[target].next = K::NONE;
        self.len -= 1;
        Ok(self.nodes.remove(target).value)
    }

    fn get(&self, index: usize) -> Result<&T, Error> {
        check_access(index, self.len)?;
        Ok(&self.nodes[self.walk(index)].value)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        check_access(index, self.len)?;
        let key = self.walk(index);
        Ok(&mut self.nodes[key].value)
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    #[inline]
    fn backing(&self) -> Backing {
        Backing::Singly
    }
}
