//! Singly-linked chain behind a permanent sentinel node.

use crate::error::{check_access, check_insert};
use crate::node::SinglyNode;
use crate::storage::NodeArena;
use crate::{Backing, Error, Key, Sequence};

/// A singly-linked sequence whose chain starts at a sentinel node.
///
/// The sentinel is allocated once, at construction, holds no element and is
/// never removed or counted. Every real node therefore has a predecessor, so
/// `insert_at` and `remove_at` share one code path for all indices: walk
/// `index` links from the sentinel, then relink after that node.
///
/// `append` walks the whole chain (no tail is cached), the same O(n) cost as
/// [`SinglyLinkedSequence`](crate::SinglyLinkedSequence).
///
/// # Example
///
/// ```
/// use motion_seq::{Sequence, SentinelLinkedSequence};
///
/// let mut seq = SentinelLinkedSequence::new();
/// seq.append(2);
/// seq.insert_at(0, 1).unwrap();
/// seq.insert_at(2, 3).unwrap();
///
/// assert_eq!(seq.size(), 3);
/// assert_eq!(seq.remove_at(0), Ok(1));
/// assert_eq!(seq.get(0), Ok(&2));
/// ```
#[derive(Debug)]
pub struct SentinelLinkedSequence<T, K: Key = u32> {
    nodes: NodeArena<SinglyNode<Option<T>, K>, K>,
    sentinel: K,
    len: usize,
}

impl<T> SentinelLinkedSequence<T> {
    /// Creates an empty sequence with `u32` links.
    ///
    /// Use [`Default`] to pick another key type.
    pub fn new() -> Self {
        Self::empty()
    }
}

impl<T, K: Key> Default for SentinelLinkedSequence<T, K> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, K: Key> SentinelLinkedSequence<T, K> {
    fn empty() -> Self {
        let mut nodes = NodeArena::new();
        let sentinel = nodes.insert(SinglyNode::new(None));
        Self {
            nodes,
            sentinel,
            len: 0,
        }
    }

    /// Returns the key of the node `steps` links after the sentinel.
    ///
    /// Zero steps yields the sentinel itself. Caller guarantees
    /// `steps <= len`.
    fn walk(&self, steps: usize) -> K {
        let mut key = self.sentinel;
        for _ in 0..steps {
            key = self.nodes[key].next;
        }
        key
    }
}

impl<T, K: Key> Sequence<T> for SentinelLinkedSequence<T, K> {
    fn append(&mut self, element: T) -> bool {
        let mut last = self.sentinel;
        while self.nodes[last].next.is_some() {
            last = self.nodes[last].next;
        }

        let key = self.nodes.insert(SinglyNode::new(Some(element)));
        self.nodes[last].next = key;
        self.len += 1;
        true
    }

    fn insert_at(&mut self, index: usize, element: T) -> Result<(), Error> {
        check_insert(index, self.len)?;

        let prev = self.walk(index);
        let key = self.nodes.insert(SinglyNode::new(Some(element)));
        self.nodes[key].next = self.nodes[prev].next;
        self.nodes[prev].next = key;

        self.len += 1;
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        check_access(index, self.len)?;

        let prev = self.walk(index);
        let target = self.nodes[prev].next;
        self.nodes[prev].next = self.nodes[target].next;
        self.nodes[target].next = K::NONE;

        self.len -= 1;
        let value = self.nodes.remove(target).value;
        Ok(value.expect("only the sentinel holds no element"))
    }

    fn get(&self, index: usize) -> Result<&T, Error> {
        check_access(index, self.len)?;
        let key = self.walk(index + 1);
        Ok(self.nodes[key]
            .value
            .as_ref()
            .expect("only the sentinel holds no element"))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        check_access(index, self.len)?;
        let key = self.walk(index + 1);
        Ok(self.nodes[key]
            .value
            .as_mut()
            .expect("only the sentinel holds no element"))
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    #[inline]
    fn backing(&self) -> Backing {
        Backing::Sentinel
    }
}
