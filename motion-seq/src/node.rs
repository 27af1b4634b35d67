//! Node shapes stored in a [`NodeArena`](crate::storage::NodeArena).

use crate::Key;

/// A node of a one-directional chain.
///
/// The sentinel backing stores `SinglyNode<Option<T>, K>` so that its
/// permanent head node can exist without an element.
#[derive(Debug)]
pub(crate) struct SinglyNode<T, K: Key> {
    pub(crate) value: T,
    pub(crate) next: K,
}

impl<T, K: Key> SinglyNode<T, K> {
    /// Creates a new unlinked node.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            next: K::NONE,
        }
    }
}

/// A node of a bidirectional chain.
///
/// `next` is the forward chain; `prev` is only ever read to walk backwards.
#[derive(Debug)]
pub(crate) struct DoublyNode<T, K: Key> {
    pub(crate) value: T,
    pub(crate) prev: K,
    pub(crate) next: K,
}

impl<T, K: Key> DoublyNode<T, K> {
    /// Creates a new unlinked node.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            prev: K::NONE,
            next: K::NONE,
        }
    }
}
