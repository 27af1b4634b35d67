//! Node arena for the linked backings.
//!
//! Each linked sequence owns exactly one [`NodeArena`]. Nodes live in the
//! arena's slots and point at each other with [`Key`]s instead of owning
//! pointers, so a doubly-linked chain has no reference cycle: the arena owns
//! every node, and `next`/`prev` are plain indices.
//!
//! Slots are backed by `slab::Slab`, which gives O(1) insert and remove and
//! reuses vacated slots for later inserts.

use core::ops::{Index, IndexMut};
use std::marker::PhantomData;

use slab::Slab;

use crate::Key;

/// Slab-backed storage addressed by compact keys.
///
/// # Example
///
/// ```
/// use motion_seq::NodeArena;
///
/// let mut arena: NodeArena<&str> = NodeArena::new();
/// let a = arena.insert("a");
/// let b = arena.insert("b");
///
/// assert_eq!(arena[a], "a");
/// assert_eq!(arena.remove(b), "b");
/// assert_eq!(arena.len(), 1);
/// ```
#[derive(Debug)]
pub struct NodeArena<T, K: Key = u32> {
    slots: Slab<T>,
    _marker: PhantomData<K>,
}

impl<T, K: Key> Default for NodeArena<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> NodeArena<T, K> {
    /// Creates an empty arena. No memory is allocated until the first insert.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Slab::new(),
            _marker: PhantomData,
        }
    }

    /// Creates an empty arena with room for at least `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slab::with_capacity(capacity),
            _marker: PhantomData,
        }
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slots are occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of slots the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Stores `value` and returns its key.
    ///
    /// # Panics
    ///
    /// Panics if the next slot index is not representable by `K`
    /// (it would collide with `K::NONE`).
    #[inline]
    pub fn insert(&mut self, value: T) -> K {
        let slot = self.slots.vacant_key();
        assert!(
            slot < K::NONE.as_usize(),
            "node count exceeds key type maximum"
        );
        self.slots.insert(value);
        K::from_usize(slot)
    }

    /// Removes and returns the value stored at `key`, releasing its slot.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not occupied.
    #[inline]
    pub fn remove(&mut self, key: K) -> T {
        self.slots.remove(key.as_usize())
    }

    /// Returns a reference to the value at `key`, if occupied.
    #[inline]
    pub fn get(&self, key: K) -> Option<&T> {
        if key.is_none() {
            return None;
        }
        self.slots.get(key.as_usize())
    }

    /// Returns a mutable reference to the value at `key`, if occupied.
    #[inline]
    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        if key.is_none() {
            return None;
        }
        self.slots.get_mut(key.as_usize())
    }
}

impl<T, K: Key> Index<K> for NodeArena<T, K> {
    type Output = T;

    #[inline]
    fn index(&self, key: K) -> &T {
        &self.slots[key.as_usize()]
    }
}

impl<T, K: Key> IndexMut<K> for NodeArena<T, K> {
    #[inline]
    fn index_mut(&mut self, key: K) -> &mut T {
        &mut self.slots[key.as_usize()]
    }
}
