//! Link type for arena-resident nodes.
//!
//! Linked backings never hold owning pointers between nodes. A node refers to
//! its neighbours through a [`Key`]: the slot index of the neighbour inside
//! the list's [`NodeArena`](crate::storage::NodeArena), with a reserved
//! `NONE` value standing in for "no neighbour".

/// Trait for integer types used as node links.
///
/// Provides a sentinel value (`NONE`) and conversion to/from `usize`.
/// Narrow keys (`u16`, `u32`) shrink every node; the trade-off is a lower
/// ceiling on how many nodes a single list can hold.
///
/// # Example
///
/// ```
/// use motion_seq::Key;
///
/// let key: u32 = 42;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// assert_eq!(u32::from_usize(7).as_usize(), 7);
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel value representing "no link".
    ///
    /// For integer types this is `MAX`, which also caps the number of slots
    /// a list may allocate.
    const NONE: Self;

    /// Creates a key from a slot index.
    fn from_usize(val: usize) -> Self;

    /// Returns the slot index this key refers to.
    fn as_usize(&self) -> usize;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }
}

macro_rules! narrow_key {
    ($($ty:ty),*) => {$(
        impl Key for $ty {
            const NONE: Self = <$ty>::MAX;

            #[inline]
            fn from_usize(val: usize) -> Self {
                debug_assert!(val <= <$ty>::MAX as usize, "slot {val} does not fit the key");
                val as $ty
            }

            #[inline]
            fn as_usize(&self) -> usize {
                *self as usize
            }
        }
    )*};
}

narrow_key!(u16, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u32_key_basics() {
        let key: u32 = 42;
        assert!(!key.is_none());
        assert!(key.is_some());
        assert_eq!(key.as_usize(), 42);

        assert!(u32::NONE.is_none());
        assert!(!u32::NONE.is_some());
    }

    #[test]
    fn from_usize_keeps_slot_index() {
        for i in [0usize, 1, 100, 1000, u16::MAX as usize - 1] {
            assert_eq!(u16::from_usize(i).as_usize(), i);
            assert_eq!(u32::from_usize(i).as_usize(), i);
        }
    }

    #[test]
    fn none_values() {
        assert_eq!(u16::NONE, u16::MAX);
        assert_eq!(u32::NONE, u32::MAX);
    }
}
