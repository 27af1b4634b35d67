//! Contiguous-buffer backing with capacity doubling.

use crate::error::{check_access, check_insert};
use crate::{Backing, Error, Sequence};

/// Capacity of a buffer created by [`ArraySequence::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A sequence backed by one contiguous buffer.
///
/// Slots `0..size` hold the elements in order; slots `size..capacity` are
/// empty. When an insert finds the buffer full, the buffer is reallocated at
/// twice its capacity before the element is written, so `append` is
/// amortized O(1). `insert_at` and `remove_at` shift every element after the
/// index by one slot, O(n) in the worst case. `get` is O(1).
///
/// # Example
///
/// ```
/// use motion_seq::{ArraySequence, Sequence};
///
/// let mut seq = ArraySequence::new();
/// for i in 0..11 {
///     seq.append(i);
/// }
///
/// assert_eq!(seq.capacity(), 20);
/// assert_eq!(seq.get(10), Ok(&10));
/// ```
#[derive(Debug)]
pub struct ArraySequence<T> {
    buf: Box<[Option<T>]>,
    len: usize,
}

impl<T> Default for ArraySequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArraySequence<T> {
    /// Creates an empty sequence with room for [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty sequence with room for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 (an empty buffer cannot double).
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            buf: empty_slots(capacity),
            len: 0,
        }
    }

    /// Returns the number of slots in the buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Doubles the buffer if every slot is occupied.
    fn grow_if_full(&mut self) {
        if self.len < self.buf.len() {
            return;
        }

        let mut grown = empty_slots(self.buf.len() * 2);
        for (dst, src) in grown.iter_mut().zip(self.buf.iter_mut()) {
            *dst = src.take();
        }
        self.buf = grown;
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Sequence<T> for ArraySequence<T> {
    fn append(&mut self, element: T) -> bool {
        self.grow_if_full();
        self.buf[self.len] = Some(element);
        self.len += 1;
        true
    }

    fn insert_at(&mut self, index: usize, element: T) -> Result<(), Error> {
        check_insert(index, self.len)?;
        self.grow_if_full();

        // The empty slot at `len` rotates down to `index`
        self.buf[self.len] = Some(element);
        self.buf[index..=self.len].rotate_right(1);
        self.len += 1;
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        check_access(index, self.len)?;

        // The vacated slot rotates up to `len - 1`, leaving the tail cleared
        let removed = self.buf[index].take();
        self.buf[index..self.len].rotate_left(1);
        self.len -= 1;
        debug_assert!(self.buf[self.len].is_none());

        Ok(removed.expect("slots below len are occupied"))
    }

    fn get(&self, index: usize) -> Result<&T, Error> {
        check_access(index, self.len)?;
        Ok(self.buf[index]
            .as_ref()
            .expect("slots below len are occupied"))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        check_access(index, self.len)?;
        Ok(self.buf[index]
            .as_mut()
            .expect("slots below len are occupied"))
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    #[inline]
    fn backing(&self) -> Backing {
        Backing::Array
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::tests::{contents, exercise_contract};

    #[test]
    fn contract() {
        exercise_contract(&mut ArraySequence::<u64>::new());
    }

    #[test]
    fn new_has_default_capacity() {
        let seq: ArraySequence<u64> = ArraySequence::new();
        assert_eq!(seq.capacity(), DEFAULT_CAPACITY);
        assert!(seq.is_empty());
        assert_eq!(seq.backing(), Backing::Array);
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn zero_capacity_panics() {
        let _ = ArraySequence::<u64>::with_capacity(0);
    }

    #[test]
    fn eleventh_append_doubles_capacity() {
        let mut seq = ArraySequence::new();
        for i in 0..10 {
            seq.append(i);
        }
        assert_eq!(seq.capacity(), 10);

        seq.append(10);
        assert_eq!(seq.capacity(), 20);
        assert_eq!(contents(&seq), (0..11).collect::<Vec<_>>());
    }

    #[test]
    fn insert_into_full_buffer_grows_first() {
        let mut seq = ArraySequence::with_capacity(2);
        seq.append('a');
        seq.append('c');

        seq.insert_at(1, 'b').unwrap();

        assert_eq!(seq.capacity(), 4);
        assert_eq!(contents(&seq), vec!['a', 'b', 'c']);
    }

    #[test]
    fn remove_clears_trailing_slot() {
        let mut seq = ArraySequence::new();
        seq.append(1);
        seq.append(2);
        seq.append(3);

        assert_eq!(seq.remove_at(0), Ok(1));

        assert_eq!(seq.size(), 2);
        assert!(seq.buf[2].is_none());
        assert!(seq.buf[2..].iter().all(Option::is_none));
    }

    #[test]
    fn removed_elements_are_dropped_not_retained() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        let mut seq = ArraySequence::new();
        for _ in 0..3 {
            seq.append(Rc::clone(&tracker));
        }

        drop(seq.remove_at(1).unwrap());
        assert_eq!(Rc::strong_count(&tracker), 3);

        drop(seq);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn failed_insert_leaves_buffer_untouched() {
        let mut seq = ArraySequence::with_capacity(1);
        seq.append(1);

        assert_eq!(
            seq.insert_at(2, 9),
            Err(Error::InvalidIndex { index: 2, size: 1 })
        );
        assert_eq!(seq.capacity(), 1);
        assert_eq!(contents(&seq), vec![1]);
    }
}
