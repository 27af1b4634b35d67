//! The operation set shared by every backing.

use crate::{Backing, Error};

/// A positional sequence of `T`, addressed by zero-based index.
///
/// Four backings implement this trait: [`ArraySequence`](crate::ArraySequence),
/// [`SinglyLinkedSequence`](crate::SinglyLinkedSequence),
/// [`DoublyLinkedSequence`](crate::DoublyLinkedSequence) and
/// [`SentinelLinkedSequence`](crate::SentinelLinkedSequence). Callers usually
/// obtain one through [`from_token`](crate::from_token) and never learn which.
///
/// # Bounds
///
/// | Operation | Accepted indices |
/// |-----------|------------------|
/// | `get`, `get_mut`, `remove_at` | `0..size` |
/// | `insert_at` | `0..=size` |
///
/// An out-of-range index yields [`Error::InvalidIndex`] and leaves the
/// sequence untouched.
///
/// # Example
///
/// ```
/// use motion_seq::{Sequence, from_token};
///
/// let mut seq = from_token::<u32>(Some("double")).unwrap();
/// seq.append(10);
/// seq.append(30);
/// seq.insert_at(1, 20).unwrap();
///
/// assert_eq!(seq.size(), 3);
/// assert_eq!(seq.get(1), Ok(&20));
/// assert_eq!(seq.remove_at(0), Ok(10));
/// assert!(seq.get(2).is_err());
/// ```
pub trait Sequence<T> {
    /// Adds `element` after the last element. Always succeeds.
    fn append(&mut self, element: T) -> bool;

    /// Inserts `element` so that it ends up at `index`.
    ///
    /// Elements previously at `index..` move one position up.
    /// `index == size()` is equivalent to [`append`](Sequence::append).
    fn insert_at(&mut self, index: usize, element: T) -> Result<(), Error>;

    /// Removes and returns the element at `index`.
    ///
    /// Elements previously after `index` move one position down.
    fn remove_at(&mut self, index: usize) -> Result<T, Error>;

    /// Returns a reference to the element at `index`.
    fn get(&self, index: usize) -> Result<&T, Error>;

    /// Returns a mutable reference to the element at `index`.
    fn get_mut(&mut self, index: usize) -> Result<&mut T, Error>;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns which backing implements this sequence.
    fn backing(&self) -> Backing;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Collects the sequence through the contract, front to back.
    pub(crate) fn contents<T: Clone, S: Sequence<T> + ?Sized>(seq: &S) -> Vec<T> {
        (0..seq.size())
            .map(|i| seq.get(i).cloned().expect("index below size"))
            .collect()
    }

    /// Shared behaviour every backing must exhibit.
    pub(crate) fn exercise_contract(seq: &mut dyn Sequence<u64>) {
        assert!(seq.is_empty());
        assert_eq!(
            seq.get(0),
            Err(Error::InvalidIndex { index: 0, size: 0 })
        );
        assert_eq!(
            seq.remove_at(0),
            Err(Error::InvalidIndex { index: 0, size: 0 })
        );

        for v in [10, 20, 30, 40, 50] {
            assert!(seq.append(v));
        }
        assert_eq!(seq.get(2), Ok(&30));
        assert_eq!(seq.size(), 5);

        seq.insert_at(0, 99).unwrap();
        assert_eq!(contents(&*seq), vec![99, 10, 20, 30, 40, 50]);

        seq.insert_at(6, 60).unwrap();
        seq.insert_at(3, 25).unwrap();
        assert_eq!(contents(&*seq), vec![99, 10, 20, 25, 30, 40, 50, 60]);

        assert_eq!(
            seq.insert_at(9, 0),
            Err(Error::InvalidIndex { index: 9, size: 8 })
        );
        assert_eq!(seq.size(), 8);

        assert_eq!(seq.remove_at(0), Ok(99));
        assert_eq!(seq.remove_at(6), Ok(60));
        assert_eq!(seq.remove_at(2), Ok(25));
        assert_eq!(contents(&*seq), vec![10, 20, 30, 40, 50]);

        *seq.get_mut(4).unwrap() += 5;
        assert_eq!(seq.get(4), Ok(&55));

        assert_eq!(
            seq.get(5),
            Err(Error::InvalidIndex { index: 5, size: 5 })
        );
        assert_eq!(
            seq.get_mut(7),
            Err(Error::InvalidIndex { index: 7, size: 5 })
        );
        assert_eq!(
            seq.remove_at(5),
            Err(Error::InvalidIndex { index: 5, size: 5 })
        );
        assert_eq!(contents(&*seq), vec![10, 20, 30, 40, 55]);

        while !seq.is_empty() {
            let last = seq.size() - 1;
            seq.remove_at(last).unwrap();
        }
        assert_eq!(seq.size(), 0);

        // Reusable after draining
        seq.insert_at(0, 1).unwrap();
        seq.append(2);
        assert_eq!(contents(&*seq), vec![1, 2]);
    }
}
