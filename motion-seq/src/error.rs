//! Errors surfaced by sequences and the backing factory.

use thiserror::Error;

/// Errors returned by [`Sequence`](crate::Sequence) operations and
/// [`from_token`](crate::from_token).
///
/// Both kinds are caller errors: the requested operation did not happen and
/// the sequence is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The index is outside the range accepted by the operation.
    ///
    /// `get`, `get_mut` and `remove_at` accept `0..size`; `insert_at` also
    /// accepts `size` itself.
    #[error("index {index} out of bounds (size {size})")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// The sequence size at the time of the call.
        size: usize,
    },

    /// The backing token is missing or not one of the recognized names.
    #[error(
        "invalid list token {} (expected arraylist|single|double|dummyhead)",
        display_token(.token)
    )]
    InvalidConfiguration {
        /// The token as supplied, or `None` when absent.
        token: Option<String>,
    },
}

fn display_token(token: &Option<String>) -> String {
    match token {
        Some(token) => format!("{token:?}"),
        None => "<missing>".to_string(),
    }
}

/// Checks `index < size` for element access and removal.
#[inline]
pub(crate) fn check_access(index: usize, size: usize) -> Result<(), Error> {
    if index < size {
        Ok(())
    } else {
        Err(Error::InvalidIndex { index, size })
    }
}

/// Checks `index <= size` for insertion.
#[inline]
pub(crate) fn check_insert(index: usize, size: usize) -> Result<(), Error> {
    if index <= size {
        Ok(())
    } else {
        Err(Error::InvalidIndex { index, size })
    }
}
