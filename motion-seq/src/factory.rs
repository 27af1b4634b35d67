//! Runtime selection of a backing from a configuration token.
//!
//! This is the one place that branches on backing type. Everything
//! downstream holds a `Box<dyn Sequence<T>>` and only uses the contract.
//!
//! | Token | Backing |
//! |-------|---------|
//! | `arraylist` | [`ArraySequence`] |
//! | `single` | [`SinglyLinkedSequence`] |
//! | `double` | [`DoublyLinkedSequence`] |
//! | `dummyhead` | [`SentinelLinkedSequence`] |
//!
//! Tokens are matched after trimming surrounding whitespace and lower-casing,
//! so `" Double "` selects the doubly-linked backing.

use core::fmt;
use core::str::FromStr;

use crate::{
    ArraySequence, DoublyLinkedSequence, Error, SentinelLinkedSequence, Sequence,
    SinglyLinkedSequence,
};

/// The four interchangeable backings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backing {
    /// [`ArraySequence`], token `arraylist`.
    Array,
    /// [`SinglyLinkedSequence`], token `single`.
    Singly,
    /// [`DoublyLinkedSequence`], token `double`.
    Doubly,
    /// [`SentinelLinkedSequence`], token `dummyhead`.
    Sentinel,
}

impl Backing {
    /// Every backing, in token-table order.
    pub const ALL: [Backing; 4] = [
        Backing::Array,
        Backing::Singly,
        Backing::Doubly,
        Backing::Sentinel,
    ];

    /// Returns the canonical configuration token.
    pub const fn token(self) -> &'static str {
        match self {
            Backing::Array => "arraylist",
            Backing::Singly => "single",
            Backing::Doubly => "double",
            Backing::Sentinel => "dummyhead",
        }
    }

    /// Builds an empty sequence of this backing.
    pub fn build<T: 'static>(self) -> Box<dyn Sequence<T>> {
        match self {
            Backing::Array => Box::new(ArraySequence::new()),
            Backing::Singly => Box::new(SinglyLinkedSequence::new()),
            Backing::Doubly => Box::new(DoublyLinkedSequence::new()),
            Backing::Sentinel => Box::new(SentinelLinkedSequence::new()),
        }
    }
}

impl fmt::Display for Backing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Backing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arraylist" => Ok(Backing::Array),
            "single" => Ok(Backing::Singly),
            "double" => Ok(Backing::Doubly),
            "dummyhead" => Ok(Backing::Sentinel),
            _ => Err(Error::InvalidConfiguration {
                token: Some(s.to_string()),
            }),
        }
    }
}

/// Builds an empty sequence for a configuration token.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] if `token` is `None` or names no
/// known backing.
///
/// # Example
///
/// ```
/// use motion_seq::{Backing, Error, from_token};
///
/// let seq = from_token::<u64>(Some(" Double ")).unwrap();
/// assert_eq!(seq.backing(), Backing::Doubly);
///
/// assert!(matches!(
///     from_token::<u64>(Some("foo")),
///     Err(Error::InvalidConfiguration { .. })
/// ));
/// assert!(from_token::<u64>(None).is_err());
/// ```
pub fn from_token<T: 'static>(token: Option<&str>) -> Result<Box<dyn Sequence<T>>, Error> {
    let token = token.ok_or(Error::InvalidConfiguration { token: None })?;
    Ok(token.parse::<Backing>()?.build())
}
