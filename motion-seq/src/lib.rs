//! Positional sequences with interchangeable backings.
//!
//! One contract, [`Sequence`], and four ways to store it:
//!
//! | Backing | `append` | `get(i)` | `insert_at(i)` / `remove_at(i)` |
//! |---------|----------|----------|---------------------------------|
//! | [`ArraySequence`] | O(1) amortized | O(1) | O(n - i) shifting |
//! | [`SinglyLinkedSequence`] | O(n) | O(i) | O(i) |
//! | [`DoublyLinkedSequence`] | O(1) | O(min(i, n - i)) | O(min(i, n - i)) |
//! | [`SentinelLinkedSequence`] | O(n) | O(i) | O(i) |
//!
//! The singly-linked and sentinel backings deliberately keep no tail, so
//! their `append` walks the chain; only the doubly-linked backing caches it.
//!
//! # Choosing at runtime
//!
//! [`from_token`] turns a configuration token into a boxed sequence. Callers
//! never branch on backing type after that.
//!
//! ```
//! use motion_seq::{Sequence, from_token};
//!
//! let mut bodies = from_token::<&str>(Some("dummyhead")).unwrap();
//! bodies.append("star");
//! bodies.append("comet");
//!
//! // Retire from the back so earlier indices stay valid
//! for i in (0..bodies.size()).rev() {
//!     if *bodies.get(i).unwrap() == "comet" {
//!         bodies.remove_at(i).unwrap();
//!     }
//! }
//! assert_eq!(bodies.size(), 1);
//! ```
//!
//! # Node storage
//!
//! Linked backings keep their nodes in a [`NodeArena`] and link them with
//! [`Key`] indices rather than pointers. The doubly-linked `prev` edge is an
//! index like any other, so there is no ownership cycle and no `unsafe`.
//! The key type is a parameter (default `u32`); a narrower key shrinks each
//! node at the cost of a lower element ceiling.
//!
//! ```
//! use motion_seq::{DoublyLinkedSequence, Sequence};
//!
//! let mut small: DoublyLinkedSequence<u8, u16> = DoublyLinkedSequence::default();
//! small.append(1);
//! assert_eq!(small.size(), 1);
//! ```
//!
//! # Errors
//!
//! Out-of-range indices return [`Error::InvalidIndex`] before anything is
//! modified. Unknown or missing tokens return [`Error::InvalidConfiguration`].

#![warn(missing_docs)]

pub mod array;
pub mod doubly;
pub mod error;
pub mod factory;
pub mod key;
mod node;
pub mod sentinel;
pub mod sequence;
pub mod singly;
pub mod storage;

pub use array::ArraySequence;
pub use doubly::DoublyLinkedSequence;
pub use error::Error;
pub use factory::{Backing, from_token};
pub use key::Key;
pub use sentinel::SentinelLinkedSequence;
pub use sequence::Sequence;
pub use singly::SinglyLinkedSequence;
pub use storage::NodeArena;
