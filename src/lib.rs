//! # Fluent: chainable single-pass sequences
//!
//! [`LazySequence`] wraps any iterator and exposes a chainable API over it.
//! Chaining operations compose lazily and never pull an item; terminal
//! operations pull items and may leave the rest for later.
//!
//! ```
//! use fluent::{IntoLazySequence, OneOrMany};
//!
//! let mut seq = vec![1, 2, 3, 4]
//!     .fluent()
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 10)
//!     .prepend(OneOrMany::one(0));
//!
//! assert_eq!(seq.first(), Some(0));
//! assert_eq!(seq.collect_vec(), vec![20, 40]);
//! assert_eq!(seq.collect_vec(), Vec::<i32>::new());
//! ```
//!
//! [`wrap`] adapts a function of several arguments into one that takes its
//! arguments from a sequence.
//!
//! Sequences are meant for a single reader on a single thread. Nothing here
//! synchronizes access to the underlying producer.

mod error;
mod filter_false;
mod lazy_sequence;
mod one_or_many;
mod try_flatten;
mod unpack;

#[cfg(test)]
mod testing;

pub use error::{FluentError, Result};
pub use filter_false::FilterFalse;
pub use lazy_sequence::{IntoLazySequence, LazySequence};
pub use one_or_many::{OneOrMany, OneOrManyIter};
pub use try_flatten::TryFlatten;
pub use unpack::{try_wrap, wrap, SpreadFn, Unpacked};
