//! Lazy, pull-based sequence engine
//!
//! A [`Sequence`] is a cheap, immutable *definition* of an ordered series
//! of values: a source (possibly unbounded) plus zero or more
//! transformation stages. Building or chaining a definition performs no
//! element work; values exist only transiently while a terminal operation
//! pulls them, one element at a time through the entire stage chain
//! (depth-first per element, never breadth-first per stage).
//!
//! Definitions are restartable and uncached: every terminal operation
//! starts a fresh traversal from the source, and independent traversals of
//! one definition never interfere, including across threads.
//!
//! ```
//! use rill::Sequence;
//!
//! let naturals = Sequence::generate(0i64, |n| n + 1);
//! let total = naturals.take_while(|n| *n <= 100).sum().unwrap();
//! assert_eq!(total, 5050);
//! ```

mod source;
mod stage;
mod terminal;

pub use terminal::Cursor;

use std::sync::Arc;

use crate::error::SeqResult;

/// Per-traversal pull contract implemented by every stage cursor.
///
/// `pull` returns `Ok(Some(value))` for the next element, `Ok(None)` once
/// the sequence is logically finished, and `Err` if a caller-supplied
/// stage function failed. A cursor does no upstream work beyond what a
/// single pull requires, which is what keeps unbounded sources usable.
pub trait Pull<T> {
    /// Produce the next element, or `None` at the end of the sequence.
    fn pull(&mut self) -> SeqResult<Option<T>>;
}

/// Factory producing a fresh, independent cursor per traversal.
type CursorFactory<T> = dyn Fn() -> Box<dyn Pull<T>> + Send + Sync;

/// A lazy, ordered sequence definition.
///
/// See the [module docs](self) for the laziness and restartability
/// contract. Cloning is shallow: both clones share the same stages, and
/// each still traverses independently.
pub struct Sequence<T> {
    make: Arc<CursorFactory<T>>,
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Sequence {
            make: Arc::clone(&self.make),
        }
    }
}

impl<T> Sequence<T> {
    pub(crate) fn from_factory(make: Arc<CursorFactory<T>>) -> Self {
        Sequence { make }
    }

    pub(crate) fn raw_cursor(&self) -> Box<dyn Pull<T>> {
        (self.make)()
    }

    /// Begin a fresh traversal.
    ///
    /// The returned [`Cursor`] can be pulled directly or driven as a
    /// standard iterator over `Result` items.
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self.raw_cursor())
    }
}
