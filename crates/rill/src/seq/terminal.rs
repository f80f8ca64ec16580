//! Terminal operations
//!
//! Terminals are the only calls that make a sequence do work: each one
//! begins a fresh traversal and pulls until the sequence logically ends, a
//! short-circuit condition is met, or a stage fails. Exhaustive terminals
//! (`to_list`, `sum`, `count`, `fold`, `for_each`, and `all` with a
//! never-failing predicate) never return on an unbounded source that was
//! not first bounded by `take_while` or `take`; bounding is a caller
//! responsibility the engine does not police.

use std::ops::Add;

use crate::error::SeqResult;

use super::{Pull, Sequence};

/// A single in-progress traversal of a sequence definition.
///
/// Obtained from [`Sequence::cursor`]. Pull elements directly with
/// [`Cursor::pull`], or drive it as a standard iterator over
/// `Result` items:
///
/// ```
/// use rill::Sequence;
///
/// let squares = Sequence::from_items(vec![1, 2, 3]).map(|n| n * n);
/// let collected: Result<Vec<i32>, _> = squares.cursor().collect();
/// assert_eq!(collected.unwrap(), vec![1, 4, 9]);
/// ```
pub struct Cursor<T> {
    inner: Box<dyn Pull<T>>,
    finished: bool,
}

impl<T> Cursor<T> {
    pub(crate) fn new(inner: Box<dyn Pull<T>>) -> Self {
        Cursor {
            inner,
            finished: false,
        }
    }

    /// Pull the next element.
    ///
    /// After the first `Ok(None)` or `Err`, the cursor is finished and all
    /// further pulls return `Ok(None)` without touching the chain.
    pub fn pull(&mut self) -> SeqResult<Option<T>> {
        if self.finished {
            return Ok(None);
        }
        match self.inner.pull() {
            Ok(Some(value)) => Ok(Some(value)),
            Ok(None) => {
                self.finished = true;
                Ok(None)
            }
            Err(err) => {
                self.finished = true;
                Err(err)
            }
        }
    }
}

impl<T> Iterator for Cursor<T> {
    type Item = SeqResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pull().transpose()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Terminal Operations
// ═══════════════════════════════════════════════════════════════════════

impl<T: 'static> Sequence<T> {
    /// Left fold over a fresh traversal.
    pub fn fold<A, F>(&self, init: A, mut f: F) -> SeqResult<A>
    where
        F: FnMut(A, T) -> A,
    {
        let mut cursor = self.cursor();
        let mut acc = init;
        while let Some(value) = cursor.pull()? {
            acc = f(acc, value);
        }
        Ok(acc)
    }

    /// Run `f` on every element of a fresh traversal.
    pub fn for_each<F>(&self, mut f: F) -> SeqResult<()>
    where
        F: FnMut(T),
    {
        self.fold((), |(), value| f(value))
    }

    /// Materialize the sequence into a vector, in order.
    ///
    /// Unbounded-unsafe: never returns on an unbounded source (see the
    /// [module docs](crate::seq)).
    pub fn to_list(&self) -> SeqResult<Vec<T>> {
        self.fold(Vec::new(), |mut acc, value| {
            acc.push(value);
            acc
        })
    }

    /// Count the elements. Unbounded-unsafe.
    pub fn count(&self) -> SeqResult<usize> {
        self.fold(0, |n, _| n + 1)
    }

    /// Sum the elements, starting from `T::default()`. Unbounded-unsafe.
    pub fn sum(&self) -> SeqResult<T>
    where
        T: Add<Output = T> + Default,
    {
        self.fold(T::default(), |acc, value| acc + value)
    }

    /// Whether any element satisfies `predicate`.
    ///
    /// Short-circuits on the first match; pulls nothing further.
    pub fn any<P>(&self, mut predicate: P) -> SeqResult<bool>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.cursor();
        while let Some(value) = cursor.pull()? {
            if predicate(&value) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether every element satisfies `predicate`.
    ///
    /// Short-circuits on the first counterexample; pulls nothing further.
    pub fn all<P>(&self, mut predicate: P) -> SeqResult<bool>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.cursor();
        while let Some(value) = cursor.pull()? {
            if !predicate(&value) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The first element satisfying `predicate`, if any.
    ///
    /// Short-circuits: never scans further than the match, which makes it
    /// safe on an unbounded source as long as a match exists.
    pub fn find<P>(&self, mut predicate: P) -> SeqResult<Option<T>>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.cursor();
        while let Some(value) = cursor.pull()? {
            if predicate(&value) {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}
