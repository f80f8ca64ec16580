//! Derived transformation stages
//!
//! Each stage wraps its upstream sequence plus one caller-supplied
//! function; the stage's cursor wraps the upstream's cursor and does work
//! only when pulled. No stage mutates the sequence it was derived from.

use std::sync::Arc;

use crate::error::{SeqError, SeqResult, StageKind};

use super::{Pull, Sequence};

impl<T: 'static> Sequence<T> {
    /// Derived sequence whose element *i* is `f(element i of self)`.
    ///
    /// `f` runs exactly once per element per traversal, and only when that
    /// position is pulled.
    pub fn map<U, F>(&self, f: F) -> Sequence<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        self.try_map(move |value| Ok(f(value)))
    }

    /// Fallible twin of [`Sequence::map`]; an `f` error aborts the
    /// traversal and surfaces from the terminal operation.
    pub fn try_map<U, F>(&self, f: F) -> Sequence<U>
    where
        U: 'static,
        F: Fn(T) -> anyhow::Result<U> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let f = Arc::new(f);
        Sequence::from_factory(Arc::new(move || -> Box<dyn Pull<U>> {
            Box::new(MapCursor {
                upstream: upstream.raw_cursor(),
                f: Arc::clone(&f),
                index: 0,
            })
        }))
    }

    /// Derived sequence keeping, in original order, only the elements
    /// satisfying `predicate`.
    ///
    /// The predicate runs at most once per upstream element per traversal,
    /// before that element is yielded downstream.
    pub fn filter<P>(&self, predicate: P) -> Sequence<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.try_filter(move |value| Ok(predicate(value)))
    }

    /// Fallible twin of [`Sequence::filter`].
    pub fn try_filter<P>(&self, predicate: P) -> Sequence<T>
    where
        P: Fn(&T) -> anyhow::Result<bool> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let predicate = Arc::new(predicate);
        Sequence::from_factory(Arc::new(move || -> Box<dyn Pull<T>> {
            Box::new(FilterCursor {
                upstream: upstream.raw_cursor(),
                predicate: Arc::clone(&predicate),
                index: 0,
            })
        }))
    }

    /// Derived sequence yielding upstream elements until `predicate` first
    /// fails.
    ///
    /// The failing element is pulled from upstream, tested, and excluded;
    /// the upstream is never advanced past it. This is what makes
    /// unbounded [`generate`](Sequence::generate) sources safe to consume
    /// with exhaustive terminals.
    pub fn take_while<P>(&self, predicate: P) -> Sequence<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.try_take_while(move |value| Ok(predicate(value)))
    }

    /// Fallible twin of [`Sequence::take_while`].
    pub fn try_take_while<P>(&self, predicate: P) -> Sequence<T>
    where
        P: Fn(&T) -> anyhow::Result<bool> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let predicate = Arc::new(predicate);
        Sequence::from_factory(Arc::new(move || -> Box<dyn Pull<T>> {
            Box::new(TakeWhileCursor {
                upstream: upstream.raw_cursor(),
                predicate: Arc::clone(&predicate),
                index: 0,
                done: false,
            })
        }))
    }

    /// Derived sequence yielding at most `n` upstream elements.
    ///
    /// The upstream is never advanced past the `n`th element; `take(0)`
    /// pulls nothing at all.
    pub fn take(&self, n: usize) -> Sequence<T> {
        let upstream = self.clone();
        Sequence::from_factory(Arc::new(move || -> Box<dyn Pull<T>> {
            Box::new(TakeCursor {
                upstream: upstream.raw_cursor(),
                remaining: n,
            })
        }))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Stage Cursors
// ═══════════════════════════════════════════════════════════════════════

struct MapCursor<T, F> {
    upstream: Box<dyn Pull<T>>,
    f: Arc<F>,
    index: usize,
}

impl<T, U, F> Pull<U> for MapCursor<T, F>
where
    F: Fn(T) -> anyhow::Result<U>,
{
    fn pull(&mut self) -> SeqResult<Option<U>> {
        match self.upstream.pull()? {
            None => Ok(None),
            Some(value) => {
                let mapped = (self.f)(value)
                    .map_err(|source| SeqError::stage(StageKind::Map, self.index, source))?;
                self.index += 1;
                Ok(Some(mapped))
            }
        }
    }
}

struct FilterCursor<T, P> {
    upstream: Box<dyn Pull<T>>,
    predicate: Arc<P>,
    index: usize,
}

impl<T, P> Pull<T> for FilterCursor<T, P>
where
    P: Fn(&T) -> anyhow::Result<bool>,
{
    fn pull(&mut self) -> SeqResult<Option<T>> {
        loop {
            let Some(value) = self.upstream.pull()? else {
                return Ok(None);
            };
            let keep = (self.predicate)(&value)
                .map_err(|source| SeqError::stage(StageKind::Filter, self.index, source))?;
            self.index += 1;
            if keep {
                return Ok(Some(value));
            }
        }
    }
}

struct TakeWhileCursor<T, P> {
    upstream: Box<dyn Pull<T>>,
    predicate: Arc<P>,
    index: usize,
    /// Set once the predicate fails or upstream ends; the upstream is
    /// never pulled again afterwards.
    done: bool,
}

impl<T, P> Pull<T> for TakeWhileCursor<T, P>
where
    P: Fn(&T) -> anyhow::Result<bool>,
{
    fn pull(&mut self) -> SeqResult<Option<T>> {
        if self.done {
            return Ok(None);
        }
        let Some(value) = self.upstream.pull()? else {
            self.done = true;
            return Ok(None);
        };
        let keep = (self.predicate)(&value)
            .map_err(|source| SeqError::stage(StageKind::TakeWhile, self.index, source))?;
        self.index += 1;
        if keep {
            Ok(Some(value))
        } else {
            self.done = true;
            Ok(None)
        }
    }
}

struct TakeCursor<T> {
    upstream: Box<dyn Pull<T>>,
    remaining: usize,
}

impl<T> Pull<T> for TakeCursor<T> {
    fn pull(&mut self) -> SeqResult<Option<T>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        match self.upstream.pull()? {
            None => {
                self.remaining = 0;
                Ok(None)
            }
            Some(value) => {
                self.remaining -= 1;
                Ok(Some(value))
            }
        }
    }
}
