//! Source-backed sequences

use std::sync::Arc;

use crate::error::{SeqError, SeqResult, StageKind};

use super::{Pull, Sequence};

impl<T> Sequence<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Unbounded source: the first element is `seed`, and each later
    /// element is `next_fn(&previous)`.
    ///
    /// Pulling never computes more elements than requested, so an
    /// unbounded source is safe as long as the chain is bounded by
    /// [`take_while`](Sequence::take_while) or [`take`](Sequence::take)
    /// before an exhaustive terminal operation runs. That bounding is a
    /// caller responsibility; the engine does not detect its absence.
    pub fn generate<F>(seed: T, next_fn: F) -> Self
    where
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        Self::try_generate(seed, move |prev| Ok(next_fn(prev)))
    }

    /// Fallible twin of [`Sequence::generate`].
    ///
    /// A `next_fn` error aborts the traversal it occurred in and surfaces
    /// from the terminal operation as
    /// [`SeqError::Stage`](crate::SeqError::Stage) with
    /// [`StageKind::Generate`](crate::StageKind::Generate).
    pub fn try_generate<F>(seed: T, next_fn: F) -> Self
    where
        F: Fn(&T) -> anyhow::Result<T> + Send + Sync + 'static,
    {
        let next_fn = Arc::new(next_fn);
        Sequence::from_factory(Arc::new(move || -> Box<dyn Pull<T>> {
            Box::new(GenerateCursor {
                next_fn: Arc::clone(&next_fn),
                seed: seed.clone(),
                prev: None,
                index: 0,
            })
        }))
    }

    /// Finite source backed by a vector.
    ///
    /// Elements are cloned out per traversal, so the definition stays
    /// restartable.
    pub fn from_items(items: Vec<T>) -> Self {
        let items = Arc::new(items);
        Sequence::from_factory(Arc::new(move || -> Box<dyn Pull<T>> {
            Box::new(ItemsCursor {
                items: Arc::clone(&items),
                pos: 0,
            })
        }))
    }
}

/// Cursor over a generated source. `prev` holds the last element produced;
/// `None` means the seed has not been emitted yet.
struct GenerateCursor<T, F> {
    next_fn: Arc<F>,
    seed: T,
    prev: Option<T>,
    index: usize,
}

impl<T, F> Pull<T> for GenerateCursor<T, F>
where
    T: Clone,
    F: Fn(&T) -> anyhow::Result<T>,
{
    fn pull(&mut self) -> SeqResult<Option<T>> {
        let produced = match self.prev.take() {
            None => self.seed.clone(),
            Some(prev) => (self.next_fn)(&prev)
                .map_err(|source| SeqError::stage(StageKind::Generate, self.index, source))?,
        };
        self.index += 1;
        self.prev = Some(produced.clone());
        Ok(Some(produced))
    }
}

struct ItemsCursor<T> {
    items: Arc<Vec<T>>,
    pos: usize,
}

impl<T: Clone> Pull<T> for ItemsCursor<T> {
    fn pull(&mut self) -> SeqResult<Option<T>> {
        match self.items.get(self.pos) {
            Some(item) => {
                self.pos += 1;
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }
}
