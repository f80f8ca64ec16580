//! # Rill
//!
//! A pull-based lazy sequence engine paired with a small closed-variant
//! expression evaluator.
//!
//! Rill has two independent parts:
//!
//! - **Expression model & evaluator**: arithmetic expressions as a closed
//!   two-variant tree ([`Expr::Literal`], [`Expr::Sum`]), reduced by an
//!   exhaustive recursive evaluator. A tracing variant emits one record per
//!   node in a deterministic children-before-parent order.
//! - **Lazy sequence engine**: a [`Sequence`] is a cheap, immutable,
//!   restartable *definition* of an ordered series of values. Sources may
//!   be unbounded ([`Sequence::generate`]); stages (`map`, `filter`,
//!   `take_while`, `take`) wrap their upstream lazily; nothing is computed
//!   until a terminal operation pulls, one element at a time through the
//!   whole chain.
//!
//! The two compose only at the caller's discretion, e.g. evaluating one
//! expression per pulled element:
//!
//! ```
//! use rill::{Expr, Sequence};
//!
//! let trees = Sequence::from_items(vec![1i64, 2, 3])
//!     .map(|n| Expr::sum(Expr::literal(n), Expr::literal(10)));
//!
//! let results = trees
//!     .try_map(|tree| Ok(tree.evaluate()?))
//!     .to_list()
//!     .unwrap();
//!
//! assert_eq!(results, vec![11, 12, 13]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod expr;
pub mod seq;

// Re-export main types
pub use context::EvalContext;
pub use error::{EvalError, EvalResult, SeqError, SeqResult, StageKind};
pub use expr::{Expr, TraceEvent};
pub use seq::{Cursor, Pull, Sequence};

/// Rill version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
