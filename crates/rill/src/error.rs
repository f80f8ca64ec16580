//! Error types for expression evaluation and sequence traversal

use std::fmt;

use thiserror::Error;

/// Errors produced while evaluating an expression tree.
///
/// The expression variant set is closed and matched exhaustively, so an
/// "unknown variant" failure is a compile-time impossibility; the runtime
/// errors that remain guard the two resources evaluation actually consumes:
/// stack depth and integer range.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Expression nesting exceeded the context's depth limit
    #[error("expression nesting exceeds the depth limit of {limit}")]
    DepthExceeded {
        /// The configured limit that was exceeded
        limit: usize,
    },

    /// Combining two subtree results overflowed `i64`
    #[error("integer overflow computing {left} + {right}")]
    IntegerOverflow {
        /// Result of the left subtree
        left: i64,
        /// Result of the right subtree
        right: i64,
    },
}

/// Identifies the sequence stage a pull failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StageKind {
    /// The generator function of a source-backed sequence
    Generate,
    /// A `map` transformation function
    Map,
    /// A `filter` predicate
    Filter,
    /// A `take_while` predicate
    TakeWhile,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StageKind::Generate => "generate",
            StageKind::Map => "map",
            StageKind::Filter => "filter",
            StageKind::TakeWhile => "take_while",
        };
        f.write_str(name)
    }
}

/// Errors produced while pulling elements through a sequence chain.
///
/// A failure aborts the traversal it occurred in; side effects from
/// elements already pulled are not undone, and the sequence *definition*
/// remains valid for fresh traversals.
#[derive(Error, Debug)]
pub enum SeqError {
    /// A caller-supplied stage function failed during a pull
    #[error("{kind} stage failed on element {index}: {source}")]
    Stage {
        /// Which stage failed
        kind: StageKind,
        /// Zero-based position of the element at that stage
        index: usize,
        /// The underlying failure
        #[source]
        source: anyhow::Error,
    },
}

impl SeqError {
    /// Wrap a caller-supplied function's failure with its stage location.
    pub(crate) fn stage(kind: StageKind, index: usize, source: anyhow::Error) -> Self {
        SeqError::Stage {
            kind,
            index,
            source,
        }
    }
}

/// Result type alias for expression evaluation.
pub type EvalResult<T> = std::result::Result<T, EvalError>;

/// Result type alias for sequence traversal.
pub type SeqResult<T> = std::result::Result<T, SeqError>;
