//! Expression model and evaluator
//!
//! Arithmetic expressions form a closed two-variant tree: a leaf holding an
//! integer, or an interior node summing two subtrees. The evaluator matches
//! exhaustively over exactly these shapes, so extending the variant set
//! without updating it is a compile error rather than a silent default.

use std::fmt;

use crate::context::EvalContext;
use crate::error::{EvalError, EvalResult};

/// An arithmetic expression tree.
///
/// Trees are immutable once built, finite, and acyclic; a `Sum` node
/// exclusively owns its children. Evaluation is pure and never mutates the
/// tree, so a value may be evaluated any number of times.
///
/// # Example
///
/// ```
/// use rill::Expr;
///
/// // 1 + (2 + 3)
/// let tree = Expr::sum(Expr::literal(1), Expr::sum(Expr::literal(2), Expr::literal(3)));
/// assert_eq!(tree.evaluate().unwrap(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// A leaf holding an integer value
    Literal(i64),

    /// An interior node owning two child expressions
    Sum(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Build a literal leaf.
    pub fn literal(value: i64) -> Self {
        Expr::Literal(value)
    }

    /// Build a sum node from two subtrees.
    pub fn sum(left: Expr, right: Expr) -> Self {
        Expr::Sum(Box::new(left), Box::new(right))
    }

    /// Evaluate to an integer with the default context.
    ///
    /// A `Literal` yields its stored value; a `Sum` yields the sum of its
    /// children, left child evaluated before the right.
    pub fn evaluate(&self) -> EvalResult<i64> {
        self.evaluate_in(&EvalContext::default())
    }

    /// Evaluate with an explicit context.
    pub fn evaluate_in(&self, ctx: &EvalContext) -> EvalResult<i64> {
        eval_node(self, ctx, 0)
    }

    /// Evaluate with the default context, recording one [`TraceEvent`] per
    /// node visited.
    ///
    /// The result is identical to [`Expr::evaluate`]. Records appear
    /// children-before-parent: a `Sum` record is emitted after both of its
    /// children and carries their two results plus the computed total.
    pub fn evaluate_with_trace(&self) -> EvalResult<(i64, Vec<TraceEvent>)> {
        self.evaluate_with_trace_in(&EvalContext::default())
    }

    /// Tracing evaluation with an explicit context.
    pub fn evaluate_with_trace_in(&self, ctx: &EvalContext) -> EvalResult<(i64, Vec<TraceEvent>)> {
        let mut events = Vec::new();
        let result = eval_traced(self, ctx, 0, &mut events)?;
        Ok((result, events))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Literal(value)
    }
}

fn eval_node(expr: &Expr, ctx: &EvalContext, depth: usize) -> EvalResult<i64> {
    if depth >= ctx.max_depth {
        return Err(EvalError::DepthExceeded {
            limit: ctx.max_depth,
        });
    }

    match expr {
        Expr::Literal(value) => Ok(*value),

        Expr::Sum(left, right) => {
            let left = eval_node(left, ctx, depth + 1)?;
            let right = eval_node(right, ctx, depth + 1)?;
            left.checked_add(right)
                .ok_or(EvalError::IntegerOverflow { left, right })
        }
    }
}

fn eval_traced(
    expr: &Expr,
    ctx: &EvalContext,
    depth: usize,
    events: &mut Vec<TraceEvent>,
) -> EvalResult<i64> {
    if depth >= ctx.max_depth {
        return Err(EvalError::DepthExceeded {
            limit: ctx.max_depth,
        });
    }

    match expr {
        Expr::Literal(value) => {
            events.push(TraceEvent::Literal { value: *value });
            Ok(*value)
        }

        Expr::Sum(left, right) => {
            let left = eval_traced(left, ctx, depth + 1, events)?;
            let right = eval_traced(right, ctx, depth + 1, events)?;
            let total = left
                .checked_add(right)
                .ok_or(EvalError::IntegerOverflow { left, right })?;
            events.push(TraceEvent::Sum { left, right, total });
            Ok(total)
        }
    }
}

/// One record emitted per node visited by [`Expr::evaluate_with_trace`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraceEvent {
    /// A literal leaf was visited
    Literal {
        /// The stored value
        value: i64,
    },

    /// A sum node finished combining its children
    Sum {
        /// Result of the left child
        left: i64,
        /// Result of the right child
        right: i64,
        /// `left + right`
        total: i64,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Literal { value } => write!(f, "num: {value}"),
            TraceEvent::Sum { left, right, .. } => write!(f, "sum: {left} + {right}"),
        }
    }
}
