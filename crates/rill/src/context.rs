//! Evaluation context configuration

/// Configuration for expression evaluation.
///
/// Evaluation recurses once per tree level, so the depth limit doubles as
/// stack overflow protection for adversarially deep trees. Exceeding it is
/// a typed [`EvalError::DepthExceeded`](crate::EvalError::DepthExceeded),
/// never a process abort.
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Maximum tree depth (stack overflow protection)
    pub max_depth: usize,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}
