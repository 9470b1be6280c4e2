// ABOUTME: Error types for evaluation failures in the Lisp interpreter

use thiserror::Error;

/// The interpreter recognizes exactly three kinds of failure (spec.md §7):
/// malformed text that never became a datum, a symbol with no binding, and
/// every other failure discovered during evaluation (arity, type, and
/// division-by-zero all collapse into `Runtime`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpError {
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("unbound name: {0}")]
    Name(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}

impl InterpError {
    pub fn syntax(message: impl Into<String>) -> Self {
        InterpError::Syntax(message.into())
    }

    pub fn name(symbol: impl Into<String>) -> Self {
        InterpError::Name(symbol.into())
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        InterpError::Runtime(message.into())
    }
}
