//! Runtime error types for expression replay
//!
//! This module defines [`RuntimeError`], which represents every failure an
//! expression can produce when it is called. Building an expression never
//! fails: operand types are only checked once the recorded operations are
//! replayed against a live input.
//!
//! Errors are returned to the caller as-is. Nothing is retried, recovered or
//! logged internally.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Errors that can occur while calling an expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Neither operand knows how to apply the operator
    #[error("Unsupported operand type(s) for {op}: '{left}' and '{right}'")]
    UnsupportedOperation {
        op: String,
        left: String,
        right: String,
    },

    /// The operand does not support the unary operator
    #[error("Bad operand type for unary {op}: '{operand}'")]
    UnsupportedUnary { op: String, operand: String },

    /// An arithmetic expression was called before any step was recorded
    #[error("Arithmetic expression has no recorded operations")]
    EmptyExpression,

    /// Expressions take exactly one argument
    #[error("Expression expects {expected} argument{}, got {got}", plural(.expected))]
    ArgumentCountMismatch { expected: usize, got: usize },

    /// Division, floor division or modulo by zero
    #[error("{operation}")]
    DivisionError { operation: String },

    /// Integer result does not fit in 64 bits
    #[error("Integer overflow in operation: {operation}")]
    IntegerOverflow { operation: String },

    /// Real power whose result would be complex, e.g. `(-1) ** 0.5`
    #[error("Complex result in operation: {operation}")]
    ComplexResult { operation: String },

    /// Repetition would build a sequence too large to allocate
    #[error("Cannot repeat a sequence of length {len} by {times}")]
    SequenceTooLong { len: usize, times: i64 },

    /// Shift by a negative count
    #[error("Negative shift count")]
    NegativeShift,

    /// Field lookup on a value without that field
    #[error("'{type_name}' object has no attribute '{name}'")]
    MissingAttribute { type_name: String, name: String },

    /// Key lookup on a record without that key
    #[error("Key not found: {key}")]
    MissingKey { key: String },

    /// Sequence index outside the sequence
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    /// Key lookup on a value that cannot be indexed
    #[error("'{type_name}' object is not subscriptable")]
    NotSubscriptable { type_name: String },
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}
