//! Deferred expressions
//!
//! This module provides the expression objects built by applying operators
//! to the placeholder:
//! - [`operation`]: a single deferred step with precedence and rendering
//! - [`chain`]: [`Expr`], an immutable linked chain of operations
//! - [`placeholder`]: [`Placeholder`], the identity expression and the
//!   operator entry points
//! - [`math`]: [`MathExpr`], the flat builder for arithmetic
//! - [`lambda`]: [`Lambda`], a single operation that cannot be extended
//!
//! # Evaluation Model
//!
//! Building an expression only records operations. Calling it replays them,
//! root to tip, against the one argument; operand types are checked at that
//! point, so an unsupported combination surfaces from the call and never
//! from construction.

pub mod chain;
pub mod lambda;
pub mod math;
pub mod operation;
pub mod placeholder;

use std::fmt;

use crate::errors::{Result, RuntimeError};
use crate::value::Value;

pub use chain::{Chain, Expr};
pub use lambda::Lambda;
pub use math::MathExpr;
pub use operation::Operation;
pub use placeholder::Placeholder;

/// A deferred function of exactly one argument
///
/// `Display` renders a descriptive form for debugging; it is not meant to be
/// parsed back.
pub trait Callable: fmt::Display {
    /// Replay the recorded operations against `input`
    fn apply(&self, input: Value) -> Result<Value>;

    /// Call with an argument list, rejecting anything but exactly one argument
    fn call(&self, args: &[Value]) -> Result<Value> {
        match args {
            [input] => self.apply(input.clone()),
            _ => Err(RuntimeError::ArgumentCountMismatch {
                expected: 1,
                got: args.len(),
            }),
        }
    }
}

/// A composable expression with a rendering precedence
pub trait Expression: Callable {
    /// Precedence of the outermost operation; 0 means atomic
    fn precedence(&self) -> u8;

    /// New expression that applies `self`, then `operation`
    fn combine_with(&self, operation: Operation) -> Expr;
}
