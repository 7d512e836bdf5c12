//! Arithmetic expression builder
//!
//! [`MathExpr`] accumulates a flat, left-to-right list of arithmetic steps.
//! Unlike [`Expr`](crate::expr::Expr) it is a mutable builder: every
//! operator pushes one step and hands back the same instance, so an
//! arithmetic expression is meant to be written in one fluent statement and
//! never branched. Mutating one instance from several threads at once is
//! the caller's problem; ownership already rules it out for safe code.
//!
//! Calling it runs the first step on the raw input and folds the remaining
//! steps over the running result. Operator precedence plays no part: the
//! steps run in the order they were recorded.

use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};

use tracing::trace;

use crate::constants::PLACEHOLDER_TOKEN;
use crate::errors::{Result, RuntimeError};
use crate::expr::{Callable, Operation};
use crate::ops::{BinOp, Side};
use crate::value::Value;

/// Flat sequence of arithmetic steps
#[derive(Debug, Clone, Default)]
pub struct MathExpr {
    operations: Vec<Operation>,
}

impl MathExpr {
    /// An expression with no steps; calling it fails until one is recorded
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(mut self, op: BinOp, side: Side, operand: Value) -> Self {
        debug_assert!(op.is_arithmetic(), "not an arithmetic operator: {:?}", op);
        self.operations.push(Operation::Binary { op, side, operand });
        self
    }

    /// `self // rhs`
    pub fn floor_div(self, rhs: impl Into<Value>) -> Self {
        self.record(BinOp::FloorDiv, Side::Left, rhs.into())
    }

    /// `lhs // self`
    pub fn rfloor_div(self, lhs: impl Into<Value>) -> Self {
        self.record(BinOp::FloorDiv, Side::Right, lhs.into())
    }

    /// `self ** rhs`
    pub fn pow(self, rhs: impl Into<Value>) -> Self {
        self.record(BinOp::Pow, Side::Left, rhs.into())
    }

    /// `lhs ** self`
    pub fn rpow(self, lhs: impl Into<Value>) -> Self {
        self.record(BinOp::Pow, Side::Right, lhs.into())
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Callable for MathExpr {
    fn apply(&self, input: Value) -> Result<Value> {
        let (first, rest) = self
            .operations
            .split_first()
            .ok_or(RuntimeError::EmptyExpression)?;

        trace!(steps = self.operations.len(), "folding arithmetic expression");
        rest.iter()
            .try_fold(first.apply(input)?, |partial, operation| operation.apply(partial))
    }
}

impl fmt::Display for MathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Every step after the first wraps the running form in parentheses,
        // since the fold order is not the host precedence order
        let rendered = self
            .operations
            .iter()
            .enumerate()
            .fold(PLACEHOLDER_TOKEN.to_string(), |inner, (i, operation)| {
                if i == 0 {
                    operation.render(&inner)
                } else {
                    operation.render(&format!("({})", inner))
                }
            });
        f.write_str(&rendered)
    }
}

macro_rules! impl_math_ops {
    ($(($trait:ident, $method:ident, $op:expr)),*) => {$(
        impl<V: Into<Value>> $trait<V> for MathExpr {
            type Output = MathExpr;

            fn $method(self, rhs: V) -> MathExpr {
                self.record($op, Side::Left, rhs.into())
            }
        }

        impl_math_ops!(@reflected $trait, $method, $op, i64, f64, Value);
    )*};
    (@reflected $trait:ident, $method:ident, $op:expr, $($operand:ty),*) => {$(
        impl $trait<MathExpr> for $operand {
            type Output = MathExpr;

            fn $method(self, rhs: MathExpr) -> MathExpr {
                rhs.record($op, Side::Right, self.into())
            }
        }
    )*};
}

impl_math_ops!(
    (Add, add, BinOp::Add),
    (Sub, sub, BinOp::Sub),
    (Mul, mul, BinOp::Mul),
    (Div, div, BinOp::TrueDiv),
    (Rem, rem, BinOp::Mod)
);
