//! The placeholder expression and its operator surface
//!
//! [`Placeholder`] is the identity expression: calling it returns the
//! argument unchanged, and it renders as `_`. Every operator applied to it
//! records a deferred step instead of computing anything:
//!
//! | Operators                                   | Result       |
//! |---------------------------------------------|--------------|
//! | `&`, `\|` (either side)                     | [`Expr`]     |
//! | `+ - * / %`, `floor_div`, `pow` (either side)| [`MathExpr`] |
//! | `^ << >>`, `divmod` (either side)           | [`Lambda`]   |
//! | `lt le gt ge eq ne`, `-`, `pos`, `!` (`~`)  | [`Lambda`]   |
//! | `attr`, `item`                              | [`Lambda`]   |
//!
//! Only `&` and `|` build chains that can be extended further; the other
//! operators record a single step.

// `eq`, `lt` and friends build deferred comparisons, not `bool`s
#![allow(clippy::should_implement_trait)]

use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

use crate::constants::{PLACEHOLDER_TOKEN, PRECEDENCE_ATOMIC};
use crate::errors::Result;
use crate::expr::{Callable, Expr, Expression, Lambda, MathExpr, Operation};
use crate::ops::{BinOp, Side, UnOp};
use crate::value::Value;

/// The identity expression
#[derive(Debug, Clone, Copy, Default)]
pub struct Placeholder;

impl Placeholder {
    fn lambda(op: BinOp, side: Side, operand: impl Into<Value>) -> Lambda {
        Lambda::new(Operation::binary(op, side, operand))
    }

    /// `_.path`, resolving dotted paths one field at a time
    pub fn attr(self, path: impl Into<String>) -> Lambda {
        Lambda::new(Operation::Attr(path.into()))
    }

    /// `_[key]`
    pub fn item(self, key: impl Into<Value>) -> Lambda {
        Lambda::new(Operation::Item(key.into()))
    }

    /// `_ < other`
    pub fn lt(self, other: impl Into<Value>) -> Lambda {
        Self::lambda(BinOp::Lt, Side::Left, other)
    }

    /// `_ <= other`
    pub fn le(self, other: impl Into<Value>) -> Lambda {
        Self::lambda(BinOp::Le, Side::Left, other)
    }

    /// `_ > other`
    pub fn gt(self, other: impl Into<Value>) -> Lambda {
        Self::lambda(BinOp::Gt, Side::Left, other)
    }

    /// `_ >= other`
    pub fn ge(self, other: impl Into<Value>) -> Lambda {
        Self::lambda(BinOp::Ge, Side::Left, other)
    }

    /// `_ == other`
    pub fn eq(self, other: impl Into<Value>) -> Lambda {
        Self::lambda(BinOp::Eq, Side::Left, other)
    }

    /// `_ != other`
    pub fn ne(self, other: impl Into<Value>) -> Lambda {
        Self::lambda(BinOp::Ne, Side::Left, other)
    }

    /// `divmod(_, other)`
    pub fn divmod(self, other: impl Into<Value>) -> Lambda {
        Self::lambda(BinOp::DivMod, Side::Left, other)
    }

    /// `divmod(other, _)`
    pub fn rdivmod(self, other: impl Into<Value>) -> Lambda {
        Self::lambda(BinOp::DivMod, Side::Right, other)
    }

    /// `+_`
    pub fn pos(self) -> Lambda {
        Lambda::new(Operation::Unary(UnOp::Pos))
    }

    /// `_ // rhs`
    pub fn floor_div(self, rhs: impl Into<Value>) -> MathExpr {
        MathExpr::new().floor_div(rhs)
    }

    /// `lhs // _`
    pub fn rfloor_div(self, lhs: impl Into<Value>) -> MathExpr {
        MathExpr::new().rfloor_div(lhs)
    }

    /// `_ ** rhs`
    pub fn pow(self, rhs: impl Into<Value>) -> MathExpr {
        MathExpr::new().pow(rhs)
    }

    /// `lhs ** _`
    pub fn rpow(self, lhs: impl Into<Value>) -> MathExpr {
        MathExpr::new().rpow(lhs)
    }
}

impl Callable for Placeholder {
    fn apply(&self, input: Value) -> Result<Value> {
        Ok(input)
    }
}

impl Expression for Placeholder {
    fn precedence(&self) -> u8 {
        PRECEDENCE_ATOMIC
    }

    fn combine_with(&self, operation: Operation) -> Expr {
        Expr::Placeholder.combine_with(operation)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PLACEHOLDER_TOKEN)
    }
}

impl<V: Into<Value>> BitAnd<V> for Placeholder {
    type Output = Expr;

    fn bitand(self, rhs: V) -> Expr {
        self.combine_with(Operation::and_something(rhs))
    }
}

impl<V: Into<Value>> BitOr<V> for Placeholder {
    type Output = Expr;

    fn bitor(self, rhs: V) -> Expr {
        self.combine_with(Operation::or_something(rhs))
    }
}

impl Neg for Placeholder {
    type Output = Lambda;

    fn neg(self) -> Lambda {
        Lambda::new(Operation::Unary(UnOp::Neg))
    }
}

/// `!_` stands in for the bitwise invert `~_`
impl Not for Placeholder {
    type Output = Lambda;

    fn not(self) -> Lambda {
        Lambda::new(Operation::Unary(UnOp::Invert))
    }
}

// `operand & _` and `operand | _`
macro_rules! impl_reflected_dual_ops {
    ($($operand:ty),*) => {$(
        impl BitAnd<Placeholder> for $operand {
            type Output = Expr;

            fn bitand(self, rhs: Placeholder) -> Expr {
                rhs.combine_with(Operation::something_and(self))
            }
        }

        impl BitOr<Placeholder> for $operand {
            type Output = Expr;

            fn bitor(self, rhs: Placeholder) -> Expr {
                rhs.combine_with(Operation::something_or(self))
            }
        }
    )*};
}

impl_reflected_dual_ops!(i64, bool, Value);

// Single-step operators, placeholder on either side
macro_rules! impl_lambda_ops {
    ($(($trait:ident, $method:ident, $op:expr)),*) => {$(
        impl<V: Into<Value>> $trait<V> for Placeholder {
            type Output = Lambda;

            fn $method(self, rhs: V) -> Lambda {
                Placeholder::lambda($op, Side::Left, rhs)
            }
        }

        impl_lambda_ops!(@reflected $trait, $method, $op, i64, bool, Value);
    )*};
    (@reflected $trait:ident, $method:ident, $op:expr, $($operand:ty),*) => {$(
        impl $trait<Placeholder> for $operand {
            type Output = Lambda;

            fn $method(self, _rhs: Placeholder) -> Lambda {
                Placeholder::lambda($op, Side::Right, self)
            }
        }
    )*};
}

impl_lambda_ops!(
    (BitXor, bitxor, BinOp::BitXor),
    (Shl, shl, BinOp::Shl),
    (Shr, shr, BinOp::Shr)
);

// Arithmetic starts a new builder, placeholder on either side
macro_rules! impl_math_entry_ops {
    ($(($trait:ident, $method:ident)),*) => {$(
        impl<V: Into<Value>> $trait<V> for Placeholder {
            type Output = MathExpr;

            fn $method(self, rhs: V) -> MathExpr {
                $trait::$method(MathExpr::new(), rhs)
            }
        }

        impl_math_entry_ops!(@reflected $trait, $method, i64, f64, Value);
    )*};
    (@reflected $trait:ident, $method:ident, $($operand:ty),*) => {$(
        impl $trait<Placeholder> for $operand {
            type Output = MathExpr;

            fn $method(self, _rhs: Placeholder) -> MathExpr {
                $trait::$method(self, MathExpr::new())
            }
        }
    )*};
}

impl_math_entry_ops!((Add, add), (Sub, sub), (Mul, mul), (Div, div), (Rem, rem));
