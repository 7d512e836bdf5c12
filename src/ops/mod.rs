//! Operator protocol on runtime values
//!
//! This module is the single source of truth for what every operator symbol
//! does to its operands:
//! - [`arith`]: `+ - * / // % **` and `divmod`
//! - [`binary`]: bitwise, shift and comparison operators
//! - [`unary`]: `-`, `+` and `~`
//! - [`access`]: field and key lookup
//!
//! # Dispatch Order
//!
//! For `left OP right`:
//!
//! ```text
//! left.binary_op(OP, right)  →  right.reflected_op(OP, left)  →  builtin rule  →  UnsupportedOperation
//! ```
//!
//! The first two steps only apply to [`Value::Object`] operands. A hook that
//! returns `None` passes the decision on to the next step.

pub mod access;
pub mod arith;
pub mod binary;
pub mod unary;

use crate::constants::*;
use crate::errors::{Result, RuntimeError};
use crate::value::Value;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    TrueDiv,
    FloorDiv,
    Mod,
    Pow,
    DivMod,
    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    // Comparison
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnOp {
    Neg,    // -x
    Pos,    // +x
    Invert, // ~x
}

/// Where the replayed input sits relative to the captured operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// `<input> OP <operand>`
    Left,
    /// `<operand> OP <input>`
    Right,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::TrueDiv => "/",
            BinOp::FloorDiv => "//",
            BinOp::Mod => "%",
            BinOp::Pow => "**",
            BinOp::DivMod => "divmod",
            BinOp::BitAnd => "&",
            BinOp::BitOr => "|",
            BinOp::BitXor => "^",
            BinOp::Shl => "<<",
            BinOp::Shr => ">>",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Pow => PRECEDENCE_POWER,
            BinOp::Mul | BinOp::TrueDiv | BinOp::FloorDiv | BinOp::Mod => {
                PRECEDENCE_MULTIPLICATIVE
            }
            BinOp::Add | BinOp::Sub => PRECEDENCE_ADDITIVE,
            BinOp::Shl | BinOp::Shr => PRECEDENCE_SHIFT,
            BinOp::BitAnd => PRECEDENCE_BIT_AND,
            BinOp::BitXor => PRECEDENCE_BIT_XOR,
            BinOp::BitOr => PRECEDENCE_BIT_OR,
            BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge | BinOp::Eq | BinOp::Ne => {
                PRECEDENCE_COMPARISON
            }
            // Rendered as a call, so it is atomic
            BinOp::DivMod => PRECEDENCE_ATOMIC,
        }
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinOp::Add
                | BinOp::Sub
                | BinOp::Mul
                | BinOp::TrueDiv
                | BinOp::FloorDiv
                | BinOp::Mod
                | BinOp::Pow
        )
    }
}

impl UnOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::Neg => "-",
            UnOp::Pos => "+",
            UnOp::Invert => "~",
        }
    }
}

impl Value {
    /// Evaluate `self OP right` with the full dispatch protocol
    pub fn binary(&self, op: BinOp, right: &Value) -> Result<Value> {
        if let Value::Object(object) = self {
            if let Some(result) = object.binary_op(op, right) {
                return result;
            }
        }
        if let Value::Object(object) = right {
            if let Some(result) = object.reflected_op(op, self) {
                return result;
            }
        }

        let builtin = match op {
            BinOp::Add => arith::checked_add_values(self, right),
            BinOp::Sub => arith::checked_sub_values(self, right),
            BinOp::Mul => arith::checked_mul_values(self, right),
            BinOp::TrueDiv => arith::true_div_values(self, right),
            BinOp::FloorDiv => arith::floor_div_values(self, right),
            BinOp::Mod => arith::mod_values(self, right),
            BinOp::Pow => arith::pow_values(self, right),
            BinOp::DivMod => arith::divmod_values(self, right),

            BinOp::Eq => Some(Ok(Value::Bool(self == right))),
            BinOp::Ne => Some(Ok(Value::Bool(self != right))),
            BinOp::Lt => binary::compare_values(self, right, |o| o.is_lt()),
            BinOp::Le => binary::compare_values(self, right, |o| o.is_le()),
            BinOp::Gt => binary::compare_values(self, right, |o| o.is_gt()),
            BinOp::Ge => binary::compare_values(self, right, |o| o.is_ge()),

            BinOp::BitAnd | BinOp::BitOr | BinOp::BitXor => binary::bitwise_op(self, right, op),
            BinOp::Shl | BinOp::Shr => binary::shift_op(self, right, op),
        };

        builtin.unwrap_or_else(|| {
            Err(RuntimeError::UnsupportedOperation {
                op: op.symbol().to_string(),
                left: self.type_name().to_string(),
                right: right.type_name().to_string(),
            })
        })
    }

    /// Evaluate `OP self`
    pub fn unary(&self, op: UnOp) -> Result<Value> {
        if let Value::Object(object) = self {
            if let Some(result) = object.unary_op(op) {
                return result;
            }
        }
        unary::unary_op(self, op)
    }
}
