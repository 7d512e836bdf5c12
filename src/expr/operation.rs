//! A single deferred step
//!
//! [`Operation`] is the closed set of steps an expression can record. The
//! captured operand of a binary step sits on the [`Side`] opposite the
//! replayed input, so one variant covers both `operand OP input` and
//! `input OP operand`. For `&` and `|` this gives the four dual-dispatch
//! forms; see [`Operation::something_and`] and friends.

use crate::constants::{PRECEDENCE_ACCESS, PRECEDENCE_UNARY};
use crate::errors::Result;
use crate::ops::{BinOp, Side, UnOp};
use crate::value::Value;

/// A unary step applied to an intermediate value
#[derive(Debug, Clone)]
pub enum Operation {
    /// A binary operator with one operand captured at construction time
    Binary {
        op: BinOp,
        side: Side,
        operand: Value,
    },
    Unary(UnOp),
    /// Field lookup by (dotted) path
    Attr(String),
    /// Key or index lookup
    Item(Value),
}

impl Operation {
    pub fn binary(op: BinOp, side: Side, operand: impl Into<Value>) -> Self {
        Operation::Binary {
            op,
            side,
            operand: operand.into(),
        }
    }

    /// `<operand> & <input>`
    pub fn something_and(operand: impl Into<Value>) -> Self {
        Self::binary(BinOp::BitAnd, Side::Right, operand)
    }

    /// `<input> & <operand>`
    pub fn and_something(operand: impl Into<Value>) -> Self {
        Self::binary(BinOp::BitAnd, Side::Left, operand)
    }

    /// `<operand> | <input>`
    pub fn something_or(operand: impl Into<Value>) -> Self {
        Self::binary(BinOp::BitOr, Side::Right, operand)
    }

    /// `<input> | <operand>`
    pub fn or_something(operand: impl Into<Value>) -> Self {
        Self::binary(BinOp::BitOr, Side::Left, operand)
    }

    pub fn apply(&self, input: Value) -> Result<Value> {
        match self {
            Operation::Binary {
                op,
                side: Side::Left,
                operand,
            } => input.binary(*op, operand),
            Operation::Binary {
                op,
                side: Side::Right,
                operand,
            } => operand.binary(*op, &input),
            Operation::Unary(op) => input.unary(*op),
            Operation::Attr(path) => input.get_attr(path),
            Operation::Item(key) => input.get_item(key),
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Operation::Binary { op, .. } => op.precedence(),
            Operation::Unary(_) => PRECEDENCE_UNARY,
            Operation::Attr(_) | Operation::Item(_) => PRECEDENCE_ACCESS,
        }
    }

    /// Render this step given the textual form of its input
    pub fn render(&self, inner: &str) -> String {
        let (prefix, suffix) = self.affixes();
        format!("{}{}{}", prefix, inner, suffix)
    }

    /// Text written before and after the input's rendered form
    pub fn affixes(&self) -> (String, String) {
        match self {
            Operation::Binary {
                op: BinOp::DivMod,
                side: Side::Left,
                operand,
            } => ("divmod(".to_string(), format!(", {})", operand)),
            Operation::Binary {
                op: BinOp::DivMod,
                side: Side::Right,
                operand,
            } => (format!("divmod({}, ", operand), ")".to_string()),
            Operation::Binary {
                op,
                side: Side::Left,
                operand,
            } => (String::new(), format!(" {} {}", op.symbol(), operand)),
            Operation::Binary {
                op,
                side: Side::Right,
                operand,
            } => (format!("{} {} ", operand, op.symbol()), String::new()),
            Operation::Unary(op) => (op.symbol().to_string(), String::new()),
            Operation::Attr(path) => (String::new(), format!(".{}", path)),
            Operation::Item(key) => (String::new(), format!("[{}]", key)),
        }
    }
}
