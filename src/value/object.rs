//! User-defined operands
//!
//! [`Object`] is the capability interface for values the crate does not know
//! about. Each hook returns `None` when the object does not support the
//! operation for the given argument; the operator protocol then tries the
//! other operand, then the builtin rules, and finally reports
//! [`RuntimeError::UnsupportedOperation`](crate::errors::RuntimeError).

use std::fmt;

use crate::errors::Result;
use crate::ops::{BinOp, UnOp};
use crate::value::Value;

/// Operator and lookup hooks for a user-defined operand
///
/// Only [`Object::type_name`] is required. A hook returning `None` means
/// "not supported for this argument", which is different from returning
/// `Some(Err(..))`: the former lets the other operand try, the latter fails
/// the call immediately.
pub trait Object: fmt::Debug + Send + Sync {
    /// Name used in error messages
    fn type_name(&self) -> &str;

    /// Representation used when an expression renders this operand
    fn repr(&self) -> String {
        format!("<{} object>", self.type_name())
    }

    /// `self OP other`
    fn binary_op(&self, _op: BinOp, _other: &Value) -> Option<Result<Value>> {
        None
    }

    /// `other OP self`, tried when the left operand declined
    fn reflected_op(&self, _op: BinOp, _other: &Value) -> Option<Result<Value>> {
        None
    }

    fn unary_op(&self, _op: UnOp) -> Option<Result<Value>> {
        None
    }

    fn get_attr(&self, _name: &str) -> Option<Value> {
        None
    }

    fn get_item(&self, _key: &Value) -> Option<Result<Value>> {
        None
    }

    /// Equality against another value; `None` falls back to identity
    fn eq_value(&self, _other: &Value) -> Option<bool> {
        None
    }
}
