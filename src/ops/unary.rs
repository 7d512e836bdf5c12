//! Unary operator evaluation

use crate::errors::{Result, RuntimeError};
use crate::ops::UnOp;
use crate::value::{Number, Value};

pub(crate) fn unary_op(value: &Value, op: UnOp) -> Result<Value> {
    let unsupported = || RuntimeError::UnsupportedUnary {
        op: op.symbol().to_string(),
        operand: value.type_name().to_string(),
    };

    match (op, value.as_number().ok_or_else(unsupported)?) {
        (UnOp::Neg, Number::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| RuntimeError::IntegerOverflow {
                operation: format!("-{}", n),
            }),
        (UnOp::Neg, Number::Float(x)) => Ok(Value::Float(-x)),
        (UnOp::Pos, Number::Int(n)) => Ok(Value::Int(n)),
        (UnOp::Pos, Number::Float(x)) => Ok(Value::Float(x)),
        (UnOp::Invert, Number::Int(n)) => Ok(Value::Int(!n)),
        (UnOp::Invert, Number::Float(_)) => Err(unsupported()),
    }
}
