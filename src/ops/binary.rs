//! Bitwise, shift and comparison operators

use std::cmp::Ordering;

use crate::errors::{Result, RuntimeError};
use crate::ops::BinOp;
use crate::value::Value;

/// Ordering between two values.
///
/// Outer `None`: the types cannot be ordered at all. Inner `None`: they can,
/// but this pair is unordered (a NaN is involved).
fn ordering(left: &Value, right: &Value) -> Option<Option<Ordering>> {
    if let (Some(a), Some(b)) = (left.as_number(), right.as_number()) {
        return Some(a.compare(b));
    }

    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Some(Some(a.cmp(b))),
        (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => {
            // Lexicographic: first differing element decides, then length
            for (x, y) in a.iter().zip(b.iter()) {
                if x != y {
                    return ordering(x, y);
                }
            }
            Some(Some(a.len().cmp(&b.len())))
        }
        _ => None,
    }
}

#[inline]
pub(crate) fn compare_values<F>(left: &Value, right: &Value, cmp: F) -> Option<Result<Value>>
where
    F: Fn(Ordering) -> bool,
{
    let result = ordering(left, right)?.is_some_and(cmp);
    Some(Ok(Value::Bool(result)))
}

#[inline]
pub(crate) fn bitwise_op(left: &Value, right: &Value, op: BinOp) -> Option<Result<Value>> {
    if let (Value::Bool(a), Value::Bool(b)) = (left, right) {
        let result = match op {
            BinOp::BitAnd => a & b,
            BinOp::BitOr => a | b,
            BinOp::BitXor => a ^ b,
            _ => unreachable!("not a bitwise operator: {:?}", op),
        };
        return Some(Ok(Value::Bool(result)));
    }

    let (a, b) = (left.as_index()?, right.as_index()?);
    let result = match op {
        BinOp::BitAnd => a & b,
        BinOp::BitOr => a | b,
        BinOp::BitXor => a ^ b,
        _ => unreachable!("not a bitwise operator: {:?}", op),
    };
    Some(Ok(Value::Int(result)))
}

#[inline]
pub(crate) fn shift_op(left: &Value, right: &Value, op: BinOp) -> Option<Result<Value>> {
    let (a, b) = (left.as_index()?, right.as_index()?);
    if b < 0 {
        return Some(Err(RuntimeError::NegativeShift));
    }

    let result = match op {
        BinOp::Shl => {
            if a == 0 {
                Ok(0)
            } else {
                // Shifting any set bit past the sign bit changes the value
                u32::try_from(b)
                    .ok()
                    .filter(|&n| n < 64)
                    .map(|n| (a << n, n))
                    .filter(|&(shifted, n)| shifted >> n == a)
                    .map(|(shifted, _)| shifted)
                    .ok_or_else(|| RuntimeError::IntegerOverflow {
                        operation: format!("{} << {}", a, b),
                    })
            }
        }
        BinOp::Shr => Ok(a >> b.min(63)),
        _ => unreachable!("not a shift operator: {:?}", op),
    };
    Some(result.map(Value::Int))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_bitwise_stays_bool() {
        assert_eq!(
            bitwise_op(&Value::Bool(true), &Value::Bool(false), BinOp::BitOr),
            Some(Ok(Value::Bool(true)))
        );
        assert_eq!(
            bitwise_op(&Value::Bool(true), &Value::Int(6), BinOp::BitAnd),
            Some(Ok(Value::Int(0)))
        );
        assert!(bitwise_op(&Value::Float(1.0), &Value::Int(1), BinOp::BitAnd).is_none());
    }

    #[test]
    fn test_shifts() {
        assert_eq!(
            shift_op(&Value::Int(1), &Value::Int(62), BinOp::Shl),
            Some(Ok(Value::Int(1 << 62)))
        );
        assert!(matches!(
            shift_op(&Value::Int(3), &Value::Int(63), BinOp::Shl),
            Some(Err(RuntimeError::IntegerOverflow { .. }))
        ));
        assert_eq!(
            shift_op(&Value::Int(-8), &Value::Int(100), BinOp::Shr),
            Some(Ok(Value::Int(-1)))
        );
        assert_eq!(
            shift_op(&Value::Int(1), &Value::Int(-1), BinOp::Shl),
            Some(Err(RuntimeError::NegativeShift))
        );
    }

    #[test]
    fn test_sequence_ordering() {
        let short = Value::List(vec![Value::Int(1), Value::Int(2)]);
        let long = Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(0)]);
        assert_eq!(
            compare_values(&short, &long, |o| o.is_lt()),
            Some(Ok(Value::Bool(true)))
        );
        assert_eq!(
            compare_values(&Value::from("b"), &Value::from("a"), |o| o.is_gt()),
            Some(Ok(Value::Bool(true)))
        );
        assert!(compare_values(&Value::from("a"), &Value::Int(1), |o| o.is_lt()).is_none());
    }

    #[test]
    fn test_nan_compares_false() {
        assert_eq!(
            compare_values(&Value::Float(f64::NAN), &Value::Int(1), |o| o.is_le()),
            Some(Ok(Value::Bool(false)))
        );
    }
}
