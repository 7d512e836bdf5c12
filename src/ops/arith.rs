//! Arithmetic operators
//!
//! Numbers promote `bool → int → float`. Integer arithmetic is checked and
//! reports [`RuntimeError::IntegerOverflow`] instead of wrapping. True
//! division always produces a float; floor division and modulo round toward
//! negative infinity, so the remainder takes the sign of the divisor.
//!
//! Every function returns `None` when no builtin rule covers the operand
//! types, leaving the error to the dispatcher.

use crate::constants::MAX_REPEAT_LEN;
use crate::errors::{Result, RuntimeError};
use crate::value::{Number, Value};

fn overflow(operation: String) -> RuntimeError {
    RuntimeError::IntegerOverflow { operation }
}

fn division_error(message: &str) -> RuntimeError {
    RuntimeError::DivisionError {
        operation: message.to_string(),
    }
}

fn numbers(left: &Value, right: &Value) -> Option<(Number, Number)> {
    Some((left.as_number()?, right.as_number()?))
}

pub(crate) fn checked_add_values(left: &Value, right: &Value) -> Option<Result<Value>> {
    if let Some(pair) = numbers(left, right) {
        return Some(match pair {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map(Value::Int)
                .ok_or_else(|| overflow(format!("{} + {}", a, b))),
            (a, b) => Ok(Value::Float(a.to_f64() + b.to_f64())),
        });
    }

    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Some(Ok(Value::Str(format!("{}{}", a, b)))),
        (Value::List(a), Value::List(b)) => Some(Ok(Value::List([a.as_slice(), b.as_slice()].concat()))),
        (Value::Tuple(a), Value::Tuple(b)) => Some(Ok(Value::Tuple([a.as_slice(), b.as_slice()].concat()))),
        _ => None,
    }
}

pub(crate) fn checked_sub_values(left: &Value, right: &Value) -> Option<Result<Value>> {
    Some(match numbers(left, right)? {
        (Number::Int(a), Number::Int(b)) => a
            .checked_sub(b)
            .map(Value::Int)
            .ok_or_else(|| overflow(format!("{} - {}", a, b))),
        (a, b) => Ok(Value::Float(a.to_f64() - b.to_f64())),
    })
}

pub(crate) fn checked_mul_values(left: &Value, right: &Value) -> Option<Result<Value>> {
    if let Some(pair) = numbers(left, right) {
        return Some(match pair {
            (Number::Int(a), Number::Int(b)) => a
                .checked_mul(b)
                .map(Value::Int)
                .ok_or_else(|| overflow(format!("{} * {}", a, b))),
            (a, b) => Ok(Value::Float(a.to_f64() * b.to_f64())),
        });
    }

    // Sequence repetition, in either operand order
    let (sequence, count) = match (left, right) {
        (Value::Str(_) | Value::List(_) | Value::Tuple(_), count) => (left, count.as_index()?),
        (count, Value::Str(_) | Value::List(_) | Value::Tuple(_)) => (right, count.as_index()?),
        _ => return None,
    };
    let times = usize::try_from(count).unwrap_or(0);
    let len = match sequence {
        Value::Str(s) => s.len(),
        Value::List(items) | Value::Tuple(items) => items.len(),
        _ => return None,
    };
    match len.checked_mul(times) {
        Some(total) if total <= MAX_REPEAT_LEN => {}
        _ => return Some(Err(RuntimeError::SequenceTooLong { len, times: count })),
    }
    let times = if len == 0 { 0 } else { times };
    Some(Ok(match sequence {
        Value::Str(s) => Value::Str(s.repeat(times)),
        Value::List(items) => Value::List(repeat_items(items, times)),
        Value::Tuple(items) => Value::Tuple(repeat_items(items, times)),
        _ => return None,
    }))
}

fn repeat_items(items: &[Value], times: usize) -> Vec<Value> {
    std::iter::repeat(items.iter().cloned())
        .take(times)
        .flatten()
        .collect()
}

pub(crate) fn true_div_values(left: &Value, right: &Value) -> Option<Result<Value>> {
    let (a, b) = numbers(left, right)?;
    let divisor = b.to_f64();
    if divisor == 0.0 {
        return Some(Err(division_error("Division by zero")));
    }
    Some(Ok(Value::Float(a.to_f64() / divisor)))
}

fn floor_div_int(a: i64, b: i64) -> Result<i64> {
    if b == 0 {
        return Err(division_error("Integer division or modulo by zero"));
    }
    let quotient = a
        .checked_div(b)
        .ok_or_else(|| overflow(format!("{} // {}", a, b)))?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

fn mod_int(a: i64, b: i64) -> Result<i64> {
    if b == 0 {
        return Err(division_error("Integer division or modulo by zero"));
    }
    let remainder = a.wrapping_rem(b);
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        Ok(remainder + b)
    } else {
        Ok(remainder)
    }
}

/// Floored quotient and remainder of two floats
///
/// The quotient is derived from the exact remainder rather than from
/// `(a / b).floor()`, so `q * b + r` reproduces `a` even when `a / b`
/// rounds up to a whole number (`1.0 // 0.1` is `9.0`, not `10.0`).
fn divmod_float(a: f64, b: f64) -> (f64, f64) {
    let mut remainder = a % b;
    let mut quotient = (a - remainder) / b;
    if remainder != 0.0 {
        if (b < 0.0) != (remainder < 0.0) {
            remainder += b;
            quotient -= 1.0;
        }
    } else {
        remainder = 0.0_f64.copysign(b);
    }

    let floored = if quotient != 0.0 {
        let floor = quotient.floor();
        // `(a - remainder) / b` can land just below a whole number
        if quotient - floor > 0.5 {
            floor + 1.0
        } else {
            floor
        }
    } else {
        0.0_f64.copysign(a / b)
    };
    (floored, remainder)
}

fn floor_div_float(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(division_error("Float floor division by zero"));
    }
    Ok(divmod_float(a, b).0)
}

fn mod_float(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(division_error("Float modulo by zero"));
    }
    Ok(divmod_float(a, b).1)
}

pub(crate) fn floor_div_values(left: &Value, right: &Value) -> Option<Result<Value>> {
    Some(match numbers(left, right)? {
        (Number::Int(a), Number::Int(b)) => floor_div_int(a, b).map(Value::Int),
        (a, b) => floor_div_float(a.to_f64(), b.to_f64()).map(Value::Float),
    })
}

pub(crate) fn mod_values(left: &Value, right: &Value) -> Option<Result<Value>> {
    Some(match numbers(left, right)? {
        (Number::Int(a), Number::Int(b)) => mod_int(a, b).map(Value::Int),
        (a, b) => mod_float(a.to_f64(), b.to_f64()).map(Value::Float),
    })
}

pub(crate) fn divmod_values(left: &Value, right: &Value) -> Option<Result<Value>> {
    let pair = match numbers(left, right)? {
        (Number::Int(a), Number::Int(b)) => floor_div_int(a, b)
            .and_then(|q| Ok(vec![Value::Int(q), Value::Int(mod_int(a, b)?)])),
        (a, b) => {
            let (a, b) = (a.to_f64(), b.to_f64());
            if b == 0.0 {
                Err(division_error("Float divmod by zero"))
            } else {
                let (q, r) = divmod_float(a, b);
                Ok(vec![Value::Float(q), Value::Float(r)])
            }
        }
    };
    Some(pair.map(Value::Tuple))
}

pub(crate) fn pow_values(left: &Value, right: &Value) -> Option<Result<Value>> {
    Some(match numbers(left, right)? {
        (Number::Int(a), Number::Int(b)) if b >= 0 => match a {
            // Bases whose powers never grow, whatever the exponent
            0 => Ok(Value::Int(i64::from(b == 0))),
            1 => Ok(Value::Int(1)),
            -1 => Ok(Value::Int(if b % 2 == 0 { 1 } else { -1 })),
            _ => u32::try_from(b)
                .ok()
                .and_then(|exp| a.checked_pow(exp))
                .map(Value::Int)
                .ok_or_else(|| overflow(format!("{} ** {}", a, b))),
        },
        (a, b) => {
            let (a, b) = (a.to_f64(), b.to_f64());
            if a == 0.0 && b < 0.0 {
                Err(division_error("0 cannot be raised to a negative power"))
            } else if a < 0.0 && b.is_finite() && b.fract() != 0.0 {
                Err(RuntimeError::ComplexResult {
                    operation: format!("{} ** {}", Value::Float(a), Value::Float(b)),
                })
            } else {
                Ok(Value::Float(a.powf(b)))
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(f: fn(&Value, &Value) -> Option<Result<Value>>, a: Value, b: Value) -> Result<Value> {
        f(&a, &b).expect("builtin rule should apply")
    }

    #[test]
    fn test_floor_semantics_follow_divisor_sign() {
        assert_eq!(eval(floor_div_values, Value::Int(-7), Value::Int(2)), Ok(Value::Int(-4)));
        assert_eq!(eval(floor_div_values, Value::Int(7), Value::Int(-2)), Ok(Value::Int(-4)));
        assert_eq!(eval(mod_values, Value::Int(-7), Value::Int(3)), Ok(Value::Int(2)));
        assert_eq!(eval(mod_values, Value::Int(7), Value::Int(-3)), Ok(Value::Int(-2)));
        assert_eq!(eval(mod_values, Value::Float(-1.5), Value::Int(1)), Ok(Value::Float(0.5)));
    }

    #[test]
    fn test_true_division_is_float() {
        assert_eq!(eval(true_div_values, Value::Int(7), Value::Int(2)), Ok(Value::Float(3.5)));
        assert_eq!(eval(true_div_values, Value::Int(4), Value::Int(2)), Ok(Value::Float(2.0)));
    }

    #[test]
    fn test_division_by_zero() {
        for f in [true_div_values, floor_div_values, mod_values, divmod_values] {
            assert!(matches!(
                eval(f, Value::Int(1), Value::Int(0)),
                Err(RuntimeError::DivisionError { .. })
            ));
        }
    }

    #[test]
    fn test_pow() {
        assert_eq!(eval(pow_values, Value::Int(10), Value::Int(5)), Ok(Value::Int(100_000)));
        assert_eq!(eval(pow_values, Value::Int(2), Value::Int(-1)), Ok(Value::Float(0.5)));
        assert!(matches!(
            eval(pow_values, Value::Int(10), Value::Int(100)),
            Err(RuntimeError::IntegerOverflow { .. })
        ));
    }

    #[test]
    fn test_pow_of_stable_bases_ignores_exponent_size() {
        let huge = Value::Int(1 << 40);
        assert_eq!(eval(pow_values, Value::Int(1), huge.clone()), Ok(Value::Int(1)));
        assert_eq!(eval(pow_values, Value::Int(0), huge.clone()), Ok(Value::Int(0)));
        assert_eq!(eval(pow_values, Value::Int(-1), huge), Ok(Value::Int(1)));
        assert_eq!(eval(pow_values, Value::Int(-1), Value::Int((1 << 40) + 1)), Ok(Value::Int(-1)));
        assert_eq!(eval(pow_values, Value::Int(0), Value::Int(0)), Ok(Value::Int(1)));
    }

    #[test]
    fn test_fractional_power_of_negative_base_is_an_error() {
        assert!(matches!(
            eval(pow_values, Value::Int(-1), Value::Float(0.5)),
            Err(RuntimeError::ComplexResult { .. })
        ));
        assert_eq!(eval(pow_values, Value::Float(-2.0), Value::Float(2.0)), Ok(Value::Float(4.0)));
        assert_eq!(eval(pow_values, Value::Float(4.0), Value::Float(0.5)), Ok(Value::Float(2.0)));
    }

    #[test]
    fn test_float_floor_division_uses_exact_remainder() {
        assert_eq!(eval(floor_div_values, Value::Float(1.0), Value::Float(0.1)), Ok(Value::Float(9.0)));
        assert_eq!(eval(floor_div_values, Value::Float(-7.5), Value::Int(2)), Ok(Value::Float(-4.0)));

        for (a, b) in [(1.0, 0.1), (-3.7, 1.1), (5.5, -0.3), (0.3, 0.1)] {
            let Ok(Value::Tuple(pair)) = eval(divmod_values, Value::Float(a), Value::Float(b)) else {
                panic!("divmod({}, {}) should produce a pair", a, b);
            };
            let (Value::Float(q), Value::Float(r)) = (&pair[0], &pair[1]) else {
                panic!("divmod({}, {}) should produce floats", a, b);
            };
            assert_eq!(q.fract(), 0.0);
            assert!((q * b + r - a).abs() < 1e-12, "divmod({}, {}) = ({}, {})", a, b, q, r);
            assert!(r.abs() < b.abs() && (*r == 0.0 || (*r < 0.0) == (b < 0.0)));
        }
    }

    #[test]
    fn test_float_modulo_zero_takes_divisor_sign() {
        let Ok(Value::Float(r)) = eval(mod_values, Value::Float(4.0), Value::Float(-2.0)) else {
            panic!("float modulo should produce a float");
        };
        assert_eq!(r, 0.0);
        assert!(r.is_sign_negative());
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(matches!(
            eval(checked_add_values, Value::Int(i64::MAX), Value::Int(1)),
            Err(RuntimeError::IntegerOverflow { .. })
        ));
    }

    #[test]
    fn test_sequences() {
        assert_eq!(
            eval(checked_add_values, Value::from("ab"), Value::from("cd")),
            Ok(Value::from("abcd"))
        );
        assert_eq!(
            eval(checked_mul_values, Value::Int(3), Value::from("ab")),
            Ok(Value::from("ababab"))
        );
        assert_eq!(
            eval(checked_mul_values, Value::List(vec![Value::Int(1)]), Value::Int(-2)),
            Ok(Value::List(vec![]))
        );
        assert_eq!(
            eval(checked_mul_values, Value::Tuple(vec![Value::Int(1), Value::None]), Value::Int(2)),
            Ok(Value::Tuple(vec![Value::Int(1), Value::None, Value::Int(1), Value::None]))
        );
        assert!(checked_sub_values(&Value::from("a"), &Value::Int(1)).is_none());
    }

    #[test]
    fn test_oversized_repetition_is_an_error() {
        for sequence in [Value::from("ab"), Value::from("a"), Value::List(vec![Value::None])] {
            assert!(matches!(
                eval(checked_mul_values, sequence, Value::Int(i64::MAX)),
                Err(RuntimeError::SequenceTooLong { .. })
            ));
        }
        assert_eq!(
            eval(checked_mul_values, Value::from(""), Value::Int(i64::MAX)),
            Ok(Value::from(""))
        );
    }

    #[test]
    fn test_divmod() {
        assert_eq!(
            eval(divmod_values, Value::Int(-7), Value::Int(2)),
            Ok(Value::Tuple(vec![Value::Int(-4), Value::Int(1)]))
        );
    }
}
