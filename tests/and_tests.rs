// Tests for `&` with the placeholder on either side

use deferred::{BinOp, Callable, Object, Result, RuntimeError, Value, __};

#[derive(Debug)]
struct ImplementsAnd;

impl Object for ImplementsAnd {
    fn type_name(&self) -> &str {
        "ImplementsAnd"
    }

    fn repr(&self) -> String {
        "hello".to_string()
    }

    fn binary_op(&self, op: BinOp, other: &Value) -> Option<Result<Value>> {
        match (op, other) {
            (BinOp::BitAnd, Value::Str(s)) => Some(Ok(Value::Int(s.len() as i64))),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct ImplementsRAnd;

impl Object for ImplementsRAnd {
    fn type_name(&self) -> &str {
        "ImplementsRAnd"
    }

    fn repr(&self) -> String {
        "howdy".to_string()
    }

    fn reflected_op(&self, op: BinOp, other: &Value) -> Option<Result<Value>> {
        match (op, other) {
            (BinOp::BitAnd, Value::Int(n)) => Some(Ok(Value::Str(n.to_string()))),
            _ => None,
        }
    }
}

#[test]
fn test_to_the_left() {
    let expr = Value::object(ImplementsAnd) & __;

    assert_eq!(expr.apply(Value::from("foo")), Ok(Value::Int(3)));
    assert_eq!(expr.to_string(), "hello & _");
}

#[test]
fn test_to_the_right() {
    let expr = __ & Value::object(ImplementsRAnd);

    assert_eq!(expr.apply(Value::Int(99)), Ok(Value::from("99")));
    assert_eq!(expr.to_string(), "_ & howdy");
}

#[test]
fn test_combinations() {
    let expr = 60 & __ & 5 & 7;

    assert_eq!(expr.apply(Value::Int(7)), Ok(Value::Int(4)));
    assert_eq!(expr.to_string(), "60 & _ & 5 & 7");
}

#[test]
fn test_bools() {
    let expr = true & __;

    assert_eq!(expr.apply(Value::Bool(false)), Ok(Value::Bool(false)));
    assert_eq!(expr.to_string(), "True & _");
}

#[test]
fn test_declined_operand_fails_at_call_time() {
    // Building the chain succeeds; the operand only declines once it sees an int
    let expr = Value::object(ImplementsAnd) & __;

    assert_eq!(
        expr.apply(Value::Int(5)),
        Err(RuntimeError::UnsupportedOperation {
            op: "&".to_string(),
            left: "ImplementsAnd".to_string(),
            right: "int".to_string(),
        })
    );
}

#[test]
fn test_reflected_operand_declines_other_types() {
    let expr = __ & Value::object(ImplementsRAnd);

    assert!(matches!(
        expr.apply(Value::from("text")),
        Err(RuntimeError::UnsupportedOperation { .. })
    ));
}
