use deferred::{Callable, MathExpr, RuntimeError, Value, __};

#[test]
fn test_placeholder_on_the_left() {
    assert_eq!((__ + 2).apply(Value::Int(5)), Ok(Value::Int(7)));
    assert_eq!((__ - 2).apply(Value::Int(5)), Ok(Value::Int(3)));
    assert_eq!((__ * 2).apply(Value::Int(5)), Ok(Value::Int(10)));
    assert_eq!((__ / 2).apply(Value::Int(5)), Ok(Value::Float(2.5)));
    assert_eq!(__.floor_div(2).apply(Value::Int(5)), Ok(Value::Int(2)));
    assert_eq!((__ % 2).apply(Value::Int(5)), Ok(Value::Int(1)));
    assert_eq!(__.pow(2).apply(Value::Int(5)), Ok(Value::Int(25)));
}

#[test]
fn test_placeholder_on_the_right() {
    assert_eq!((2 + __).apply(Value::Int(5)), Ok(Value::Int(7)));
    assert_eq!((2 - __).apply(Value::Int(5)), Ok(Value::Int(-3)));
    assert_eq!((2 * __).apply(Value::Int(5)), Ok(Value::Int(10)));
    assert_eq!((2 / __).apply(Value::Int(5)), Ok(Value::Float(0.4)));
    assert_eq!(__.rfloor_div(2).apply(Value::Int(5)), Ok(Value::Int(0)));
    assert_eq!((2 % __).apply(Value::Int(5)), Ok(Value::Int(2)));
    assert_eq!(__.rpow(2).apply(Value::Int(5)), Ok(Value::Int(32)));
}

#[test]
fn test_float_operands() {
    let expr = 1.5 * __ + 0.25;

    assert_eq!(expr.apply(Value::Int(2)), Ok(Value::Float(3.25)));
    assert_eq!(expr.to_string(), "(1.5 * _) + 0.25");
}

#[test]
fn test_complex_expression() {
    let expr = 100_000 / (__ % 3) * 9;

    assert_eq!(expr.len(), 3);
    assert_eq!(expr.apply(Value::Int(5)), Ok(Value::Float(450000.0)));
    assert_eq!(expr.to_string(), "(100000 / (_ % 3)) * 9");
}

#[test]
fn test_steps_run_in_recorded_order() {
    // ((x + 1) ** 2) - 3
    let expr = (__ + 1).pow(2) - 3;

    assert_eq!(expr.apply(Value::Int(2)), Ok(Value::Int(6)));
}

#[test]
fn test_expression_is_reusable() {
    let expr = __ * 3;

    assert_eq!(expr.apply(Value::Int(2)), Ok(Value::Int(6)));
    assert_eq!(expr.apply(Value::Float(0.5)), Ok(Value::Float(1.5)));
    assert_eq!(expr.apply(Value::from("ab")), Ok(Value::from("ababab")));
}

#[test]
fn test_empty_expression() {
    assert_eq!(
        MathExpr::new().apply(Value::Int(1)),
        Err(RuntimeError::EmptyExpression)
    );
    assert_eq!(
        MathExpr::new().call(&[]),
        Err(RuntimeError::ArgumentCountMismatch {
            expected: 1,
            got: 0
        })
    );
}

#[test]
fn test_runtime_failures_surface_from_call() {
    let expr = 10 / __;

    assert!(matches!(
        expr.apply(Value::Int(0)),
        Err(RuntimeError::DivisionError { .. })
    ));
    assert_eq!(
        expr.apply(Value::from("x")),
        Err(RuntimeError::UnsupportedOperation {
            op: "/".to_string(),
            left: "int".to_string(),
            right: "str".to_string(),
        })
    );
}

#[test]
fn test_oversized_repetition_is_reported() {
    assert!(matches!(
        (__ * i64::MAX).apply(Value::from("ab")),
        Err(RuntimeError::SequenceTooLong { len: 2, .. })
    ));
    assert_eq!((__ * 3).apply(Value::from("ab")), Ok(Value::from("ababab")));
}

#[test]
fn test_float_floor_division_matches_divmod() {
    assert_eq!(__.floor_div(0.1).apply(Value::Float(1.0)), Ok(Value::Float(9.0)));
    assert_eq!(
        __.divmod(0.1).apply(Value::Float(1.0)),
        Ok(Value::Tuple(vec![Value::Float(9.0), Value::Float(1.0 % 0.1)]))
    );
}

#[test]
fn test_power_edge_cases() {
    assert_eq!(__.pow(1i64 << 40).apply(Value::Int(1)), Ok(Value::Int(1)));
    assert_eq!(__.rpow(-1).apply(Value::Int(1 << 40)), Ok(Value::Int(1)));
    assert!(matches!(
        __.pow(0.5).apply(Value::Int(-1)),
        Err(RuntimeError::ComplexResult { .. })
    ));
}
