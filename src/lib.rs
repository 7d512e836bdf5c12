//! # Introduction
//!
//! `deferred` builds small single-argument functions out of operators. The
//! placeholder [`__`] stands for "the argument"; applying operators to it
//! records the operations instead of computing them, and calling the result
//! later replays them against one value:
//!
//! ```
//! use deferred::{Callable, Value, __};
//!
//! let masked = 60 & __ & 5 & 7;
//! assert_eq!(masked.apply(Value::Int(7)).unwrap(), Value::Int(4));
//! assert_eq!(masked.to_string(), "60 & _ & 5 & 7");
//!
//! let scaled = 100_000 / (__ % 3) * 9;
//! assert_eq!(scaled.apply(Value::Int(5)).unwrap(), Value::Float(450000.0));
//! ```
//!
//! ## Building blocks
//!
//! 1. [`value`] — the tagged [`Value`] expressions run on, plus the
//!    [`Object`] trait for user-defined operands.
//! 2. [`ops`] — what each operator does to two values, including the
//!    left-then-reflected dispatch order.
//! 3. [`expr`] — the recorded forms: [`Expr`] chains for `&`/`|`,
//!    [`MathExpr`] for arithmetic, [`Lambda`] for single-step operators.
//! 4. [`errors`] — [`RuntimeError`], returned when a replayed operation
//!    cannot be applied to the live input.
//!
//! ## Operators without a Rust symbol
//!
//! Rust cannot overload comparisons to return anything but `bool`, and has
//! no `//`, `**` or unary `+`. Those are methods on the placeholder:
//! [`Placeholder::lt`], [`Placeholder::eq`], [`Placeholder::floor_div`],
//! [`Placeholder::pow`], [`Placeholder::pos`], and so on. `!__` stands in
//! for the bitwise invert `~_`.

pub mod constants;
pub mod errors;
pub mod expr;
pub mod ops;
pub mod value;

pub use errors::{Result, RuntimeError};
pub use expr::{Callable, Chain, Expr, Expression, Lambda, MathExpr, Operation, Placeholder};
pub use ops::{BinOp, Side, UnOp};
pub use value::{Object, Value};

/// The placeholder: the identity expression every other expression starts from
pub const __: Placeholder = Placeholder;
