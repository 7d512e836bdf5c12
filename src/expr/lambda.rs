//! Single-step deferred functions
//!
//! [`Lambda`] wraps exactly one [`Operation`] applied straight to the input.
//! The placeholder returns it for the operators that only record one step:
//! `^`, `<<`, `>>`, `divmod`, comparisons, unary operators and field/key
//! lookup. A lambda can be called and rendered but not extended further.

use std::fmt;

use crate::constants::PLACEHOLDER_TOKEN;
use crate::errors::Result;
use crate::expr::{Callable, Operation};
use crate::value::Value;

#[derive(Debug, Clone)]
pub struct Lambda {
    operation: Operation,
}

impl Lambda {
    pub fn new(operation: Operation) -> Self {
        Lambda { operation }
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }
}

impl Callable for Lambda {
    fn apply(&self, input: Value) -> Result<Value> {
        self.operation.apply(input)
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.operation.render(PLACEHOLDER_TOKEN))
    }
}
