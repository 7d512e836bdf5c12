//! Immutable operation chains
//!
//! An [`Expr`] is either the placeholder itself or a [`Chain`]: a previous
//! expression plus one trailing [`Operation`]. Chains are append-only and
//! never mutated after construction. Extending an expression wraps it in a
//! new node, and the previous node is shared through an `Arc`, so one
//! partially built expression can be extended in several directions and
//! read from several threads.
//!
//! # Rendering
//!
//! A chain renders its previous expression bare when that expression's
//! precedence is numerically `<=` the trailing operation's precedence, and
//! parenthesized otherwise:
//!
//! ```text
//! (9 | _) & 6    // `|` (10) binds looser than `&` (8)
//! 9 | _ & 6      // `&` (8) binds tighter than `|` (10)
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr};
use std::sync::Arc;

use tracing::trace;

use crate::constants::{PLACEHOLDER_TOKEN, PRECEDENCE_ATOMIC};
use crate::errors::Result;
use crate::expr::{Callable, Expression, Operation, Placeholder};
use crate::value::Value;

/// A previous expression followed by one operation
#[derive(Debug, Clone)]
pub struct Chain {
    previous: Expr,
    operation: Operation,
}

/// A composable deferred expression
#[derive(Debug, Clone, Default)]
pub enum Expr {
    /// The identity expression every chain starts from
    #[default]
    Placeholder,
    Chain(Arc<Chain>),
}

impl Chain {
    pub fn new(previous: Expr, operation: Operation) -> Self {
        Chain {
            previous,
            operation,
        }
    }

    pub fn previous(&self) -> &Expr {
        &self.previous
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// This node and every node below it, tip first
    fn nodes(&self) -> Vec<&Chain> {
        let mut nodes = vec![self];
        let mut current = &self.previous;
        while let Expr::Chain(chain) = current {
            nodes.push(chain.as_ref());
            current = &chain.previous;
        }
        nodes
    }
}

impl Callable for Chain {
    fn apply(&self, input: Value) -> Result<Value> {
        self.nodes()
            .into_iter()
            .rev()
            .try_fold(input, |value, node| {
                trace!(operation = ?node.operation, "replaying chained operation");
                node.operation.apply(value)
            })
    }
}

// Unlink the list one node at a time so long chains do not drop recursively
impl Drop for Chain {
    fn drop(&mut self) {
        let mut previous = std::mem::take(&mut self.previous);
        while let Expr::Chain(chain) = previous {
            match Arc::try_unwrap(chain) {
                Ok(mut chain) => previous = std::mem::take(&mut chain.previous),
                Err(_) => break,
            }
        }
    }
}

impl Expression for Chain {
    fn precedence(&self) -> u8 {
        self.operation.precedence()
    }

    fn combine_with(&self, operation: Operation) -> Expr {
        Expr::Chain(Arc::new(Chain::new(
            Expr::Chain(Arc::new(self.clone())),
            operation,
        )))
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.nodes();
        let mut closing = Vec::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            let previous_precedence = nodes
                .get(i + 1)
                .map_or(PRECEDENCE_ATOMIC, |below| below.precedence());
            let parenthesize = previous_precedence > node.precedence();
            let (prefix, suffix) = node.operation.affixes();
            f.write_str(&prefix)?;
            if parenthesize {
                f.write_str("(")?;
            }
            closing.push((parenthesize, suffix));
        }

        f.write_str(PLACEHOLDER_TOKEN)?;
        for (parenthesize, suffix) in closing.iter().rev() {
            if *parenthesize {
                f.write_str(")")?;
            }
            f.write_str(suffix)?;
        }
        Ok(())
    }
}

impl Expr {
    /// Number of recorded operations between the placeholder and the tip
    pub fn len(&self) -> usize {
        let mut len = 0;
        let mut current = self;
        while let Expr::Chain(chain) = current {
            len += 1;
            current = &chain.previous;
        }
        len
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Expr::Placeholder)
    }
}

impl Callable for Expr {
    fn apply(&self, input: Value) -> Result<Value> {
        match self {
            Expr::Placeholder => Ok(input),
            Expr::Chain(chain) => chain.apply(input),
        }
    }
}

impl Expression for Expr {
    fn precedence(&self) -> u8 {
        match self {
            Expr::Placeholder => PRECEDENCE_ATOMIC,
            Expr::Chain(chain) => chain.precedence(),
        }
    }

    fn combine_with(&self, operation: Operation) -> Expr {
        Expr::Chain(Arc::new(Chain::new(self.clone(), operation)))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Placeholder => f.write_str(PLACEHOLDER_TOKEN),
            Expr::Chain(chain) => write!(f, "{}", chain),
        }
    }
}

impl From<Placeholder> for Expr {
    fn from(_: Placeholder) -> Self {
        Expr::Placeholder
    }
}

impl<V: Into<Value>> BitAnd<V> for Expr {
    type Output = Expr;

    fn bitand(self, rhs: V) -> Expr {
        self.combine_with(Operation::and_something(rhs))
    }
}

impl<V: Into<Value>> BitOr<V> for Expr {
    type Output = Expr;

    fn bitor(self, rhs: V) -> Expr {
        self.combine_with(Operation::or_something(rhs))
    }
}

// `operand & expr` and `operand | expr`: the fixed operand is on the left
macro_rules! impl_reflected_dual_ops {
    ($($operand:ty),*) => {$(
        impl BitAnd<Expr> for $operand {
            type Output = Expr;

            fn bitand(self, rhs: Expr) -> Expr {
                rhs.combine_with(Operation::something_and(self))
            }
        }

        impl BitOr<Expr> for $operand {
            type Output = Expr;

            fn bitor(self, rhs: Expr) -> Expr {
                rhs.combine_with(Operation::something_or(self))
            }
        }
    )*};
}

impl_reflected_dual_ops!(i64, bool, Value);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{BinOp, Side};

    #[test]
    fn test_len_counts_operations() {
        let expr = Expr::Placeholder
            .combine_with(Operation::and_something(1))
            .combine_with(Operation::or_something(2));
        assert_eq!(expr.len(), 2);
        assert!(!expr.is_empty());
        assert!(Expr::default().is_empty());
    }

    #[test]
    fn test_branching_shares_prefix() {
        let base = Expr::Placeholder.combine_with(Operation::and_something(12));
        let left = base.clone() | 1;
        let right = base & 4;

        assert_eq!(left.apply(Value::Int(7)), Ok(Value::Int(5)));
        assert_eq!(right.apply(Value::Int(7)), Ok(Value::Int(4)));
        assert_eq!(left.to_string(), "_ & 12 | 1");
        assert_eq!(right.to_string(), "_ & 12 & 4");
    }

    #[test]
    fn test_nested_parentheses_close_in_order() {
        let expr = Expr::Placeholder
            .combine_with(Operation::Attr("mask".to_string()))
            .combine_with(Operation::something_or(1))
            .combine_with(Operation::and_something(3))
            .combine_with(Operation::binary(BinOp::DivMod, Side::Right, 9));
        assert_eq!(expr.to_string(), "divmod(9, ((1 | _.mask) & 3))");
    }

    #[test]
    fn test_looser_previous_is_parenthesized() {
        let expr = Expr::Placeholder
            .combine_with(Operation::or_something(1))
            .combine_with(Operation::and_something(3));
        assert_eq!(expr.to_string(), "(_ | 1) & 3");
    }
}
