//! Binary operation element
//!
//!     `left operator right`. Built by the `expr` and `term` levels of the grammar, which
//!     are left recursive: a chain `a + b + c` always arrives here as `(a + b) + c`.

use super::super::node::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryOperation {
    pub left: Box<Node>,
    pub operator: String,
    pub right: Box<Node>,
}

impl BinaryOperation {
    pub fn new(left: Node, operator: impl Into<String>, right: Node) -> Self {
        Self {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }

    /// Binding strength of the operator; higher binds tighter.
    pub fn precedence(&self) -> u8 {
        operator_precedence(&self.operator)
    }
}

/// Binding strength of an operator spelling.
pub fn operator_precedence(operator: &str) -> u8 {
    match operator {
        "==" => 1,
        "+" | "-" => 2,
        "*" | "/" => 3,
        _ => 0,
    }
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}
