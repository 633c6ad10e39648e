//! Call element
//!
//! Syntax
//!
//!     <identifier> "(" <expr> ("," <expr>)* ")"
//!
//!     The callee is stored by name. Every identifier inside the arguments must be declared
//!     before the call, which the generator checks.

use super::super::node::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub name: String,
    pub arguments: Vec<Node>,
}

impl Call {
    pub fn new(name: impl Into<String>, arguments: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arguments: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();
        write!(f, "{}({})", self.name, arguments.join(", "))
    }
}
