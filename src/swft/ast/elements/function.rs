//! Function element
//!
//! Syntax
//!
//!     "func" <name> "(" <parameter> ("," <parameter>)* ")" "{" <statement>* "}"
//!
//!     The body holds statements: assignments, calls and nested function declarations.

use super::super::node::Node;
use super::parameter::Parameter;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Node>,
}

impl Function {
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>, body: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            parameters,
            body,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        write!(f, "func {}({})", self.name, parameters.join(", "))
    }
}
