//! Assignment element
//!
//!     Shared payload of the two assignment nodes. `let` builds a static assignment and
//!     `var` a dynamic one; the node variant carries the distinction, the payload is the
//!     same.
//!
//! Syntax
//!
//!     ("var" | "let") <identifier> (":" <type>)? "=" <expr>
//!
//!     An omitted type is recorded as [ANY_TYPE].

use super::super::node::Node;
use super::ANY_TYPE;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub name: String,
    pub var_type: String,
    pub value: Box<Node>,
}

impl Assignment {
    pub fn new(name: impl Into<String>, var_type: impl Into<String>, value: Node) -> Self {
        Self {
            name: name.into(),
            var_type: var_type.into(),
            value: Box::new(value),
        }
    }

    /// Assignment without a type annotation.
    pub fn untyped(name: impl Into<String>, value: Node) -> Self {
        Self::new(name, ANY_TYPE, value)
    }

    pub fn is_typed(&self) -> bool {
        self.var_type != ANY_TYPE
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} = {}", self.name, self.var_type, self.value)
    }
}
