//! Parameter element
//!
//!     One entry of a function's parameter clause. A parameter may carry an argument label
//!     (the hint), a type and a default value; all three are optional.
//!
//! Syntax
//!
//!     <hint>? <name> (":" <type>)? ("=" <default>)?
//!
//!     Examples:
//!         a
//!         a: Int
//!         to b: Int = 0
//!
//!     An omitted hint is the parameter name, an omitted type is [ANY_TYPE](super::ANY_TYPE).

use super::super::node::Node;
use super::ANY_TYPE;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub hint: String,
    pub name: String,
    pub param_type: String,
    pub default: Option<Box<Node>>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            hint: name.clone(),
            name,
            param_type: ANY_TYPE.to_string(),
            default: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }

    pub fn with_default(mut self, default: Node) -> Self {
        self.default = Some(Box::new(default));
        self
    }

    pub fn is_typed(&self) -> bool {
        self.param_type != ANY_TYPE
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hint != self.name {
            write!(f, "{} ", self.hint)?;
        }
        write!(f, "{}: {}", self.name, self.param_type)?;
        if let Some(default) = &self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}
