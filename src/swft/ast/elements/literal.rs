//! Literal element
//!
//!     A constant: a number, a boolean, or a string. The value keeps its source spelling,
//!     except that strings are normalized to double quotes when the node is built.
//!     Leaf node.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Literal {
    pub value: String,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Build a literal from the raw token text.
    ///
    /// `'abc'` becomes `"abc"`. Strings that contain a double quote keep their quotes.
    pub fn from_token_text(text: &str) -> Self {
        let is_single_quoted = text.len() >= 2 && text.starts_with('\'') && text.ends_with('\'');
        if is_single_quoted {
            let inner = &text[1..text.len() - 1];
            if !inner.contains('"') {
                return Self::new(format!("\"{inner}\""));
            }
        }
        Self::new(text)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
