//! Parse failures
//!
//!     A failed alternative is not an error: the engine returns `Ok(None)` and the caller
//!     backtracks. A [ParseError] only surfaces when the start rule itself fails, makes no
//!     progress, or when a reducer rejects the values it was given.

use crate::swft::grammar::ReduceError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No alternative of the start rule matched.
    ///
    /// `position` is the furthest token index any symbol was tried at, `expected` what
    /// the symbols tried there would have accepted.
    NoMatch {
        rule: String,
        position: usize,
        found: String,
        expected: Vec<String>,
    },
    /// The start rule matched without consuming a token
    NoProgress { rule: String, position: usize },
    /// A reducer rejected its arguments
    Reduce {
        rule: String,
        pattern: String,
        source: ReduceError,
    },
    UnknownRule(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NoMatch {
                rule,
                position,
                found,
                expected,
            } => {
                write!(f, "Could not parse '{rule}': unexpected {found} at token {position}")?;
                if !expected.is_empty() {
                    write!(f, ", expected {}", expected.join(" or "))?;
                }
                Ok(())
            }
            ParseError::NoProgress { rule, position } => {
                write!(f, "Rule '{rule}' matched nothing at token {position}")
            }
            ParseError::Reduce {
                rule,
                pattern,
                source,
            } => write!(f, "Reducer for '{rule} : {pattern}' failed: {source}"),
            ParseError::UnknownRule(rule) => write!(f, "Unknown rule '{rule}'"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Reduce { source, .. } => Some(source),
            _ => None,
        }
    }
}
