//! Grammar setup errors
//!
//!     Everything that can go wrong between the first `declare` and a built grammar. All of
//!     these are fatal before any parsing begins.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// The declaration string is not `<rule> : <symbol> ...`
    MalformedPattern { pattern: String, reason: String },
    /// An `_` endpoint in a rule whose name is not a token kind
    UnknownTokenKind { rule: String },
    /// Declared argument names don't line up with the value-producing symbols
    ArityMismatch {
        pattern: String,
        declared: usize,
        produced: usize,
    },
    /// `autoedit` used in a rule that was never rewritten
    MissingContinuation { rule: String },
    /// A left recursive rule without both recursive and non recursive alternatives
    LeftRecursion { rule: String },
    /// The configured start rule has no alternatives
    MissingStartRule(String),
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::MalformedPattern { pattern, reason } => {
                write!(f, "Malformed pattern '{pattern}': {reason}")
            }
            GrammarError::UnknownTokenKind { rule } => {
                write!(f, "Rule '{rule}' uses '_' but '{rule}' is not a token kind")
            }
            GrammarError::ArityMismatch {
                pattern,
                declared,
                produced,
            } => write!(
                f,
                "Pattern '{pattern}' produces {produced} values but its reducer takes {declared}"
            ),
            GrammarError::MissingContinuation { rule } => write!(
                f,
                "Rule '{rule}' refers to 'autoedit' but has no left recursion to rewrite"
            ),
            GrammarError::LeftRecursion { rule } => write!(
                f,
                "While rewriting '{rule}' got a left recursion error, provide both a recursive and a non recursive alternative"
            ),
            GrammarError::MissingStartRule(rule) => {
                write!(f, "Start rule '{rule}' has no alternatives")
            }
        }
    }
}

impl std::error::Error for GrammarError {}
