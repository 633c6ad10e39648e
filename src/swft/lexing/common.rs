//! Errors shared by the tokenizer entry points

use std::fmt;

/// Raised when no token class matches at the current scan position.
///
/// The scan loop turns any position logos rejects into a one character `char` token, so
/// tokenizing a `&str` does not produce this in practice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeError {
    /// Byte offset of the failing scan position
    pub offset: usize,
    /// The unconsumed source text from `offset` on
    pub remaining: String,
}

impl TokenizeError {
    pub fn new(offset: usize, remaining: &str) -> Self {
        Self {
            offset,
            remaining: remaining.to_string(),
        }
    }
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview: String = self.remaining.chars().take(30).collect();
        write!(
            f,
            "Couldn't match token at byte {}: {:?}",
            self.offset, preview
        )
    }
}

impl std::error::Error for TokenizeError {}
