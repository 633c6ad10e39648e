//! Detokenizer for the swft language
//!
//! Converts a token sequence back into source text. For sequences produced by
//! [tokenize_lossless](super::tokenize_lossless) this is the exact inverse. Sequences without
//! whitespace tokens are joined with single spaces, which re-tokenizes to the same tokens.

use super::tokens::Token;

/// Concatenate token texts verbatim.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Join tokens with one space between each pair.
pub fn detokenize_spaced(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|t| !t.is_space())
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
