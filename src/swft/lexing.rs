//! Lexer
//!
//!     Tokenization is a single pass of the logos lexer over the full source text. The
//!     token classes are tried as a longest match at the current position, in the fixed
//!     order space, literal, identifier, operator, char. The char class takes any single
//!     character, so every position produces a token.
//!
//! Whitespace
//!
//!     The lexer itself never drops text: whitespace runs become `space` tokens, which keeps
//!     the lossless property (concatenating token texts gives back the source). The parser
//!     does not want them, so [tokenize] filters them out while [tokenize_lossless] keeps
//!     them for tooling and round trip checks.
//!
//!     Every token carries the byte range of its text, which parse errors use to point at
//!     the failing position.

pub mod base_tokenization;
pub mod common;
pub mod detokenizer;
pub mod tokens;

pub use base_tokenization::{tokenize, tokenize_lossless};
pub use common::TokenizeError;
pub use detokenizer::{detokenize, detokenize_spaced};
pub use tokens::{is_operator_text, Token, TokenKind, OPERATORS};
