//! Token definitions for the swft language
//!
//! The token classes are defined with the logos derive macro. logos always picks the longest
//! match, and the explicit priorities break ties between classes in the scan order
//! space, literal, identifier, operator, char. `char` accepts any single character. logos
//! does not fall back to it from a half matched string literal, so the scan loop in
//! [base_tokenization](super::base_tokenization) does.

use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Operator spellings. Grammar symbols with one of these texts are operator terminals.
pub const OPERATORS: &[&str] = &["==", "+", "-", "*", "/"];

/// Returns true if `text` is spelled like an operator token.
pub fn is_operator_text(text: &str) -> bool {
    OPERATORS.contains(&text)
}

/// The class of a token
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    #[regex(r"\s+", priority = 6)]
    Space,

    #[regex(r"true|false|True|False", priority = 5)]
    #[regex(r"[0-9]*\.[0-9]+|[0-9]+", priority = 5)]
    #[regex(r#""[^"\n]*"|'[^'\n]*'"#, priority = 5)]
    Literal,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", priority = 4)]
    Identifier,

    #[token("==", priority = 3)]
    #[token("+", priority = 3)]
    #[token("-", priority = 3)]
    #[token("*", priority = 3)]
    #[token("/", priority = 3)]
    Operator,

    #[regex(r".", priority = 1)]
    Char,
}

impl TokenKind {
    /// The name grammar endpoints use to refer to this kind (`identifier : _`).
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Space => "space",
            TokenKind::Literal => "literal",
            TokenKind::Identifier => "identifier",
            TokenKind::Operator => "operator",
            TokenKind::Char => "char",
        }
    }

    pub fn from_name(name: &str) -> Option<TokenKind> {
        match name {
            "space" => Some(TokenKind::Space),
            "literal" => Some(TokenKind::Literal),
            "identifier" => Some(TokenKind::Identifier),
            "operator" => Some(TokenKind::Operator),
            "char" => Some(TokenKind::Char),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A token with its source text and byte range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn is_space(&self) -> bool {
        self.kind == TokenKind::Space
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Space => write!(f, "<space>"),
            kind => write!(f, "<{}:{}>", kind, self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<(TokenKind, String)> {
        let mut lexer = TokenKind::lexer(source);
        let mut out = Vec::new();
        while let Some(Ok(kind)) = lexer.next() {
            out.push((kind, lexer.slice().to_string()));
        }
        out
    }

    #[test]
    fn test_keywords_are_identifiers() {
        assert_eq!(
            kinds("func var let"),
            vec![
                (TokenKind::Identifier, "func".to_string()),
                (TokenKind::Space, " ".to_string()),
                (TokenKind::Identifier, "var".to_string()),
                (TokenKind::Space, " ".to_string()),
                (TokenKind::Identifier, "let".to_string()),
            ]
        );
    }

    #[test]
    fn test_boolean_literals_win_over_identifiers() {
        assert_eq!(kinds("true")[0].0, TokenKind::Literal);
        assert_eq!(kinds("False")[0].0, TokenKind::Literal);
        // longest match: a longer identifier is not split
        assert_eq!(kinds("trueish"), vec![(TokenKind::Identifier, "trueish".to_string())]);
    }

    #[test]
    fn test_numbers_and_strings() {
        assert_eq!(kinds("3.14")[0], (TokenKind::Literal, "3.14".to_string()));
        assert_eq!(kinds(".5")[0], (TokenKind::Literal, ".5".to_string()));
        assert_eq!(kinds("'abc'")[0], (TokenKind::Literal, "'abc'".to_string()));
        assert_eq!(
            kinds("\"a b\"")[0],
            (TokenKind::Literal, "\"a b\"".to_string())
        );
    }

    #[test]
    fn test_operators_and_chars() {
        assert_eq!(
            kinds("==+=:"),
            vec![
                (TokenKind::Operator, "==".to_string()),
                (TokenKind::Operator, "+".to_string()),
                (TokenKind::Char, "=".to_string()),
                (TokenKind::Char, ":".to_string()),
            ]
        );
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in [
            TokenKind::Space,
            TokenKind::Literal,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Char,
        ] {
            assert_eq!(TokenKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(TokenKind::from_name("keyword"), None);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Identifier, "add", 0..3);
        assert_eq!(token.to_string(), "<identifier:add>");
        assert_eq!(Token::new(TokenKind::Space, " ", 3..4).to_string(), "<space>");
    }
}
