//! Base tokenization implementation for the swft lexer
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token sequences.

use super::common::TokenizeError;
use super::tokens::{Token, TokenKind};
use logos::Logos;

/// Tokenize source code keeping every token, whitespace included.
///
/// Concatenating the text of the returned tokens reproduces `source` exactly.
///
/// When logos stops inside a class it could not finish (an unclosed quote), the first
/// character of that span becomes a `char` token and scanning restarts right after it.
pub fn tokenize_lossless(source: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    'scan: while offset < source.len() {
        let mut lexer = TokenKind::lexer(&source[offset..]);
        while let Some(result) = lexer.next() {
            let span = offset + lexer.span().start..offset + lexer.span().end;
            match result {
                Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), span)),
                Err(()) => {
                    let Some(ch) = source[span.start..].chars().next() else {
                        return Err(TokenizeError::new(span.start, &source[span.start..]));
                    };
                    let end = span.start + ch.len_utf8();
                    log::trace!("no token at byte {}, taking {ch:?} as char", span.start);
                    tokens.push(Token::new(
                        TokenKind::Char,
                        &source[span.start..end],
                        span.start..end,
                    ));
                    offset = end;
                    continue 'scan;
                }
            }
        }
        break;
    }

    log::debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}

/// Tokenize source code for parsing: whitespace between tokens is dropped.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    Ok(tokenize_lossless(source)?
        .into_iter()
        .filter(|token| !token.is_space())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_tokenizes_function_header() {
        let tokens = tokenize("func add(a: Int, b: Int) { var result = a }").unwrap();
        assert_eq!(
            texts(&tokens),
            vec![
                "func", "add", "(", "a", ":", "Int", ",", "b", ":", "Int", ")", "{", "var",
                "result", "=", "a", "}"
            ]
        );
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].kind, TokenKind::Char);
        assert_eq!(tokens[14].kind, TokenKind::Char);
    }

    #[test]
    fn test_spans_point_into_source() {
        let source = "let  x = 10";
        for token in tokenize(source).unwrap() {
            assert_eq!(&source[token.span.clone()], token.text);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize("   \n\t ").unwrap(), vec![]);
    }

    #[test]
    fn test_lossless_keeps_whitespace() {
        let source = "1 +\n  2";
        let tokens = tokenize_lossless(source).unwrap();
        assert_eq!(texts(&tokens), vec!["1", " ", "+", "\n  ", "2"]);
        assert_eq!(tokens.iter().filter(|t| t.is_space()).count(), 2);
    }

    #[test]
    fn test_unclosed_quote_falls_back_to_char() {
        let tokens = tokenize("print('a)").unwrap();
        assert_eq!(texts(&tokens), vec!["print", "(", "'", "a", ")"]);
        assert_eq!(tokens[2].kind, TokenKind::Char);
        assert_eq!(tokens[2].span, 6..7);
        assert_eq!(tokens[3].span, 7..8);

        let tokens = tokenize("x = \"oops").unwrap();
        assert_eq!(texts(&tokens), vec!["x", "=", "\"", "oops"]);
        assert_eq!(tokens[2].kind, TokenKind::Char);
    }

    #[test]
    fn test_unclosed_quote_is_lossless() {
        let source = "'a \"b";
        let tokens = tokenize_lossless(source).unwrap();
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, source);
        assert_eq!(texts(&tokens), vec!["'", "a", " ", "\"", "b"]);
        assert_eq!(tokens[0].kind, TokenKind::Char);
        assert_eq!(tokens[3].kind, TokenKind::Char);
    }

    #[test]
    fn test_arithmetic_kinds() {
        let tokens = tokenize("1 + 2 * 3").unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Literal,
                TokenKind::Operator,
                TokenKind::Literal,
                TokenKind::Operator,
                TokenKind::Literal
            ]
        );
    }
}
