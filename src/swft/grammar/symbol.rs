//! Classified pattern symbols
//!
//!     | spelling             | symbol        | matches                              | value        |
//!     |----------------------|---------------|--------------------------------------|--------------|
//!     | `_`                  | Endpoint      | next token has the rule's kind       | token text   |
//!     | `.`                  | Epsilon       | nothing, reduces immediately         |              |
//!     | `autoedit`           | Continuation  | the synthesized `<rule>_autoedit`    | spliced list |
//!     | a rule name          | Rule          | that rule, recursively               | its result   |
//!     | `+ - * / ==`         | Operator      | an operator token with that text     | operator     |
//!     | anything else        | Literal       | a token with exactly that text       |              |

use super::error::GrammarError;
use super::pattern::{Item, AUTOEDIT_SUFFIX};
use crate::swft::lexing::{is_operator_text, TokenKind};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    Endpoint(TokenKind),
    Epsilon,
    Continuation(String),
    Rule(String),
    Operator(String),
    Literal(String),
}

impl Symbol {
    /// Classify a pattern item once every rule name is known.
    pub fn classify(
        item: &Item,
        is_known_rule: impl Fn(&str) -> bool,
    ) -> Result<Symbol, GrammarError> {
        match item {
            Item::Endpoint(kind) => TokenKind::from_name(kind)
                .map(Symbol::Endpoint)
                .ok_or_else(|| GrammarError::UnknownTokenKind { rule: kind.clone() }),
            Item::Epsilon => Ok(Symbol::Epsilon),
            Item::Autoedit(target) => {
                if is_known_rule(target) {
                    Ok(Symbol::Continuation(target.clone()))
                } else {
                    let rule = target.strip_suffix(AUTOEDIT_SUFFIX).unwrap_or(target).to_string();
                    Err(GrammarError::MissingContinuation { rule })
                }
            }
            Item::Word(word) if is_known_rule(word) => Ok(Symbol::Rule(word.clone())),
            Item::Word(word) if is_operator_text(word) => Ok(Symbol::Operator(word.clone())),
            Item::Word(word) => Ok(Symbol::Literal(word.clone())),
        }
    }

    /// Whether a match adds a value to the reducer's arguments.
    pub fn produces_value(&self) -> bool {
        !matches!(self, Symbol::Epsilon | Symbol::Literal(_))
    }

    /// References a continuation, directly or by name.
    pub fn is_continuation(&self) -> bool {
        match self {
            Symbol::Continuation(_) => true,
            Symbol::Rule(name) => name.ends_with(AUTOEDIT_SUFFIX),
            _ => false,
        }
    }

    /// Name of the rule to invoke, for rule and continuation references.
    pub fn rule_name(&self) -> Option<&str> {
        match self {
            Symbol::Rule(name) | Symbol::Continuation(name) => Some(name),
            _ => None,
        }
    }

    /// How the symbol reads in a failure message.
    pub fn describe(&self) -> String {
        match self {
            Symbol::Endpoint(kind) => kind.name().to_string(),
            Symbol::Epsilon => "nothing".to_string(),
            Symbol::Continuation(name) | Symbol::Rule(name) => name.clone(),
            Symbol::Operator(text) | Symbol::Literal(text) => format!("'{text}'"),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Endpoint(_) => write!(f, "_"),
            Symbol::Epsilon => write!(f, "."),
            Symbol::Continuation(_) => write!(f, "autoedit"),
            Symbol::Rule(name) => write!(f, "{name}"),
            Symbol::Operator(text) | Symbol::Literal(text) => write!(f, "{text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(name: &str) -> bool {
        matches!(name, "expr" | "term" | "expr_autoedit")
    }

    fn word(text: &str) -> Item {
        Item::Word(text.to_string())
    }

    #[test]
    fn test_classify_words() {
        assert_eq!(
            Symbol::classify(&word("term"), known).unwrap(),
            Symbol::Rule("term".to_string())
        );
        assert_eq!(
            Symbol::classify(&word("+"), known).unwrap(),
            Symbol::Operator("+".to_string())
        );
        assert_eq!(
            Symbol::classify(&word("("), known).unwrap(),
            Symbol::Literal("(".to_string())
        );
        assert_eq!(
            Symbol::classify(&word("func"), known).unwrap(),
            Symbol::Literal("func".to_string())
        );
    }

    #[test]
    fn test_classify_markers() {
        let endpoint = Item::Endpoint("literal".to_string());
        assert_eq!(
            Symbol::classify(&endpoint, known).unwrap(),
            Symbol::Endpoint(TokenKind::Literal)
        );

        let bad = Item::Endpoint("number".to_string());
        assert_eq!(
            Symbol::classify(&bad, known).unwrap_err(),
            GrammarError::UnknownTokenKind {
                rule: "number".to_string()
            }
        );

        let missing = Item::Autoedit("term_autoedit".to_string());
        assert_eq!(
            Symbol::classify(&missing, known).unwrap_err(),
            GrammarError::MissingContinuation {
                rule: "term".to_string()
            }
        );
    }

    #[test]
    fn test_value_production() {
        assert!(Symbol::Operator("+".to_string()).produces_value());
        assert!(!Symbol::Literal(",".to_string()).produces_value());
        assert!(!Symbol::Epsilon.produces_value());
    }
}
