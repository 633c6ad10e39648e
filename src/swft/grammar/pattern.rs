//! Rule pattern strings
//!
//! Syntax
//!
//!     <rule> " : " <item> (" " <item>)*
//!
//!     Items are separated by whitespace. Three item spellings are reserved:
//!         _           endpoint, matches a token whose kind is named like the rule
//!         .           epsilon, reduce with the values matched so far
//!         autoedit    the continuation synthesized for this rule by left recursion removal
//!     Every other item is a plain word, classified once the whole grammar is known.

use super::error::GrammarError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?P<rule>[A-Za-z_][A-Za-z0-9_']*)\s+:\s+(?P<rhs>\S.*)$").unwrap());

pub const ENDPOINT_MARKER: &str = "_";
pub const EPSILON_MARKER: &str = ".";
pub const AUTOEDIT_MARKER: &str = "autoedit";

/// Suffix of the continuation rule synthesized for a left recursive rule.
pub const AUTOEDIT_SUFFIX: &str = "_autoedit";

pub fn autoedit_name(rule: &str) -> String {
    format!("{rule}{AUTOEDIT_SUFFIX}")
}

pub fn prime_name(rule: &str) -> String {
    format!("{rule}'")
}

/// One element of a pattern before classification.
///
/// Reserved markers are bound to the declaring rule when the pattern is parsed, so items
/// keep their meaning when the left recursion rewriter moves them into other rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// `_`, carrying the token kind name it expects
    Endpoint(String),
    /// `.`
    Epsilon,
    /// `autoedit`, carrying the name of the continuation rule it refers to
    Autoedit(String),
    /// Anything else
    Word(String),
}

impl Item {
    pub fn is_word(&self, word: &str) -> bool {
        matches!(self, Item::Word(w) if w == word)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Endpoint(_) => write!(f, "{ENDPOINT_MARKER}"),
            Item::Epsilon => write!(f, "{EPSILON_MARKER}"),
            Item::Autoedit(_) => write!(f, "{AUTOEDIT_MARKER}"),
            Item::Word(word) => write!(f, "{word}"),
        }
    }
}

/// A parsed `rule : items` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub rule: String,
    pub items: Vec<Item>,
}

impl Pattern {
    pub fn new(rule: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            rule: rule.into(),
            items,
        }
    }

    pub fn parse(source: &str) -> Result<Pattern, GrammarError> {
        let captures = HEADER_REGEX
            .captures(source)
            .ok_or_else(|| GrammarError::MalformedPattern {
                pattern: source.to_string(),
                reason: "expected `<rule> : <symbol> ...`".to_string(),
            })?;

        let rule = captures["rule"].to_string();
        let items = captures["rhs"]
            .split_whitespace()
            .map(|word| match word {
                ENDPOINT_MARKER => Item::Endpoint(rule.clone()),
                EPSILON_MARKER => Item::Epsilon,
                AUTOEDIT_MARKER => Item::Autoedit(autoedit_name(&rule)),
                _ => Item::Word(word.to_string()),
            })
            .collect();

        Ok(Pattern { rule, items })
    }

    /// The right-hand side as written, e.g. `expr + term`.
    pub fn rhs(&self) -> String {
        self.items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Starts with a reference to its own rule.
    pub fn is_left_recursive(&self) -> bool {
        self.items
            .first()
            .map(|item| item.is_word(&self.rule))
            .unwrap_or(false)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.rule, self.rhs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words() {
        let pattern = Pattern::parse("call : identifier ( exprs )").unwrap();
        assert_eq!(pattern.rule, "call");
        assert_eq!(pattern.items.len(), 4);
        assert!(pattern.items[1].is_word("("));
        assert_eq!(pattern.rhs(), "identifier ( exprs )");
    }

    #[test]
    fn test_reserved_markers_bind_to_rule() {
        let endpoint = Pattern::parse("literal : _").unwrap();
        assert_eq!(endpoint.items, vec![Item::Endpoint("literal".to_string())]);

        let autoedit = Pattern::parse("expr : autoedit").unwrap();
        assert_eq!(
            autoedit.items,
            vec![Item::Autoedit("expr_autoedit".to_string())]
        );

        let epsilon = Pattern::parse("body : .").unwrap();
        assert_eq!(epsilon.items, vec![Item::Epsilon]);
    }

    #[test]
    fn test_left_recursion_detection() {
        assert!(Pattern::parse("expr : expr + term").unwrap().is_left_recursive());
        assert!(!Pattern::parse("expr : term").unwrap().is_left_recursive());
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            Pattern::parse("expr + term"),
            Err(GrammarError::MalformedPattern { .. })
        ));
        assert!(Pattern::parse("expr :").is_err());
        assert!(Pattern::parse(": term").is_err());
    }
}
