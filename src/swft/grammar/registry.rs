//! Grammar registry
//!
//!     Rules are collected with [GrammarBuilder::declare], one call per alternative, and
//!     frozen into an immutable [Grammar] by [GrammarBuilder::build]. Building runs the left
//!     recursion rewrite, classifies every symbol against the final set of rule names and
//!     validates the declarations. A built grammar is never mutated, so one grammar can
//!     serve any number of parses.
//!
//! Canonical order
//!
//!     Alternatives of a rule are tried in this order:
//!         1. alternatives referring to a continuation (`autoedit`, `<name>_autoedit`)
//!         2. closure alternatives that repeat, `<name>' : ... <name>'`
//!         3. everything else, in declaration order
//!     The sort is stable, so declaration order also decides within the first two groups.

use super::error::GrammarError;
use super::left_recursion;
use super::pattern::{autoedit_name, prime_name, Item, Pattern, AUTOEDIT_SUFFIX};
use super::reducer::{Action, Args, ReduceError, Reducer};
use super::symbol::Symbol;
use super::value::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A user declaration: pattern plus the action that reduces it
#[derive(Debug, Clone)]
pub struct Declaration {
    pub pattern: Pattern,
    pub action: Action,
}

/// A pattern paired with its reducer, as produced by the rewrite
#[derive(Debug, Clone)]
pub struct Production {
    pub pattern: Pattern,
    pub reducer: Reducer,
}

impl Production {
    pub fn build(declaration: &Declaration) -> Self {
        Self {
            pattern: declaration.pattern.clone(),
            reducer: Reducer::Build(declaration.action.clone()),
        }
    }
}

/// One right-hand side of a rule
#[derive(Debug, Clone)]
pub struct Alternative {
    pub pattern: Pattern,
    pub symbols: Vec<Symbol>,
    pub reducer: Reducer,
}

impl Alternative {
    /// The right-hand side as declared, e.g. `expr + term`.
    pub fn rhs(&self) -> String {
        self.pattern.rhs()
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub alternatives: Vec<Alternative>,
}

/// Rank of a pattern in the canonical alternative order.
pub fn canonical_rank(pattern: &Pattern) -> u8 {
    let refers_to_continuation = pattern.items.iter().any(|item| match item {
        Item::Autoedit(_) => true,
        Item::Word(word) => word.ends_with(AUTOEDIT_SUFFIX),
        _ => false,
    });
    if refers_to_continuation {
        return 0;
    }
    let is_closure = pattern.rule.ends_with('\'');
    if is_closure && pattern.items.iter().any(|item| item.is_word(&pattern.rule)) {
        return 1;
    }
    2
}

/// Collects declarations and builds a [Grammar]
#[derive(Debug, Clone)]
pub struct GrammarBuilder {
    start_rule: String,
    rewrite_left_recursion: bool,
    declarations: Vec<Declaration>,
    errors: Vec<GrammarError>,
}

impl GrammarBuilder {
    pub fn new(start_rule: impl Into<String>) -> Self {
        Self {
            start_rule: start_rule.into(),
            rewrite_left_recursion: true,
            declarations: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn start_rule(&mut self, name: impl Into<String>) -> &mut Self {
        self.start_rule = name.into();
        self
    }

    /// Turn left recursion removal on or off.
    ///
    /// With the rewrite off, a left recursive rule recurses until the stack runs out when
    /// it is parsed.
    pub fn rewrite_left_recursion(&mut self, enabled: bool) -> &mut Self {
        self.rewrite_left_recursion = enabled;
        self
    }

    /// Append an alternative to a rule.
    ///
    /// `params` names the values produced by the pattern's symbols, in order. The reducer
    /// reads them back by name from [Args]. A malformed pattern is reported by [build].
    ///
    /// [build]: GrammarBuilder::build
    pub fn declare<F>(&mut self, pattern: &str, params: &[&str], reduce: F) -> &mut Self
    where
        F: Fn(&mut Args) -> Result<Value, ReduceError> + Send + Sync + 'static,
    {
        self.declare_action(pattern, Action::new(params, reduce))
    }

    pub fn declare_action(&mut self, pattern: &str, action: Action) -> &mut Self {
        match Pattern::parse(pattern) {
            Ok(pattern) => self.declarations.push(Declaration { pattern, action }),
            Err(error) => self.errors.push(error),
        }
        self
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn is_known_rule(&self, name: &str) -> bool {
        self.declarations.iter().any(|d| d.pattern.rule == name)
    }

    /// Declared alternatives of a rule, in canonical order.
    pub fn alternatives_for(&self, rule: &str) -> Vec<&Declaration> {
        let mut alternatives: Vec<&Declaration> = self
            .declarations
            .iter()
            .filter(|d| d.pattern.rule == rule)
            .collect();
        alternatives.sort_by_key(|d| canonical_rank(&d.pattern));
        alternatives
    }

    pub fn build(&self) -> Result<Grammar, GrammarError> {
        if let Some(error) = self.errors.first() {
            return Err(error.clone());
        }

        self.check_arity()?;

        let productions = if self.rewrite_left_recursion {
            left_recursion::rewrite(&self.declarations)?
        } else {
            self.declarations.iter().map(Production::build).collect()
        };

        let known: BTreeSet<String> = productions
            .iter()
            .map(|p| p.pattern.rule.clone())
            .collect();

        let mut rules: BTreeMap<String, Rule> = BTreeMap::new();
        for production in productions {
            let symbols = production
                .pattern
                .items
                .iter()
                .map(|item| Symbol::classify(item, |name| known.contains(name)))
                .collect::<Result<Vec<_>, _>>()?;

            let name = production.pattern.rule.clone();
            rules
                .entry(name.clone())
                .or_insert_with(|| Rule {
                    name,
                    alternatives: Vec::new(),
                })
                .alternatives
                .push(Alternative {
                    pattern: production.pattern,
                    symbols,
                    reducer: production.reducer,
                });
        }

        for rule in rules.values_mut() {
            rule.alternatives
                .sort_by_key(|alternative| canonical_rank(&alternative.pattern));
        }

        if !rules.contains_key(&self.start_rule) {
            return Err(GrammarError::MissingStartRule(self.start_rule.clone()));
        }

        let grammar = Grammar {
            rules,
            start_rule: self.start_rule.clone(),
        };
        log::debug!(
            "built grammar: {} rules, {} alternatives, start rule '{}'",
            grammar.rules.len(),
            grammar.alternative_count(),
            grammar.start_rule
        );
        Ok(grammar)
    }

    /// Every declaration's argument names must match the values its symbols produce.
    ///
    /// Declarations that splice a continuation produce a variable number of values and are
    /// not checked.
    fn check_arity(&self) -> Result<(), GrammarError> {
        let mut known: BTreeSet<String> = self
            .declarations
            .iter()
            .map(|d| d.pattern.rule.clone())
            .collect();
        if self.rewrite_left_recursion {
            for declaration in &self.declarations {
                if declaration.pattern.is_left_recursive() {
                    known.insert(autoedit_name(&declaration.pattern.rule));
                    known.insert(prime_name(&declaration.pattern.rule));
                }
            }
        }

        'declarations: for declaration in &self.declarations {
            let mut produced = 0;
            for item in &declaration.pattern.items {
                let symbol = Symbol::classify(item, |name| known.contains(name))?;
                if symbol.is_continuation() {
                    continue 'declarations;
                }
                if symbol == Symbol::Epsilon {
                    break;
                }
                if symbol.produces_value() {
                    produced += 1;
                }
            }

            let declared = declaration.action.params().len();
            if declared != produced {
                return Err(GrammarError::ArityMismatch {
                    pattern: declaration.pattern.to_string(),
                    declared,
                    produced,
                });
            }
        }
        Ok(())
    }
}

/// An immutable, validated rule table
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: BTreeMap<String, Rule>,
    start_rule: String,
}

impl Grammar {
    pub fn start_rule(&self) -> &str {
        &self.start_rule
    }

    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn is_known_rule(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Alternatives of a rule in canonical order; empty for unknown rules.
    pub fn alternatives_for(&self, name: &str) -> &[Alternative] {
        self.rules
            .get(name)
            .map(|rule| rule.alternatives.as_slice())
            .unwrap_or(&[])
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    pub fn alternative_count(&self) -> usize {
        self.rules.values().map(|r| r.alternatives.len()).sum()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in self.rules.values() {
            for alternative in &rule.alternatives {
                writeln!(f, "{alternative}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swft::ast::Node;

    fn forward(name: &'static str) -> impl Fn(&mut Args) -> Result<Value, ReduceError> {
        move |args: &mut Args| args.take(name)
    }

    fn identifier(args: &mut Args) -> Result<Value, ReduceError> {
        Ok(Value::Node(Node::identifier(args.text("value")?)))
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let mut builder = GrammarBuilder::new("factor");
        builder
            .declare("factor : ( factor )", &["inner"], forward("inner"))
            .declare("factor : identifier", &["value"], forward("value"))
            .declare("identifier : _", &["value"], identifier);

        let rhs: Vec<String> = builder
            .alternatives_for("factor")
            .iter()
            .map(|d| d.pattern.rhs())
            .collect();
        assert_eq!(rhs, vec!["( factor )", "identifier"]);
        assert!(builder.is_known_rule("identifier"));
        assert!(!builder.is_known_rule("term"));

        let grammar = builder.build().unwrap();
        let built: Vec<String> = grammar
            .alternatives_for("factor")
            .iter()
            .map(Alternative::rhs)
            .collect();
        assert_eq!(built, rhs);
        assert_eq!(
            grammar.alternatives_for("factor")[0].symbols[0],
            Symbol::Literal("(".to_string())
        );
    }

    #[test]
    fn test_canonical_rank() {
        let rank = |pattern: &str| canonical_rank(&Pattern::parse(pattern).unwrap());
        assert_eq!(rank("expr : autoedit"), 0);
        assert_eq!(rank("expr_autoedit : term expr'"), 2);
        assert_eq!(rank("expr' : + term expr'"), 1);
        assert_eq!(rank("expr' : + term"), 2);
        assert_eq!(rank("expr : term"), 2);
    }

    #[test]
    fn test_malformed_pattern_reported_at_build() {
        let mut builder = GrammarBuilder::new("a");
        builder.declare("a = b", &[], |_| Ok(Value::None));
        assert!(matches!(
            builder.build(),
            Err(GrammarError::MalformedPattern { .. })
        ));
    }

    #[test]
    fn test_arity_mismatch() {
        let mut builder = GrammarBuilder::new("pair");
        builder
            .declare("pair : identifier , identifier", &["a"], forward("a"))
            .declare("identifier : _", &["value"], identifier);
        assert_eq!(
            builder.build().unwrap_err(),
            GrammarError::ArityMismatch {
                pattern: "pair : identifier , identifier".to_string(),
                declared: 1,
                produced: 2,
            }
        );
    }

    #[test]
    fn test_unknown_token_kind() {
        let mut builder = GrammarBuilder::new("number");
        builder.declare("number : _", &["value"], forward("value"));
        assert_eq!(
            builder.build().unwrap_err(),
            GrammarError::UnknownTokenKind {
                rule: "number".to_string()
            }
        );
    }

    #[test]
    fn test_missing_start_rule() {
        let mut builder = GrammarBuilder::new("SOF");
        builder.declare("identifier : _", &["value"], identifier);
        assert_eq!(
            builder.build().unwrap_err(),
            GrammarError::MissingStartRule("SOF".to_string())
        );
    }

    #[test]
    fn test_missing_continuation() {
        let mut builder = GrammarBuilder::new("expr");
        builder
            .declare("expr : autoedit", &[], |_| Ok(Value::None))
            .declare("expr : identifier", &["value"], forward("value"))
            .declare("identifier : _", &["value"], identifier);
        assert_eq!(
            builder.build().unwrap_err(),
            GrammarError::MissingContinuation {
                rule: "expr".to_string()
            }
        );
    }
}
