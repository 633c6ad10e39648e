//! Backtracking parse engine
//!
//!     apply_rule(R)
//!         for each alternative of R, in canonical order
//!             match its symbols left to right against the tokens at the cursor
//!             all matched  → reduce the collected values, return them
//!             any mismatch → reset the cursor to where R started, try the next one
//!         none matched → Ok(None)
//!
//!     Terminals compare the token under the cursor and consume it on success. Rule and
//!     continuation references recurse into `apply_rule`, and their `Ok(None)` is just
//!     another mismatch for the enclosing alternative. `.` stops matching and reduces with
//!     what was collected so far.
//!
//!     Closure rules from left recursion removal (`A' : α A' | α`) are run as a loop
//!     rather than one nested call per repetition, so a long statement list or a long sum
//!     does not grow the stack. A repeating form is taken when its α matches and one more
//!     α matches after it, which is exactly when recursing into `A'` would succeed.
//!
//!     The parser expects tokens without whitespace, as produced by
//!     [tokenize](crate::swft::lexing::tokenize).

use super::error::ParseError;
use crate::swft::ast::{Program, Unit};
use crate::swft::grammar::{Alternative, Grammar, Reducer, Symbol, Value};
use crate::swft::lexing::{Token, TokenKind};
use std::fmt;

/// Parse a whole token sequence with the grammar's start rule.
pub fn parse(grammar: &Grammar, tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(grammar, tokens).parse_program()
}

/// The furthest point any terminal was tried at, for error reporting
#[derive(Debug, Default)]
struct Furthest {
    position: usize,
    expected: Vec<String>,
}

impl Furthest {
    fn record(&mut self, position: usize, expected: String) {
        if position > self.position {
            self.position = position;
            self.expected.clear();
        }
        if position == self.position && !self.expected.contains(&expected) {
            self.expected.push(expected);
        }
    }
}

/// Parse state for one token sequence
///
/// The cursor belongs to this parser alone. The grammar is only read, so any number of
/// parsers can share it.
pub struct Parser<'a> {
    grammar: &'a Grammar,
    tokens: &'a [Token],
    cursor: usize,
    depth: usize,
    furthest: Furthest,
}

impl<'a> Parser<'a> {
    pub fn new(grammar: &'a Grammar, tokens: &'a [Token]) -> Self {
        Self {
            grammar,
            tokens,
            cursor: 0,
            depth: 0,
            furthest: Furthest::default(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Apply the start rule until all tokens are consumed, one unit per application.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut units = Vec::new();
        while !self.is_at_end() {
            units.push(self.parse_unit()?);
        }
        log::debug!("parsed {} tokens into {} units", self.tokens.len(), units.len());
        Ok(Program::new(units))
    }

    /// Apply the start rule once at the cursor.
    pub fn parse_unit(&mut self) -> Result<Unit, ParseError> {
        let grammar = self.grammar;
        let rule = grammar.start_rule();
        let start = self.cursor;

        match self.apply_rule(rule)? {
            None => Err(self.no_match(rule)),
            Some(_) if self.cursor == start => Err(ParseError::NoProgress {
                rule: rule.to_string(),
                position: start,
            }),
            Some(value) => Ok(Unit::new(value.into_nodes())),
        }
    }

    /// Try every alternative of a rule in canonical order.
    ///
    /// Returns `Ok(None)` when none matches, with the cursor back at its entry position.
    pub fn apply_rule(&mut self, name: &str) -> Result<Option<Value>, ParseError> {
        let grammar = self.grammar;
        let rule = grammar
            .rule(name)
            .ok_or_else(|| ParseError::UnknownRule(name.to_string()))?;

        self.depth += 1;
        let result = if is_closure(name, &rule.alternatives) {
            self.repeat_closure(name, &rule.alternatives)
        } else {
            self.apply_alternatives(name, &rule.alternatives)
        };
        self.depth -= 1;
        result
    }

    fn apply_alternatives(
        &mut self,
        name: &str,
        alternatives: &[Alternative],
    ) -> Result<Option<Value>, ParseError> {
        for alternative in alternatives {
            self.trace(format_args!("{alternative} at {}", self.cursor));
            if let Some(value) = self.match_alternative(alternative)? {
                self.trace(format_args!("{name} returned {value}, now at {}", self.cursor));
                return Ok(Some(value));
            }
        }
        self.trace(format_args!("{name} failed at {}", self.cursor));
        Ok(None)
    }

    /// Run a closure rule as a loop, then reduce its repetitions from the last one back.
    fn repeat_closure(
        &mut self,
        name: &str,
        alternatives: &'a [Alternative],
    ) -> Result<Option<Value>, ParseError> {
        let start = self.cursor;
        let (repeating, stopping): (Vec<&'a Alternative>, Vec<&'a Alternative>) = alternatives
            .iter()
            .partition(|alternative| {
                matches!(alternative.reducer, Reducer::Link { recursive: true, .. })
            });

        let mut repeated = Vec::new();
        let last = loop {
            match self.next_repetition(&repeating, &stopping)? {
                Some(step) => {
                    self.trace(format_args!("{name} repeats, now at {}", self.cursor));
                    repeated.push(step);
                }
                None => break self.first_match(&stopping)?,
            }
        };

        let Some((stop, values)) = last else {
            self.cursor = start;
            self.trace(format_args!("{name} failed at {}", self.cursor));
            return Ok(None);
        };

        let mut chain = self.reduce(stop, values)?;
        for (alternative, mut values) in repeated.into_iter().rev() {
            values.push(chain);
            chain = self.reduce(alternative, values)?;
        }
        self.trace(format_args!("{name} returned {chain}, now at {}", self.cursor));
        Ok(Some(chain))
    }

    /// A repeating form whose α matches and is followed by another α.
    fn next_repetition(
        &mut self,
        repeating: &[&'a Alternative],
        stopping: &[&'a Alternative],
    ) -> Result<Option<(&'a Alternative, Vec<Value>)>, ParseError> {
        let step_start = self.cursor;
        for alternative in repeating {
            let body = &alternative.symbols[..alternative.symbols.len() - 1];
            if let Some(values) = self.match_symbols(body)? {
                if self.cursor > step_start && self.lookahead(stopping)? {
                    return Ok(Some((*alternative, values)));
                }
                self.cursor = step_start;
            }
        }
        Ok(None)
    }

    fn lookahead(&mut self, alternatives: &[&'a Alternative]) -> Result<bool, ParseError> {
        let position = self.cursor;
        let found = self.first_match(alternatives)?.is_some();
        self.cursor = position;
        Ok(found)
    }

    fn first_match(
        &mut self,
        alternatives: &[&'a Alternative],
    ) -> Result<Option<(&'a Alternative, Vec<Value>)>, ParseError> {
        for alternative in alternatives {
            if let Some(values) = self.match_symbols(&alternative.symbols)? {
                return Ok(Some((*alternative, values)));
            }
        }
        Ok(None)
    }

    fn match_alternative(
        &mut self,
        alternative: &Alternative,
    ) -> Result<Option<Value>, ParseError> {
        match self.match_symbols(&alternative.symbols)? {
            Some(values) => self.reduce(alternative, values).map(Some),
            None => Ok(None),
        }
    }

    /// Match symbols left to right. On a mismatch the cursor goes back to where it was.
    fn match_symbols(&mut self, symbols: &[Symbol]) -> Result<Option<Vec<Value>>, ParseError> {
        let start = self.cursor;
        let mut values = Vec::new();

        for symbol in symbols {
            if *symbol == Symbol::Epsilon {
                self.trace(format_args!("reducing early on '.'"));
                break;
            }
            if !self.match_symbol(symbol, &mut values)? {
                if self.cursor != start {
                    self.trace(format_args!("backtracking from {} to {start}", self.cursor));
                }
                self.cursor = start;
                return Ok(None);
            }
        }
        Ok(Some(values))
    }

    fn reduce(&self, alternative: &Alternative, values: Vec<Value>) -> Result<Value, ParseError> {
        alternative
            .reducer
            .reduce(values)
            .map_err(|source| ParseError::Reduce {
                rule: alternative.pattern.rule.clone(),
                pattern: alternative.rhs(),
                source,
            })
    }

    fn match_symbol(
        &mut self,
        symbol: &Symbol,
        values: &mut Vec<Value>,
    ) -> Result<bool, ParseError> {
        let matched = match symbol {
            Symbol::Rule(name) | Symbol::Continuation(name) => {
                return Ok(match self.apply_rule(name)? {
                    Some(value) => {
                        values.push(value);
                        true
                    }
                    None => false,
                });
            }
            Symbol::Epsilon => return Ok(true),
            Symbol::Endpoint(kind) => self.consume_if(|token| token.kind == *kind),
            Symbol::Operator(text) => {
                self.consume_if(|token| token.kind == TokenKind::Operator && token.text == *text)
            }
            Symbol::Literal(text) => self.consume_if(|token| token.text == *text),
        };

        match matched {
            Some(token) => {
                self.trace(format_args!("matched {token} for {}", symbol.describe()));
                if symbol.produces_value() {
                    values.push(Value::Text(token.text.clone()));
                }
                Ok(true)
            }
            None => {
                self.furthest.record(self.cursor, symbol.describe());
                Ok(false)
            }
        }
    }

    fn consume_if(&mut self, accept: impl Fn(&Token) -> bool) -> Option<&'a Token> {
        let tokens = self.tokens;
        let token = tokens.get(self.cursor).filter(|token| accept(token))?;
        self.cursor += 1;
        Some(token)
    }

    fn no_match(&self, rule: &str) -> ParseError {
        let found = match self.tokens.get(self.furthest.position) {
            Some(token) => format!("{} '{}'", token.kind, token.text),
            None => "end of input".to_string(),
        };
        ParseError::NoMatch {
            rule: rule.to_string(),
            position: self.furthest.position,
            found,
            expected: self.furthest.expected.clone(),
        }
    }

    fn trace(&self, message: fmt::Arguments<'_>) {
        log::trace!("{:indent$}{message}", "", indent = self.depth * 4);
    }
}

/// `A' : α A' | α`, as left recursion removal writes it
fn is_closure(name: &str, alternatives: &[Alternative]) -> bool {
    !alternatives.is_empty()
        && alternatives
            .iter()
            .all(|alternative| match alternative.reducer {
                Reducer::Link {
                    recursive: true, ..
                } => alternative.symbols.last().and_then(Symbol::rule_name) == Some(name),
                Reducer::Link {
                    recursive: false, ..
                } => true,
                _ => false,
            })
}
