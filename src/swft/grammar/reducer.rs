//! Reducers: turning matched values into a rule's result
//!
//!     Each alternative is paired with a [Reducer]. Ordinary declarations use
//!     [Reducer::Build]: the matched values are bound to the argument names declared with
//!     the pattern and handed to the user's [Action]. The three other variants are produced
//!     by left recursion removal and never written by hand:
//!
//!         A_autoedit : β A'       Seed    run β's action, start a chain with its result
//!         A' : α A'               Link    prepend α's values to the chain of the tail
//!         A' : α                  Link    start a chain with α's values
//!         A : autoedit            Fold    fold α's action over the chain from the seed
//!
//!     Folding from the seed makes `A α α` reduce as `((A α) α)`, so left recursive
//!     grammars keep their left associativity after the rewrite.

use super::value::{Chain, Link, Value};
use crate::swft::ast::{Node, Parameter};
use std::fmt;
use std::sync::Arc;

pub type ReduceFn = Arc<dyn Fn(&mut Args) -> Result<Value, ReduceError> + Send + Sync>;

/// Error raised when a reducer gets values it cannot use
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    Arity { expected: usize, found: usize },
    MissingArgument(String),
    UnexpectedValue {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
    EmptyChain,
    UnknownAlternative(usize),
}

impl fmt::Display for ReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceError::Arity { expected, found } => {
                write!(f, "Expected {expected} arguments, got {found}")
            }
            ReduceError::MissingArgument(name) => write!(f, "Missing argument '{name}'"),
            ReduceError::UnexpectedValue {
                name,
                expected,
                found,
            } => write!(f, "Argument '{name}' should be {expected}, got {found}"),
            ReduceError::EmptyChain => write!(f, "Continuation chain has no start value"),
            ReduceError::UnknownAlternative(index) => {
                write!(f, "Continuation refers to unknown alternative {index}")
            }
        }
    }
}

impl std::error::Error for ReduceError {}

/// Matched values bound to declared argument names
#[derive(Debug)]
pub struct Args {
    slots: Vec<(String, Option<Value>)>,
}

impl Args {
    pub fn bind(names: &[String], values: Vec<Value>) -> Result<Args, ReduceError> {
        if names.len() != values.len() {
            return Err(ReduceError::Arity {
                expected: names.len(),
                found: values.len(),
            });
        }
        let slots = names
            .iter()
            .cloned()
            .zip(values.into_iter().map(Some))
            .collect();
        Ok(Args { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Move an argument out. Each argument can be taken once.
    pub fn take(&mut self, name: &str) -> Result<Value, ReduceError> {
        self.slots
            .iter_mut()
            .find(|(slot, _)| slot == name)
            .and_then(|(_, value)| value.take())
            .ok_or_else(|| ReduceError::MissingArgument(name.to_string()))
    }

    pub fn node(&mut self, name: &str) -> Result<Node, ReduceError> {
        match self.take(name)? {
            Value::Node(node) => Ok(node),
            other => Err(unexpected(name, "a node", &other)),
        }
    }

    /// Token text, or the name/value of a leaf node.
    pub fn text(&mut self, name: &str) -> Result<String, ReduceError> {
        match self.take(name)? {
            Value::Text(text) => Ok(text),
            Value::Node(Node::Identifier(identifier)) => Ok(identifier.name),
            Value::Node(Node::Literal(literal)) => Ok(literal.value),
            other => Err(unexpected(name, "text", &other)),
        }
    }

    /// A list argument; a single value counts as a list of one.
    pub fn list(&mut self, name: &str) -> Result<Vec<Value>, ReduceError> {
        match self.take(name)? {
            Value::List(values) => Ok(values),
            Value::Chain(chain) => Ok(chain.flatten()),
            Value::None => Ok(vec![]),
            other => Ok(vec![other]),
        }
    }

    pub fn nodes(&mut self, name: &str) -> Result<Vec<Node>, ReduceError> {
        self.list(name)?
            .into_iter()
            .map(|value| match value {
                Value::Node(node) => Ok(node),
                other => Err(unexpected(name, "a list of nodes", &other)),
            })
            .collect()
    }

    pub fn parameters(&mut self, name: &str) -> Result<Vec<Parameter>, ReduceError> {
        self.list(name)?
            .into_iter()
            .map(|value| match value {
                Value::Node(Node::Parameter(parameter)) => Ok(parameter),
                other => Err(unexpected(name, "a list of parameters", &other)),
            })
            .collect()
    }
}

fn unexpected(name: &str, expected: &'static str, found: &Value) -> ReduceError {
    ReduceError::UnexpectedValue {
        name: name.to_string(),
        expected,
        found: found.kind_name(),
    }
}

/// Declared argument names plus the function that builds the result
#[derive(Clone)]
pub struct Action {
    params: Vec<String>,
    reduce: ReduceFn,
}

impl Action {
    pub fn new<F>(params: &[&str], reduce: F) -> Self
    where
        F: Fn(&mut Args) -> Result<Value, ReduceError> + Send + Sync + 'static,
    {
        Self {
            params: params.iter().map(|p| p.to_string()).collect(),
            reduce: Arc::new(reduce),
        }
    }

    /// Pass the single argument through unchanged.
    pub fn forward(param: &str) -> Self {
        let name = param.to_string();
        Self::new(&[param], move |args| args.take(&name))
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn apply(&self, values: Vec<Value>) -> Result<Value, ReduceError> {
        let mut args = Args::bind(&self.params, spliced(values))?;
        (self.reduce)(&mut args)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

fn spliced(values: Vec<Value>) -> Vec<Value> {
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        value.splice_into(&mut out);
    }
    out
}

#[derive(Debug, Clone)]
pub enum Reducer {
    Build(Action),
    Seed(Action),
    Link { alternative: usize, recursive: bool },
    Fold(Vec<Action>),
}

impl Reducer {
    pub fn reduce(&self, mut values: Vec<Value>) -> Result<Value, ReduceError> {
        match self {
            Reducer::Build(action) => action.apply(values),
            Reducer::Seed(action) => {
                let mut chain = pop_chain(&mut values)?;
                chain.seed = Some(Box::new(action.apply(values)?));
                Ok(Value::Chain(chain))
            }
            Reducer::Link {
                alternative,
                recursive,
            } => {
                let mut chain = if *recursive {
                    pop_chain(&mut values)?
                } else {
                    Chain::new()
                };
                chain.prepend(Link {
                    alternative: *alternative,
                    values,
                });
                Ok(Value::Chain(chain))
            }
            Reducer::Fold(actions) => {
                let chain = pop_chain(&mut values)?;
                if !values.is_empty() {
                    return Err(ReduceError::Arity {
                        expected: 1,
                        found: values.len() + 1,
                    });
                }
                let mut acc = *chain.seed.ok_or(ReduceError::EmptyChain)?;
                for link in chain.links {
                    let action = actions
                        .get(link.alternative)
                        .ok_or(ReduceError::UnknownAlternative(link.alternative))?;
                    let mut args = Vec::with_capacity(link.values.len() + 1);
                    args.push(acc);
                    args.extend(link.values);
                    acc = action.apply(args)?;
                }
                Ok(acc)
            }
        }
    }
}

fn pop_chain(values: &mut Vec<Value>) -> Result<Chain, ReduceError> {
    match values.pop() {
        Some(Value::Chain(chain)) => Ok(chain),
        Some(other) => Err(unexpected("continuation", "a chain", &other)),
        None => Err(ReduceError::MissingArgument("continuation".to_string())),
    }
}
