//! Values flowing through the parse engine
//!
//!     Every matched symbol contributes at most one [Value] to its alternative, and every
//!     reducer returns one. Token texts arrive as `Text`, finished tree pieces as `Node`,
//!     sequences such as parameter lists as `List`.
//!
//!     `Chain` only exists between the rules synthesized by left recursion removal. It holds
//!     the value of the non recursive start plus one link per recursive repetition, in
//!     source order, so the original reducers can be folded over it left to right.

use crate::swft::ast::{Node, Parameter};
use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    None,
    Text(String),
    Node(Node),
    List(Vec<Value>),
    Chain(Chain),
}

impl Value {
    pub fn text(text: impl Into<String>) -> Value {
        Value::Text(text.into())
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Text(_) => "text",
            Value::Node(_) => "node",
            Value::List(_) => "list",
            Value::Chain(_) => "chain",
        }
    }

    /// Splice chains into their flattened values, keep everything else.
    pub fn splice_into(self, out: &mut Vec<Value>) {
        match self {
            Value::Chain(chain) => out.extend(chain.flatten()),
            other => out.push(other),
        }
    }

    /// The nodes carried by this value, looking through lists.
    ///
    /// Used by the top-level driver to turn whatever the start rule returned into a unit.
    pub fn into_nodes(self) -> Vec<Node> {
        match self {
            Value::None | Value::Text(_) => vec![],
            Value::Node(node) => vec![node],
            Value::List(values) => values.into_iter().flat_map(Value::into_nodes).collect(),
            Value::Chain(chain) => chain
                .flatten()
                .into_iter()
                .flat_map(Value::into_nodes)
                .collect(),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(node)
    }
}

impl From<Parameter> for Value {
    fn from(parameter: Parameter) -> Self {
        Value::Node(Node::Parameter(parameter))
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(values)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "none"),
            Value::Text(text) => write!(f, "'{text}'"),
            Value::Node(node) => write!(f, "{node}"),
            Value::List(values) => {
                let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Value::Chain(chain) => {
                let items: Vec<String> = chain
                    .clone()
                    .flatten()
                    .iter()
                    .map(|v| v.to_string())
                    .collect();
                write!(f, "chain[{}]", items.join(", "))
            }
        }
    }
}

/// One repetition of a recursive alternative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Index of the recursive alternative in declaration order
    pub alternative: usize,
    /// Values matched by that alternative, without the leading self reference
    pub values: Vec<Value>,
}

/// Left recursion in unrolled form: `seed link link ...`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain {
    pub seed: Option<Box<Value>>,
    pub links: VecDeque<Link>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepend(&mut self, link: Link) {
        self.links.push_front(link);
    }

    /// All values in source order.
    pub fn flatten(self) -> Vec<Value> {
        let mut values = Vec::new();
        if let Some(seed) = self.seed {
            seed.splice_into(&mut values);
        }
        for link in self.links {
            for value in link.values {
                value.splice_into(&mut values);
            }
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_flatten_is_source_order() {
        let chain = Chain {
            seed: Some(Box::new(Value::text("a"))),
            links: VecDeque::from(vec![
                Link {
                    alternative: 0,
                    values: vec![Value::text("+"), Value::text("b")],
                },
                Link {
                    alternative: 0,
                    values: vec![Value::text("+"), Value::text("c")],
                },
            ]),
        };
        let flat: Vec<String> = chain.flatten().iter().map(|v| v.to_string()).collect();
        assert_eq!(flat, vec!["'a'", "'+'", "'b'", "'+'", "'c'"]);
    }

    #[test]
    fn test_chain_display() {
        let value = Value::Chain(Chain {
            seed: Some(Box::new(Value::text("a"))),
            links: VecDeque::from(vec![Link {
                alternative: 1,
                values: vec![Value::text("-"), Value::text("b")],
            }]),
        });
        assert_eq!(value.to_string(), "chain['a', '-', 'b']");
    }

    #[test]
    fn test_into_nodes_looks_through_lists() {
        let value = Value::List(vec![
            Value::Node(Node::literal("1")),
            Value::List(vec![Value::Node(Node::literal("2"))]),
        ]);
        assert_eq!(value.into_nodes().len(), 2);
    }
}
