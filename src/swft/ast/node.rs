//! The closed set of AST nodes
//!
//!     Nodes are built bottom-up by grammar reducers and never mutated afterwards. Container
//!     nodes own their children, so the tree has no sharing and no cycles.

use super::elements::{
    Assignment, BinaryOperation, Call, Function, Identifier, Literal, Parameter,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node")]
pub enum Node {
    Function(Function),
    Parameter(Parameter),
    StaticAssignment(Assignment),
    DynamicAssignment(Assignment),
    Call(Call),
    BinaryOperation(BinaryOperation),
    Identifier(Identifier),
    Literal(Literal),
}

impl Node {
    pub fn identifier(name: impl Into<String>) -> Node {
        Node::Identifier(Identifier::new(name))
    }

    pub fn literal(value: impl Into<String>) -> Node {
        Node::Literal(Literal::new(value))
    }

    pub fn binary(left: Node, operator: impl Into<String>, right: Node) -> Node {
        Node::BinaryOperation(BinaryOperation::new(left, operator, right))
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            Node::Function(_) => "Function",
            Node::Parameter(_) => "Parameter",
            Node::StaticAssignment(_) => "StaticAssignment",
            Node::DynamicAssignment(_) => "DynamicAssignment",
            Node::Call(_) => "Call",
            Node::BinaryOperation(_) => "BinaryOperation",
            Node::Identifier(_) => "Identifier",
            Node::Literal(_) => "Literal",
        }
    }

    /// Nodes that may appear in a statement list.
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            Node::Function(_) | Node::StaticAssignment(_) | Node::DynamicAssignment(_) | Node::Call(_)
        )
    }

    /// The tree structure with names and values erased.
    ///
    ///     `1 + 2 * x` → `BinaryOperation(Literal, BinaryOperation(Literal, Identifier))`
    pub fn shape(&self) -> String {
        let children: Vec<String> = match self {
            Node::Function(function) => function
                .parameters
                .iter()
                .map(parameter_shape)
                .chain(function.body.iter().map(Node::shape))
                .collect(),
            Node::Parameter(parameter) => return parameter_shape(parameter),
            Node::StaticAssignment(assignment) | Node::DynamicAssignment(assignment) => {
                vec![assignment.value.shape()]
            }
            Node::Call(call) => call.arguments.iter().map(Node::shape).collect(),
            Node::BinaryOperation(operation) => {
                vec![operation.left.shape(), operation.right.shape()]
            }
            Node::Identifier(_) | Node::Literal(_) => vec![],
        };

        if children.is_empty() {
            self.node_type().to_string()
        } else {
            format!("{}({})", self.node_type(), children.join(", "))
        }
    }
}

fn parameter_shape(parameter: &Parameter) -> String {
    match &parameter.default {
        Some(default) => format!("Parameter({})", default.shape()),
        None => "Parameter".to_string(),
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Function(function) => write!(f, "{function}"),
            Node::Parameter(parameter) => write!(f, "{parameter}"),
            Node::StaticAssignment(assignment) => write!(f, "let {assignment}"),
            Node::DynamicAssignment(assignment) => write!(f, "var {assignment}"),
            Node::Call(call) => write!(f, "{call}"),
            Node::BinaryOperation(operation) => write!(f, "{operation}"),
            Node::Identifier(identifier) => write!(f, "{identifier}"),
            Node::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_erases_names() {
        let a = Node::binary(
            Node::literal("1"),
            "+",
            Node::binary(Node::literal("2"), "*", Node::identifier("x")),
        );
        let b = Node::binary(
            Node::literal("7"),
            "-",
            Node::binary(Node::literal("8"), "/", Node::identifier("y")),
        );
        assert_eq!(
            a.shape(),
            "BinaryOperation(Literal, BinaryOperation(Literal, Identifier))"
        );
        assert_eq!(a.shape(), b.shape());
    }

    #[test]
    fn test_statement_class() {
        let call = Node::Call(Call::new("print", vec![]));
        assert!(call.is_statement());
        assert!(!Node::literal("1").is_statement());
    }

    #[test]
    fn test_display() {
        let node = Node::DynamicAssignment(Assignment::untyped(
            "x",
            Node::binary(Node::literal("1"), "+", Node::literal("2")),
        ));
        assert_eq!(node.to_string(), "var x: Any = (1 + 2)");
    }

    #[test]
    fn test_serializes_with_node_tag() {
        let json = serde_json::to_string(&Node::identifier("a")).unwrap();
        assert_eq!(json, r#"{"node":"Identifier","name":"a"}"#);
    }
}
