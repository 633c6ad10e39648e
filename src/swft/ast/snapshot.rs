//! AST Snapshot - a normalized intermediate representation of the AST tree
//!
//! This module provides a canonical, format-agnostic representation of the AST
//! suitable for serialization to any output format (treeviz, tag, etc.)
//!
//! The snapshot captures node types, labels, attributes and children, so each serializer
//! only deals with presentation. Serializers consume [snapshot_from_program] or
//! [snapshot_from_node] rather than walking the tree themselves.

use super::elements::Parameter;
use super::node::Node;
use super::program::{Program, Unit, UnitKind};
use super::traits::AstNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The type of node (e.g., "Function", "Call", "Literal")
    pub node_type: String,

    /// The primary label of the node
    pub label: String,

    /// Additional attributes specific to the node type, ordered by key
    pub attributes: BTreeMap<String, String>,

    /// Child nodes in the tree
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Build a snapshot for a whole program, one child per unit.
pub fn snapshot_from_program(program: &Program) -> AstSnapshot {
    AstSnapshot::new("Program", format!("Program ({} units)", program.units.len()))
        .with_children(program.units.iter().map(snapshot_from_unit).collect())
}

fn snapshot_from_unit(unit: &Unit) -> AstSnapshot {
    let label = match unit.kind() {
        UnitKind::Function => "function",
        UnitKind::Statements => "statements",
        UnitKind::Expressions => "expressions",
    };
    AstSnapshot::new("Unit", label)
        .with_children(unit.nodes.iter().map(snapshot_from_node).collect())
}

/// Create a snapshot of a single AST node and all its children
pub fn snapshot_from_node(node: &Node) -> AstSnapshot {
    let snapshot = AstSnapshot::new(node.node_type(), node.display_label());

    match node {
        Node::Function(function) => snapshot
            .with_children(function.parameters.iter().map(snapshot_parameter).collect())
            .with_children(function.body.iter().map(snapshot_from_node).collect()),
        Node::Parameter(parameter) => snapshot_parameter(parameter),
        Node::StaticAssignment(assignment) | Node::DynamicAssignment(assignment) => snapshot
            .with_attribute("type", assignment.var_type.clone())
            .with_child(snapshot_from_node(&assignment.value)),
        Node::Call(call) => {
            snapshot.with_children(call.arguments.iter().map(snapshot_from_node).collect())
        }
        Node::BinaryOperation(operation) => snapshot
            .with_child(snapshot_from_node(&operation.left))
            .with_child(snapshot_from_node(&operation.right)),
        Node::Identifier(_) | Node::Literal(_) => snapshot,
    }
}

fn snapshot_parameter(parameter: &Parameter) -> AstSnapshot {
    let mut snapshot = AstSnapshot::new("Parameter", parameter.name.clone())
        .with_attribute("type", parameter.param_type.clone());
    if parameter.hint != parameter.name {
        snapshot = snapshot.with_attribute("hint", parameter.hint.clone());
    }
    if let Some(default) = &parameter.default {
        snapshot = snapshot.with_child(snapshot_from_node(default));
    }
    snapshot
}
