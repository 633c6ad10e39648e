//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the visitor used to walk the tree and the label interface used by
//! the snapshot serializers.

use super::elements::{
    Assignment, BinaryOperation, Call, Function, Identifier, Literal, Parameter,
};
use super::node::Node;

/// Visitor trait for traversing the AST
///
/// Each visit method corresponds to a node type. The default implementations descend into
/// the children through the `walk_*` helpers, so an implementation only overrides the
/// methods it cares about and calls the matching `walk_*` if it still wants to descend.
///
/// # Example
///
/// ```ignore
/// struct Names(Vec<String>);
///
/// impl Visitor for Names {
///     fn visit_identifier(&mut self, identifier: &Identifier) {
///         self.0.push(identifier.name.clone());
///     }
/// }
///
/// node.accept(&mut names);
/// ```
pub trait Visitor {
    fn visit_function(&mut self, function: &Function) {
        walk_function(self, function);
    }
    fn visit_parameter(&mut self, parameter: &Parameter) {
        walk_parameter(self, parameter);
    }
    fn visit_static_assignment(&mut self, assignment: &Assignment) {
        walk_assignment(self, assignment);
    }
    fn visit_dynamic_assignment(&mut self, assignment: &Assignment) {
        walk_assignment(self, assignment);
    }
    fn visit_call(&mut self, call: &Call) {
        walk_call(self, call);
    }
    fn visit_binary_operation(&mut self, operation: &BinaryOperation) {
        walk_binary_operation(self, operation);
    }

    // Leaf nodes
    fn visit_identifier(&mut self, _identifier: &Identifier) {}
    fn visit_literal(&mut self, _literal: &Literal) {}
}

pub fn walk_function<V: Visitor + ?Sized>(visitor: &mut V, function: &Function) {
    for parameter in &function.parameters {
        visitor.visit_parameter(parameter);
    }
    visit_children(visitor, &function.body);
}

pub fn walk_parameter<V: Visitor + ?Sized>(visitor: &mut V, parameter: &Parameter) {
    if let Some(default) = &parameter.default {
        default.accept(visitor);
    }
}

pub fn walk_assignment<V: Visitor + ?Sized>(visitor: &mut V, assignment: &Assignment) {
    assignment.value.accept(visitor);
}

pub fn walk_call<V: Visitor + ?Sized>(visitor: &mut V, call: &Call) {
    visit_children(visitor, &call.arguments);
}

pub fn walk_binary_operation<V: Visitor + ?Sized>(visitor: &mut V, operation: &BinaryOperation) {
    operation.left.accept(visitor);
    operation.right.accept(visitor);
}

/// Helper function to visit all nodes in a slice
pub fn visit_children<V: Visitor + ?Sized>(visitor: &mut V, nodes: &[Node]) {
    for node in nodes {
        node.accept(visitor);
    }
}

impl Node {
    /// Accept a visitor for traversing this node and its children
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Node::Function(function) => visitor.visit_function(function),
            Node::Parameter(parameter) => visitor.visit_parameter(parameter),
            Node::StaticAssignment(assignment) => visitor.visit_static_assignment(assignment),
            Node::DynamicAssignment(assignment) => visitor.visit_dynamic_assignment(assignment),
            Node::Call(call) => visitor.visit_call(call),
            Node::BinaryOperation(operation) => visitor.visit_binary_operation(operation),
            Node::Identifier(identifier) => visitor.visit_identifier(identifier),
            Node::Literal(literal) => visitor.visit_literal(literal),
        }
    }
}

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        Node::node_type(self)
    }

    fn display_label(&self) -> String {
        match self {
            Node::Function(function) => function.name.clone(),
            Node::Parameter(parameter) => parameter.name.clone(),
            Node::StaticAssignment(assignment) | Node::DynamicAssignment(assignment) => {
                assignment.name.clone()
            }
            Node::Call(call) => call.name.clone(),
            Node::BinaryOperation(operation) => operation.operator.clone(),
            Node::Identifier(identifier) => identifier.name.clone(),
            Node::Literal(literal) => literal.value.clone(),
        }
    }
}
