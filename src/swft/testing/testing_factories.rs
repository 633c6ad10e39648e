//! Factories for test programs and nodes
//!
//! The parse helpers panic with the full error on failure, which is what a test wants.

use crate::swft::ast::{Call, Function, Node, Parameter, Program};
use crate::swft::pipeline::Compiler;

/// Parse a source with the default swft grammar.
pub fn parse_source(source: &str) -> Program {
    let compiler = Compiler::new().unwrap_or_else(|err| panic!("grammar failed to build: {err}"));
    compiler
        .parse(source)
        .unwrap_or_else(|err| panic!("failed to parse {source:?}: {err}"))
}

/// Compile a source to python with default settings.
pub fn compile_source(source: &str) -> String {
    crate::swft::pipeline::compile(source)
        .unwrap_or_else(|err| panic!("failed to compile {source:?}: {err}"))
}

pub fn ident(name: &str) -> Node {
    Node::identifier(name)
}

pub fn lit(value: &str) -> Node {
    Node::literal(value)
}

pub fn binary(left: Node, operator: &str, right: Node) -> Node {
    Node::binary(left, operator, right)
}

pub fn call(name: &str, arguments: Vec<Node>) -> Node {
    Node::Call(Call::new(name, arguments))
}

pub fn function(name: &str, parameters: Vec<Parameter>, body: Vec<Node>) -> Node {
    Node::Function(Function::new(name, parameters, body))
}

pub fn param(name: &str) -> Parameter {
    Parameter::new(name)
}
