//! Program and unit containers
//!
//!     The parser's top-level driver invokes the start rule until the tokens run out. Each
//!     invocation yields one unit: a function declaration, a block of statements, or a
//!     sequence of expressions. A program is the ordered list of those units.

use super::node::Node;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    Function,
    Statements,
    Expressions,
}

/// One top-level parsed construct
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub nodes: Vec<Node>,
}

impl Unit {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn kind(&self) -> UnitKind {
        match self.nodes.as_slice() {
            [Node::Function(_)] => UnitKind::Function,
            nodes if !nodes.is_empty() && nodes.iter().all(Node::is_statement) => {
                UnitKind::Statements
            }
            _ => UnitKind::Expressions,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub units: Vec<Unit>,
}

impl Program {
    pub fn new(units: Vec<Unit>) -> Self {
        Self { units }
    }

    /// All nodes of all units, in source order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.units.iter().flat_map(|unit| unit.nodes.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Shapes of every top-level node, see [Node::shape].
    pub fn shape(&self) -> Vec<String> {
        self.nodes().map(Node::shape).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swft::ast::{Call, Function};

    #[test]
    fn test_unit_kinds() {
        let function = Unit::new(vec![Node::Function(Function::new("f", vec![], vec![]))]);
        assert_eq!(function.kind(), UnitKind::Function);

        let statements = Unit::new(vec![Node::Call(Call::new("print", vec![]))]);
        assert_eq!(statements.kind(), UnitKind::Statements);

        let expressions = Unit::new(vec![Node::literal("1"), Node::literal("2")]);
        assert_eq!(expressions.kind(), UnitKind::Expressions);
    }
}
