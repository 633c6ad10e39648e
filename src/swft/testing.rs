//! Testing utilities for parsed programs
//!
//! Tests should check the whole shape of what the parser built rather than counting nodes.
//! Two tools help with that:
//!
//! 1. **[factories]** - parse a source with the swft grammar in one call, and build
//!    expected nodes tersely.
//! 2. **[assert_program]** - a fluent assertion API over programs, units and nodes.
//!
//! ```rust-example
//! use swft::swft::testing::{assert_program, factories::parse_source};
//!
//! let program = parse_source("func add(a: Int) { print(a) }");
//! assert_program(&program)
//!     .unit_count(1)
//!     .unit(0, |unit| {
//!         unit.kind(UnitKind::Function).node(0, |node| {
//!             node.assert_function()
//!                 .name("add")
//!                 .parameter_count(1)
//!                 .body_shapes(&["Call(Identifier)"]);
//!         });
//!     });
//! ```
//!
//! For expressions, [NodeAssertion::shape] compares against [Node::shape](crate::swft::ast::Node::shape),
//! which spells out the nesting, so `a + b + c` is checked as
//! `BinaryOperation(BinaryOperation(Identifier, Identifier), Identifier)`.

mod testing_assertions;
mod testing_factories;

pub use testing_assertions::{
    assert_program, AssignmentAssertion, BinaryOperationAssertion, CallAssertion,
    FunctionAssertion, NodeAssertion, ProgramAssertion, UnitAssertion,
};

// Public submodule path: crate::swft::testing::factories
pub mod factories {
    pub use super::testing_factories::*;
}
