//! Abstract syntax tree
//!
//!     The tree produced by grammar reducers and consumed by the code generator and the
//!     output formats. Every node is immutable once built.
//!
//! Structure
//!
//!     Program
//!         Unit*                   one per invocation of the start rule
//!             Node*               function, statements, or expressions
//!
//!     Containers (Function, Call, BinaryOperation, Parameter, the assignment variants) own
//!     their children exclusively. Identifier and Literal are leaves.

pub mod elements;
pub mod node;
pub mod program;
pub mod snapshot;
pub mod traits;

pub use elements::{
    operator_precedence, Assignment, BinaryOperation, Call, Function, Identifier, Literal,
    Parameter, ANY_TYPE,
};
pub use node::Node;
pub use program::{Program, Unit, UnitKind};
pub use snapshot::{snapshot_from_node, snapshot_from_program, AstSnapshot};
pub use traits::{AstNode, Visitor};
