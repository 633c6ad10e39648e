//! AST element types
//!
//! One file per node payload. The [Node](super::Node) enum ties them together.

pub mod assignment;
pub mod binary_operation;
pub mod call;
pub mod function;
pub mod identifier;
pub mod literal;
pub mod parameter;

/// Type marker recorded when a declaration has no type annotation.
pub const ANY_TYPE: &str = "Any";

pub use assignment::Assignment;
pub use binary_operation::{operator_precedence, BinaryOperation};
pub use call::Call;
pub use function::Function;
pub use identifier::Identifier;
pub use literal::Literal;
pub use parameter::Parameter;
