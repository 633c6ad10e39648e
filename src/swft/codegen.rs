//! Code generation
//!
//!     Turns a parsed [Program](crate::swft::ast::Program) back into source text. The only
//!     backend emits python. Generation also runs the one static check of the pipeline:
//!     every identifier passed to a call must have been declared earlier, by an assignment
//!     or as a function parameter.

pub mod error;
pub mod python;
pub mod scope;

pub use error::GenerateError;
pub use python::{PythonGenerator, DEFAULT_INDENT_WIDTH};
pub use scope::Scope;
