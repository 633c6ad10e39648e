//! Grammar definition
//!
//!     A grammar is a table of named rules, each with an ordered list of alternatives. An
//!     alternative is a pattern string plus a reducer that turns the matched values into the
//!     rule's result:
//!
//!         let mut builder = GrammarBuilder::new("expr");
//!         builder
//!             .declare("expr : expr + term", &["left", "op", "right"], |args| ...)
//!             .declare("expr : term", &["value"], |args| args.take("value"));
//!         let grammar = builder.build()?;
//!
//!     Arguments are bound by the names given with the pattern, one per value producing
//!     symbol, so reducers never depend on positions.
//!
//!     Building rewrites direct left recursion (see [left_recursion]) and classifies every
//!     symbol (see [symbol]). The result is immutable and shared by all parses.

pub mod error;
pub mod left_recursion;
pub mod pattern;
pub mod reducer;
pub mod registry;
pub mod swft_grammar;
pub mod symbol;
pub mod value;

pub use error::GrammarError;
pub use pattern::{Item, Pattern};
pub use reducer::{Action, Args, ReduceError, Reducer};
pub use registry::{Alternative, Grammar, GrammarBuilder, Rule};
pub use swft_grammar::{swft_grammar, swft_grammar_builder, START_RULE};
pub use symbol::Symbol;
pub use value::{Chain, Link, Value};
