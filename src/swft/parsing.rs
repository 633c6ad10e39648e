//! Parsing
//!
//!     A backtracking recursive descent interpreter over a built [Grammar]. Alternatives
//!     are tried in canonical order and the first one that matches wins. A failed
//!     alternative puts the cursor back where it started, which is all the state a failed
//!     attempt leaves behind.
//!
//!     The top-level driver applies the start rule until every token is consumed. Each
//!     application yields one [Unit] of the resulting [Program].
//!
//!     Set `RUST_LOG=swft::swft::parsing=trace` to watch every attempt, match and backtrack.
//!
//! Cost
//!
//!     Nothing is memoized. When a rewritten rule's continuation fails, its leftover
//!     alternatives (`expr : term`, `term : factor`) parse the same prefix again, so each
//!     level of nested parentheses multiplies the work by about four. Ten levels already
//!     take seconds.
//!
//! [Grammar]: crate::swft::grammar::Grammar
//! [Unit]: crate::swft::ast::Unit
//! [Program]: crate::swft::ast::Program

pub mod engine;
pub mod error;

pub use engine::{parse, Parser};
pub use error::ParseError;
