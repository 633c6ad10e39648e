//! # swft
//!
//! A small compiler front end for the swft toy language.
//!
//! The pipeline is text → tokens → AST → python:
//!
//! src/swft
//!   ├── lexing      logos based tokenizer
//!   ├── grammar     rule registry, pattern surface, left recursion rewriting, the swft grammar
//!   ├── parsing     backtracking interpreter over the grammar table
//!   ├── ast         the node model produced by the reducers
//!   ├── codegen     python generator with the declared-name check
//!   ├── formats     treeviz / tag / json / yaml views of the AST
//!   ├── pipeline    Compiler: the stages above wired together
//!   ├── processor   `stage-format` selection used by the binary
//!   ├── config      layered TOML configuration
//!   └── testing     factories and fluent assertions for tests
//!
//! The parser is not hand written: it is a generic engine that walks a table of named
//! rule alternatives. See [grammar](swft::grammar) for how the table is declared.

#![allow(rustdoc::invalid_html_tags)]

pub mod swft;
