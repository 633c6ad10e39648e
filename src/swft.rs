//! Main module for swft library functionality

pub mod ast;
pub mod codegen;
pub mod config;
pub mod formats;
pub mod grammar;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod processor;
pub mod testing;
