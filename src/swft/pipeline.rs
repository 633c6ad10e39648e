//! Compile pipeline
//!
//!     source text → tokens → program → python
//!
//! A [Compiler] builds its grammar once, left recursion rewrite included, and can then run
//! any number of sources through it. Each stage is also exposed on its own so callers can
//! stop early (the processor stops after tokens or after the tree for inspection formats).

use crate::swft::ast::Program;
use crate::swft::codegen::{GenerateError, PythonGenerator};
use crate::swft::config::{CodegenConfig, SwftConfig};
use crate::swft::grammar::{swft_grammar_builder, Grammar, GrammarError};
use crate::swft::lexing::{tokenize, Token, TokenizeError};
use crate::swft::parsing::{parse, ParseError};
use std::fmt;

/// Any failure along the pipeline, tagged with the stage it came from
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    Grammar(GrammarError),
    Tokenize(TokenizeError),
    Parse(ParseError),
    Generate(GenerateError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Grammar(err) => write!(f, "Grammar error: {err}"),
            CompileError::Tokenize(err) => write!(f, "Tokenize error: {err}"),
            CompileError::Parse(err) => write!(f, "Parse error: {err}"),
            CompileError::Generate(err) => write!(f, "Generate error: {err}"),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Grammar(err) => Some(err),
            CompileError::Tokenize(err) => Some(err),
            CompileError::Parse(err) => Some(err),
            CompileError::Generate(err) => Some(err),
        }
    }
}

impl From<GrammarError> for CompileError {
    fn from(err: GrammarError) -> Self {
        CompileError::Grammar(err)
    }
}

impl From<TokenizeError> for CompileError {
    fn from(err: TokenizeError) -> Self {
        CompileError::Tokenize(err)
    }
}

impl From<ParseError> for CompileError {
    fn from(err: ParseError) -> Self {
        CompileError::Parse(err)
    }
}

impl From<GenerateError> for CompileError {
    fn from(err: GenerateError) -> Self {
        CompileError::Generate(err)
    }
}

/// A built grammar plus code generation settings
#[derive(Debug)]
pub struct Compiler {
    grammar: Grammar,
    codegen: CodegenConfig,
}

impl Compiler {
    /// Compiler for the swft grammar with default settings.
    pub fn new() -> Result<Self, CompileError> {
        Ok(Self {
            grammar: swft_grammar_builder().build()?,
            codegen: CodegenConfig::default(),
        })
    }

    pub fn from_config(config: &SwftConfig) -> Result<Self, CompileError> {
        let grammar = swft_grammar_builder()
            .start_rule(config.parser.start_rule.as_str())
            .rewrite_left_recursion(config.parser.rewrite_left_recursion)
            .build()?;
        Ok(Self {
            grammar,
            codegen: config.codegen.clone(),
        })
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, CompileError> {
        Ok(tokenize(source)?)
    }

    pub fn parse(&self, source: &str) -> Result<Program, CompileError> {
        let tokens = self.tokenize(source)?;
        Ok(parse(&self.grammar, &tokens)?)
    }

    /// A fresh generator with this compiler's settings and an empty scope.
    pub fn generator(&self) -> PythonGenerator {
        PythonGenerator::new()
            .with_indent_width(self.codegen.indent_width)
            .with_declaration_check(self.codegen.check_declarations)
    }

    /// Compile a source text to python.
    pub fn compile(&self, source: &str) -> Result<String, CompileError> {
        let program = self.parse(source)?;
        Ok(self.generator().generate(&program)?)
    }
}

/// One-shot compile with default settings.
pub fn compile(source: &str) -> Result<String, CompileError> {
    Compiler::new()?.compile(source)
}
