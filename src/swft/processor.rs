//! File processing API
//!
//! A processing spec names how far to run a source through the pipeline and how to print
//! the result, as a `<stage>-<format>` string:
//!
//!     token-simple    one token per line, `<kind:text>`
//!     token-json      the token list as JSON, with byte spans
//!     ast-treeviz     see [formats::treeviz](crate::swft::formats::treeviz)
//!     ast-tag         see [formats::tag](crate::swft::formats::tag)
//!     ast-json        the program tree as JSON
//!     ast-yaml        the program tree as YAML
//!     code-python     generated python
//!
//! AST formats are looked up by name in the default
//! [FormatRegistry](crate::swft::formats::FormatRegistry).

use crate::swft::formats::{FormatError, FormatRegistry};
use crate::swft::lexing::Token;
use crate::swft::pipeline::{CompileError, Compiler};
use std::fmt;
use std::fs;
use std::path::Path;

/// How far a source is taken through the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
    Code,
}

impl ProcessingStage {
    pub fn name(&self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
            ProcessingStage::Code => "code",
        }
    }
}

static STAGES: [ProcessingStage; 3] = [
    ProcessingStage::Token,
    ProcessingStage::Ast,
    ProcessingStage::Code,
];

static FORMATS: [OutputFormat; 6] = [
    OutputFormat::Simple,
    OutputFormat::Json,
    OutputFormat::Treeviz,
    OutputFormat::Tag,
    OutputFormat::Yaml,
    OutputFormat::Python,
];

/// How the result of a stage is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Treeviz,
    Tag,
    Yaml,
    Python,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Tag => "tag",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Python => "python",
        }
    }

    fn from_name(name: &str) -> Option<OutputFormat> {
        match name {
            "simple" => Some(OutputFormat::Simple),
            "json" => Some(OutputFormat::Json),
            "treeviz" => Some(OutputFormat::Treeviz),
            "tag" => Some(OutputFormat::Tag),
            "yaml" => Some(OutputFormat::Yaml),
            "python" => Some(OutputFormat::Python),
            _ => None,
        }
    }

    fn supports(&self, stage: ProcessingStage) -> bool {
        match stage {
            ProcessingStage::Token => matches!(self, OutputFormat::Simple | OutputFormat::Json),
            ProcessingStage::Ast => matches!(
                self,
                OutputFormat::Treeviz | OutputFormat::Tag | OutputFormat::Json | OutputFormat::Yaml
            ),
            ProcessingStage::Code => matches!(self, OutputFormat::Python),
        }
    }
}

/// A stage plus a format it supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            "code" => ProcessingStage::Code,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = OutputFormat::from_name(format)
            .ok_or_else(|| ProcessingError::InvalidFormatType(format.to_string()))?;

        if !format.supports(stage) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "Format '{}' is not supported for the {} stage",
                format.name(),
                stage.name()
            )));
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        STAGES
            .iter()
            .flat_map(|&stage| {
                FORMATS
                    .iter()
                    .filter(move |format| format.supports(stage))
                    .map(move |&format| ProcessingSpec { stage, format })
            })
            .collect()
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stage.name(), self.format.name())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    FileNotFound(String),
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    IoError(String),
    Compile(CompileError),
    Format(FormatError),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Compile(err) => write!(f, "{}", err),
            ProcessingError::Format(err) => write!(f, "{}", err),
        }
    }
}

impl From<CompileError> for ProcessingError {
    fn from(err: CompileError) -> Self {
        ProcessingError::Compile(err)
    }
}

impl From<FormatError> for ProcessingError {
    fn from(err: FormatError) -> Self {
        ProcessingError::Format(err)
    }
}

/// Read a source file and process it according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    compiler: &Compiler,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(ProcessingError::FileNotFound(
            file_path.display().to_string(),
        ));
    }

    let content =
        fs::read_to_string(file_path).map_err(|e| ProcessingError::IoError(e.to_string()))?;
    log::debug!("processing {} as {}", file_path.display(), spec);
    process_source(&content, spec, compiler)
}

/// Process source text according to the given specification
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    compiler: &Compiler,
) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => format_tokens(&compiler.tokenize(source)?, spec.format),
        ProcessingStage::Ast => {
            let program = compiler.parse(source)?;
            Ok(FormatRegistry::with_defaults().serialize(&program, spec.format.name())?)
        }
        ProcessingStage::Code => Ok(compiler.compile(source)?),
    }
}

/// Format tokens according to the specified output format.
pub fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Format(FormatError::SerializationError(e.to_string()))),
        other => Err(ProcessingError::InvalidFormatType(format!(
            "Format '{}' only works with the ast or code stage",
            other.name()
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::to_string)
        .collect()
}
