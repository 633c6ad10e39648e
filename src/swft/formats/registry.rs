//! Format registry for program serialization
//!
//! Each format implements the `Formatter` trait and can be registered with `FormatRegistry`.

use crate::swft::ast::Program;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// A named way of turning a program into text
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "treeviz", "tag")
    fn name(&self) -> &str;

    fn serialize(&self, program: &Program) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of program formatters, keyed by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter of the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a program using the named format
    pub fn serialize(&self, program: &Program, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(program)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::TreevizFormatter);
        registry.register(super::TagFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swft::ast::{Node, Unit};

    struct CountFormatter;
    impl Formatter for CountFormatter {
        fn name(&self) -> &str {
            "count"
        }
        fn serialize(&self, program: &Program) -> Result<String, FormatError> {
            Ok(program.nodes().count().to_string())
        }
        fn description(&self) -> &str {
            "Number of top-level nodes"
        }
    }

    fn program() -> Program {
        Program::new(vec![Unit::new(vec![Node::literal("1"), Node::literal("2")])])
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        assert!(registry.list_formats().is_empty());
        registry.register(CountFormatter);

        assert!(registry.has("count"));
        assert_eq!(registry.list_formats(), vec!["count"]);
        assert_eq!(
            registry.get("count").map(|f| f.description()),
            Some("Number of top-level nodes")
        );
        assert_eq!(registry.serialize(&program(), "count").unwrap(), "2");
    }

    #[test]
    fn test_registry_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(
            registry.list_formats(),
            vec!["json", "tag", "treeviz", "yaml"]
        );
    }

    #[test]
    fn test_registry_format_not_found() {
        let registry = FormatRegistry::with_defaults();
        let err = registry.serialize(&program(), "nonexistent").unwrap_err();
        assert_eq!(err, FormatError::FormatNotFound("nonexistent".to_string()));
        assert_eq!(err.to_string(), "Format 'nonexistent' not found");
    }
}
