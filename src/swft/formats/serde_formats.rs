//! Serde backed formats
//!
//! Both formats serialize the [Program] type as is. Nodes are internally tagged with their
//! type under the `node` key, so `a + 1` reads
//! `{"node":"BinaryOperation","left":{"node":"Identifier","name":"a"},...}`.

use super::registry::{FormatError, Formatter};
use crate::swft::ast::Program;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        serde_json::to_string_pretty(program)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty printed JSON of the program tree"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        serde_yaml::to_string(program).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML of the program tree"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swft::ast::{Call, Node, Unit};

    fn program() -> Program {
        Program::new(vec![Unit::new(vec![Node::Call(Call::new(
            "print",
            vec![Node::identifier("a")],
        ))])])
    }

    #[test]
    fn test_json_reads_back() {
        let json = JsonFormatter.serialize(&program()).unwrap();
        let back: Program = serde_json::from_str(&json).unwrap();
        assert_eq!(back, program());
        assert!(json.contains("\"node\": \"Call\""));
    }

    #[test]
    fn test_yaml_reads_back() {
        let yaml = YamlFormatter.serialize(&program()).unwrap();
        let back: Program = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, program());
        assert!(yaml.contains("node: Identifier"));
    }
}
