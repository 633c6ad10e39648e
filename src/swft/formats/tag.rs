//! XML-like tag serialization
//!
//! Serializes a program to an XML-like format that mirrors the tree directly:
//!
//! - Node type → tag name (kebab case)
//! - Name, operator or literal value → text content
//! - Children → nested tags (no wrapper)
//! - Declared types and argument labels → attributes
//!
//! ## Example
//!
//! ```text
//! <program>
//!   <unit kind="function">
//!     <function>add
//!       <parameter type="Int">a</parameter>
//!       <dynamic-assignment type="Any">result
//!         <identifier>a</identifier>
//!       </dynamic-assignment>
//!     </function>
//!   </unit>
//! </program>
//! ```

use super::registry::{FormatError, Formatter};
use crate::swft::ast::traits::{visit_children, walk_binary_operation, walk_call, Visitor};
use crate::swft::ast::{
    Assignment, BinaryOperation, Call, Function, Identifier, Literal, Parameter, Program, Unit,
    UnitKind,
};

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
    }

    fn open_tag(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        let mut rendered = format!("<{tag}");
        for (key, value) in attributes {
            rendered.push_str(&format!(" {key}=\"{}\"", escape_xml(value)));
        }
        rendered.push('>');
        self.push_indent(&rendered);
    }

    fn close_tag_inline(&mut self, tag: &str) {
        self.output.push_str(&format!("</{tag}>\n"));
    }

    /// A tag with a text label and nested children rendered by `children`.
    fn element(
        &mut self,
        tag: &str,
        attributes: &[(&str, &str)],
        label: &str,
        has_children: bool,
        children: impl FnOnce(&mut Self),
    ) {
        self.open_tag(tag, attributes);
        self.output.push_str(&escape_xml(label));

        if has_children {
            self.output.push('\n');
            self.indent_level += 1;
            children(self);
            self.indent_level -= 1;
            self.push_indent("");
        }

        self.close_tag_inline(tag);
    }

    fn visit_program(&mut self, program: &Program) {
        self.element("program", &[], "", !program.is_empty(), |s| {
            for unit in &program.units {
                s.visit_unit(unit);
            }
        });
    }

    fn visit_unit(&mut self, unit: &Unit) {
        let kind = match unit.kind() {
            UnitKind::Function => "function",
            UnitKind::Statements => "statements",
            UnitKind::Expressions => "expressions",
        };
        self.element("unit", &[("kind", kind)], "", !unit.nodes.is_empty(), |s| {
            visit_children(s, &unit.nodes)
        });
    }

    fn assignment(&mut self, tag: &str, assignment: &Assignment) {
        self.element(
            tag,
            &[("type", assignment.var_type.as_str())],
            &assignment.name,
            true,
            |s| assignment.value.accept(s),
        );
    }
}

impl Visitor for TagSerializer {
    fn visit_function(&mut self, function: &Function) {
        let has_children = !function.parameters.is_empty() || !function.body.is_empty();
        self.element("function", &[], &function.name, has_children, |s| {
            for parameter in &function.parameters {
                s.visit_parameter(parameter);
            }
            visit_children(s, &function.body);
        });
    }

    fn visit_parameter(&mut self, parameter: &Parameter) {
        let mut attributes = vec![("type", parameter.param_type.as_str())];
        if parameter.hint != parameter.name {
            attributes.push(("hint", parameter.hint.as_str()));
        }
        self.element(
            "parameter",
            &attributes,
            &parameter.name,
            parameter.default.is_some(),
            |s| {
                if let Some(default) = &parameter.default {
                    default.accept(s);
                }
            },
        );
    }

    fn visit_static_assignment(&mut self, assignment: &Assignment) {
        self.assignment("static-assignment", assignment);
    }

    fn visit_dynamic_assignment(&mut self, assignment: &Assignment) {
        self.assignment("dynamic-assignment", assignment);
    }

    fn visit_call(&mut self, call: &Call) {
        self.element("call", &[], &call.name, !call.arguments.is_empty(), |s| {
            walk_call(s, call)
        });
    }

    fn visit_binary_operation(&mut self, operation: &BinaryOperation) {
        self.element("binary-operation", &[], &operation.operator, true, |s| {
            walk_binary_operation(s, operation)
        });
    }

    fn visit_identifier(&mut self, identifier: &Identifier) {
        self.element("identifier", &[], &identifier.name, false, |_| {});
    }

    fn visit_literal(&mut self, literal: &Literal) {
        self.element("literal", &[], &literal.value, false, |_| {});
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Serialize a program to the tag format
pub fn to_tag_str(program: &Program) -> String {
    let mut serializer = TagSerializer::new();
    serializer.visit_program(program);
    serializer.output
}

/// Formatter implementation for tag format
pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        Ok(to_tag_str(program))
    }

    fn description(&self) -> &str {
        "XML-like tag format mirroring the tree structure"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swft::ast::Node;

    #[test]
    fn test_function_tags() {
        let program = Program::new(vec![Unit::new(vec![Node::Function(Function::new(
            "add",
            vec![Parameter::new("a").with_type("Int")],
            vec![Node::DynamicAssignment(Assignment::untyped(
                "result",
                Node::identifier("a"),
            ))],
        ))])]);

        let expected = concat!(
            "<program>\n",
            "  <unit kind=\"function\">\n",
            "    <function>add\n",
            "      <parameter type=\"Int\">a</parameter>\n",
            "      <dynamic-assignment type=\"Any\">result\n",
            "        <identifier>a</identifier>\n",
            "      </dynamic-assignment>\n",
            "    </function>\n",
            "  </unit>\n",
            "</program>\n",
        );
        assert_eq!(to_tag_str(&program), expected);
    }

    #[test]
    fn test_hint_and_default_attributes() {
        let program = Program::new(vec![Unit::new(vec![Node::Function(Function::new(
            "greet",
            vec![Parameter::new("name")
                .with_hint("to")
                .with_default(Node::literal("\"x\""))],
            vec![],
        ))])]);

        let output = to_tag_str(&program);
        assert!(output.contains("<parameter type=\"Any\" hint=\"to\">name\n"));
        assert!(output.contains("<literal>&quot;x&quot;</literal>"));
    }

    #[test]
    fn test_operators_are_escaped() {
        let program = Program::new(vec![Unit::new(vec![Node::binary(
            Node::identifier("a"),
            "==",
            Node::identifier("b"),
        )])]);
        assert!(to_tag_str(&program).contains("<binary-operation>==\n"));
        assert_eq!(escape_xml("a<b & c>d"), "a&lt;b &amp; c&gt;d");
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(to_tag_str(&Program::default()), "<program></program>\n");
    }
}
