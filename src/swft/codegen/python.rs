//! Python emitter
//!
//!     swft                                    python
//!     func add(a: Int, to b = 1) { ... }      def add(a: Int, b=1):
//!     var x: Int = 1                          x: Int = 1
//!     let limit = 10                          LIMIT = 10
//!     print(x, limit)                         print(x, LIMIT)
//!     true / false                            True / False
//!
//!     Children are rendered before their parent. Assignments and parameters declare their
//!     names as they are emitted, and every identifier inside a call's arguments must have
//!     been declared by then. Argument labels (hints) have no python counterpart and are
//!     dropped.
//!
//!     Binary operations are parenthesized only where the tree differs from what python's
//!     precedence and left associativity would read back.

use super::error::GenerateError;
use super::scope::Scope;
use crate::swft::ast::traits::{walk_call, Visitor};
use crate::swft::ast::{
    Assignment, BinaryOperation, Call, Function, Identifier, Literal, Node, Parameter, Program,
    Unit,
};

pub const DEFAULT_INDENT_WIDTH: usize = 4;

#[derive(Debug, Clone)]
pub struct PythonGenerator {
    indent_width: usize,
    check_declarations: bool,
    scope: Scope,
}

impl Default for PythonGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PythonGenerator {
    pub fn new() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            check_declarations: true,
            scope: Scope::new(),
        }
    }

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Turn the undeclared name check for call arguments on or off.
    pub fn with_declaration_check(mut self, enabled: bool) -> Self {
        self.check_declarations = enabled;
        self
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Emit a whole program, one rendered unit after another.
    pub fn generate(&mut self, program: &Program) -> Result<String, GenerateError> {
        let units = program
            .units
            .iter()
            .map(|unit| self.generate_unit(unit))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(units.join("\n"))
    }

    pub fn generate_unit(&mut self, unit: &Unit) -> Result<String, GenerateError> {
        let lines = unit
            .nodes
            .iter()
            .map(|node| self.statement(node, 0))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }

    /// Render a node on its own line(s) at the given indent level.
    pub fn statement(&mut self, node: &Node, level: usize) -> Result<String, GenerateError> {
        let indent = " ".repeat(self.indent_width * level);
        match node {
            Node::Function(function) => self.function(function, level),
            Node::StaticAssignment(assignment) => {
                let value = self.expression(&assignment.value)?;
                let name = self.scope.declare_static(&assignment.name);
                Ok(format!("{indent}{}", assignment_line(&name, assignment, &value)))
            }
            Node::DynamicAssignment(assignment) => {
                let value = self.expression(&assignment.value)?;
                self.scope.declare_dynamic(&assignment.name);
                Ok(format!(
                    "{indent}{}",
                    assignment_line(&assignment.name, assignment, &value)
                ))
            }
            Node::Parameter(_) => Err(GenerateError::UnsupportedTopLevel(node.node_type())),
            Node::Call(_) | Node::BinaryOperation(_) | Node::Identifier(_) | Node::Literal(_) => {
                Ok(format!("{indent}{}", self.expression(node)?))
            }
        }
    }

    fn function(&mut self, function: &Function, level: usize) -> Result<String, GenerateError> {
        let indent = " ".repeat(self.indent_width * level);
        let parameters = function
            .parameters
            .iter()
            .map(|parameter| self.parameter(parameter))
            .collect::<Result<Vec<_>, _>>()?;

        let mut lines = vec![format!(
            "{indent}def {}({}):",
            function.name,
            parameters.join(", ")
        )];
        for node in &function.body {
            lines.push(self.statement(node, level + 1)?);
        }
        if function.body.is_empty() {
            lines.push(format!("{indent}{}pass", " ".repeat(self.indent_width)));
        }
        Ok(lines.join("\n"))
    }

    fn parameter(&mut self, parameter: &Parameter) -> Result<String, GenerateError> {
        let default = match &parameter.default {
            Some(default) => Some(self.expression(default)?),
            None => None,
        };
        self.scope.declare_dynamic(&parameter.name);

        let mut rendered = parameter.name.clone();
        if parameter.is_typed() {
            rendered.push_str(&format!(": {}", parameter.param_type));
        }
        match default {
            Some(default) if parameter.is_typed() => rendered.push_str(&format!(" = {default}")),
            Some(default) => rendered.push_str(&format!("={default}")),
            None => {}
        }
        Ok(rendered)
    }

    /// Render an expression.
    pub fn expression(&self, node: &Node) -> Result<String, GenerateError> {
        match node {
            Node::Identifier(identifier) => Ok(self.scope.resolve(&identifier.name)),
            Node::Literal(literal) => Ok(python_literal(literal)),
            Node::BinaryOperation(operation) => self.binary_operation(operation),
            Node::Call(call) => self.call(call),
            Node::Function(_)
            | Node::Parameter(_)
            | Node::StaticAssignment(_)
            | Node::DynamicAssignment(_) => Err(GenerateError::UnsupportedExpression(
                node.node_type(),
            )),
        }
    }

    fn binary_operation(&self, operation: &BinaryOperation) -> Result<String, GenerateError> {
        let precedence = operation.precedence();
        let mut left = self.expression(&operation.left)?;
        let mut right = self.expression(&operation.right)?;

        if matches!(&*operation.left, Node::BinaryOperation(inner) if inner.precedence() < precedence)
        {
            left = format!("({left})");
        }
        if matches!(&*operation.right, Node::BinaryOperation(inner) if inner.precedence() <= precedence)
        {
            right = format!("({right})");
        }
        Ok(format!("{left} {} {right}", operation.operator))
    }

    fn call(&self, call: &Call) -> Result<String, GenerateError> {
        if self.check_declarations {
            self.check_arguments(call)?;
        }
        let arguments = call
            .arguments
            .iter()
            .map(|argument| self.expression(argument))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("{}({})", call.name, arguments.join(", ")))
    }

    fn check_arguments(&self, call: &Call) -> Result<(), GenerateError> {
        let mut names = IdentifierCollector::default();
        walk_call(&mut names, call);

        match names.0.into_iter().find(|name| !self.scope.is_declared(name)) {
            Some(name) => Err(GenerateError::UndeclaredName {
                name,
                call: call.name.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn assignment_line(name: &str, assignment: &Assignment, value: &str) -> String {
    if assignment.is_typed() {
        format!("{name}: {} = {value}", assignment.var_type)
    } else {
        format!("{name} = {value}")
    }
}

fn python_literal(literal: &Literal) -> String {
    match literal.value.as_str() {
        "true" => "True".to_string(),
        "false" => "False".to_string(),
        value => value.to_string(),
    }
}

/// Every identifier below a node, in visiting order
#[derive(Default)]
struct IdentifierCollector(Vec<String>);

impl Visitor for IdentifierCollector {
    fn visit_identifier(&mut self, identifier: &Identifier) {
        self.0.push(identifier.name.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swft::testing::factories::{binary, call, function, ident, lit, param};

    fn render(node: &Node) -> String {
        PythonGenerator::new().expression(node).unwrap()
    }

    #[test]
    fn test_precedence_parentheses() {
        // (1 + 2) * 3
        let node = binary(binary(lit("1"), "+", lit("2")), "*", lit("3"));
        assert_eq!(render(&node), "(1 + 2) * 3");

        // 1 + 2 * 3
        let node = binary(lit("1"), "+", binary(lit("2"), "*", lit("3")));
        assert_eq!(render(&node), "1 + 2 * 3");
    }

    #[test]
    fn test_associativity_parentheses() {
        // (a - b) - c needs none, a - (b - c) keeps them
        let left = binary(binary(ident("a"), "-", ident("b")), "-", ident("c"));
        assert_eq!(render(&left), "a - b - c");
        let right = binary(ident("a"), "-", binary(ident("b"), "-", ident("c")));
        assert_eq!(render(&right), "a - (b - c)");
    }

    #[test]
    fn test_booleans() {
        assert_eq!(render(&lit("true")), "True");
        assert_eq!(render(&lit("false")), "False");
        assert_eq!(render(&lit("\"true\"")), "\"true\"");
    }

    #[test]
    fn test_static_assignment_is_upper_cased() {
        let mut generator = PythonGenerator::new();
        let node = Node::StaticAssignment(Assignment::new("limit", "Int", lit("10")));
        assert_eq!(generator.statement(&node, 0).unwrap(), "LIMIT: Int = 10");
        assert!(generator.scope().is_declared("limit"));
        assert_eq!(generator.expression(&ident("limit")).unwrap(), "LIMIT");
    }

    #[test]
    fn test_undeclared_call_argument() {
        let mut generator = PythonGenerator::new();
        let call = call("print", vec![binary(ident("x"), "+", lit("1"))]);
        assert_eq!(
            generator.statement(&call, 0).unwrap_err(),
            GenerateError::UndeclaredName {
                name: "x".to_string(),
                call: "print".to_string(),
            }
        );

        let unchecked = PythonGenerator::new().with_declaration_check(false);
        assert_eq!(unchecked.expression(&call).unwrap(), "print(x + 1)");
    }

    #[test]
    fn test_function_with_defaults() {
        let function = function(
            "greet",
            vec![
                param("name").with_type("Str"),
                param("times").with_hint("repeat").with_default(lit("1")),
            ],
            vec![call("print", vec![ident("name"), ident("times")])],
        );
        let code = PythonGenerator::new().statement(&function, 0).unwrap();
        insta::assert_snapshot!(code, @r"
        def greet(name: Str, times=1):
            print(name, times)
        ");
    }

    #[test]
    fn test_empty_function_body() {
        let function = function("noop", vec![], vec![]);
        let code = PythonGenerator::new()
            .with_indent_width(2)
            .statement(&function, 0)
            .unwrap();
        assert_eq!(code, "def noop():\n  pass");
    }

    #[test]
    fn test_parameter_is_not_a_statement() {
        let node = Node::Parameter(param("a"));
        assert_eq!(
            PythonGenerator::new().statement(&node, 0).unwrap_err(),
            GenerateError::UnsupportedTopLevel("Parameter")
        );
    }
}
