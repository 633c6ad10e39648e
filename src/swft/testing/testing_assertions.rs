//! Fluent assertion API for parsed programs

use crate::swft::ast::{
    Assignment, BinaryOperation, Call, Function, Node, Parameter, Program, Unit, UnitKind,
};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a program
pub fn assert_program(program: &Program) -> ProgramAssertion<'_> {
    ProgramAssertion { program }
}

fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// Program Assertions
// ============================================================================

pub struct ProgramAssertion<'a> {
    program: &'a Program,
}

impl<'a> ProgramAssertion<'a> {
    pub fn unit_count(self, expected: usize) -> Self {
        let actual = self.program.units.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} units, found {}: [{}]",
            expected,
            actual,
            self.program
                .units
                .iter()
                .map(|unit| summarize(&unit.nodes))
                .collect::<Vec<_>>()
                .join(" | ")
        );
        self
    }

    /// Assert on a specific unit by index
    pub fn unit<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(UnitAssertion<'a>),
    {
        assert!(
            index < self.program.units.len(),
            "Unit index {} out of bounds (program has {} units)",
            index,
            self.program.units.len()
        );
        assertion(UnitAssertion {
            unit: &self.program.units[index],
            context: format!("units[{index}]"),
        });
        self
    }

    /// Assert the shapes of all top-level nodes, across units
    pub fn shapes(self, expected: &[&str]) -> Self {
        assert_eq!(self.program.shape(), expected, "Program shapes differ");
        self
    }
}

// ============================================================================
// Unit Assertions
// ============================================================================

pub struct UnitAssertion<'a> {
    unit: &'a Unit,
    context: String,
}

impl<'a> UnitAssertion<'a> {
    pub fn kind(self, expected: UnitKind) -> Self {
        assert_eq!(
            self.unit.kind(),
            expected,
            "{}: unexpected unit kind for [{}]",
            self.context,
            summarize(&self.unit.nodes)
        );
        self
    }

    pub fn node_count(self, expected: usize) -> Self {
        assert_eq!(
            self.unit.nodes.len(),
            expected,
            "{}: expected {} nodes, found [{}]",
            self.context,
            expected,
            summarize(&self.unit.nodes)
        );
        self
    }

    pub fn node<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.unit.nodes.len(),
            "{}: node index {} out of bounds (unit has {} nodes)",
            self.context,
            index,
            self.unit.nodes.len()
        );
        assertion(NodeAssertion {
            node: &self.unit.nodes[index],
            context: format!("{}.nodes[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    fn unexpected(&self, expected: &str) -> ! {
        panic!(
            "{}: expected {}, found {} `{}`",
            self.context,
            expected,
            self.node.node_type(),
            self.node
        )
    }

    /// Compare against [Node::shape]
    pub fn shape(self, expected: &str) -> Self {
        assert_eq!(
            self.node.shape(),
            expected,
            "{}: unexpected shape for `{}`",
            self.context,
            self.node
        );
        self
    }

    pub fn assert_identifier(self, expected: &str) -> Self {
        match self.node {
            Node::Identifier(identifier) => assert_eq!(
                identifier.name, expected,
                "{}: identifier name",
                self.context
            ),
            _ => self.unexpected("Identifier"),
        }
        self
    }

    pub fn assert_literal(self, expected: &str) -> Self {
        match self.node {
            Node::Literal(literal) => {
                assert_eq!(literal.value, expected, "{}: literal value", self.context)
            }
            _ => self.unexpected("Literal"),
        }
        self
    }

    pub fn assert_function(self) -> FunctionAssertion<'a> {
        match self.node {
            Node::Function(function) => FunctionAssertion {
                function,
                context: self.context,
            },
            _ => self.unexpected("Function"),
        }
    }

    pub fn assert_call(self) -> CallAssertion<'a> {
        match self.node {
            Node::Call(call) => CallAssertion {
                call,
                context: self.context,
            },
            _ => self.unexpected("Call"),
        }
    }

    pub fn assert_binary_operation(self) -> BinaryOperationAssertion<'a> {
        match self.node {
            Node::BinaryOperation(operation) => BinaryOperationAssertion {
                operation,
                context: self.context,
            },
            _ => self.unexpected("BinaryOperation"),
        }
    }

    pub fn assert_static_assignment(self) -> AssignmentAssertion<'a> {
        match self.node {
            Node::StaticAssignment(assignment) => AssignmentAssertion {
                assignment,
                context: self.context,
            },
            _ => self.unexpected("StaticAssignment"),
        }
    }

    pub fn assert_dynamic_assignment(self) -> AssignmentAssertion<'a> {
        match self.node {
            Node::DynamicAssignment(assignment) => AssignmentAssertion {
                assignment,
                context: self.context,
            },
            _ => self.unexpected("DynamicAssignment"),
        }
    }
}

// ============================================================================
// Function Assertions
// ============================================================================

pub struct FunctionAssertion<'a> {
    function: &'a Function,
    context: String,
}

impl<'a> FunctionAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.function.name, expected, "{}: function name", self.context);
        self
    }

    pub fn parameter_count(self, expected: usize) -> Self {
        assert_eq!(
            self.function.parameters.len(),
            expected,
            "{}: expected {} parameters, found {:?}",
            self.context,
            expected,
            self.function.parameters
        );
        self
    }

    /// Assert on a parameter with a plain closure over the [Parameter]
    pub fn parameter<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(&'a Parameter),
    {
        assert!(
            index < self.function.parameters.len(),
            "{}: parameter index {} out of bounds",
            self.context,
            index
        );
        assertion(&self.function.parameters[index]);
        self
    }

    /// Assert `hint name: type` of a parameter in one go.
    pub fn parameter_signature(self, index: usize, hint: &str, name: &str, ty: &str) -> Self {
        let context = format!("{}.parameters[{}]", self.context, index);
        self.parameter(index, |parameter| {
            assert_eq!(
                (parameter.hint.as_str(), parameter.name.as_str(), parameter.param_type.as_str()),
                (hint, name, ty),
                "{context}: (hint, name, type)"
            );
        })
    }

    pub fn body_shapes(self, expected: &[&str]) -> Self {
        let actual: Vec<String> = self.function.body.iter().map(Node::shape).collect();
        assert_eq!(actual, expected, "{}: body shapes", self.context);
        self
    }

    pub fn body<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.function.body.len(),
            "{}: body index {} out of bounds (body has {} nodes)",
            self.context,
            index,
            self.function.body.len()
        );
        assertion(NodeAssertion {
            node: &self.function.body[index],
            context: format!("{}.body[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Call Assertions
// ============================================================================

pub struct CallAssertion<'a> {
    call: &'a Call,
    context: String,
}

impl<'a> CallAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.call.name, expected, "{}: call name", self.context);
        self
    }

    pub fn argument_count(self, expected: usize) -> Self {
        assert_eq!(
            self.call.arguments.len(),
            expected,
            "{}: expected {} arguments, found [{}]",
            self.context,
            expected,
            summarize(&self.call.arguments)
        );
        self
    }

    pub fn argument<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.call.arguments.len(),
            "{}: argument index {} out of bounds",
            self.context,
            index
        );
        assertion(NodeAssertion {
            node: &self.call.arguments[index],
            context: format!("{}.arguments[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Binary Operation Assertions
// ============================================================================

pub struct BinaryOperationAssertion<'a> {
    operation: &'a BinaryOperation,
    context: String,
}

impl<'a> BinaryOperationAssertion<'a> {
    pub fn operator(self, expected: &str) -> Self {
        assert_eq!(self.operation.operator, expected, "{}: operator", self.context);
        self
    }

    pub fn left<F>(self, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(NodeAssertion {
            node: &self.operation.left,
            context: format!("{}.left", self.context),
        });
        self
    }

    pub fn right<F>(self, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(NodeAssertion {
            node: &self.operation.right,
            context: format!("{}.right", self.context),
        });
        self
    }
}

// ============================================================================
// Assignment Assertions
// ============================================================================

pub struct AssignmentAssertion<'a> {
    assignment: &'a Assignment,
    context: String,
}

impl<'a> AssignmentAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.assignment.name, expected, "{}: assignment name", self.context);
        self
    }

    pub fn var_type(self, expected: &str) -> Self {
        assert_eq!(
            self.assignment.var_type, expected,
            "{}: assignment type",
            self.context
        );
        self
    }

    pub fn value<F>(self, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(NodeAssertion {
            node: &self.assignment.value,
            context: format!("{}.value", self.context),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::super::factories::parse_source;
    use super::*;

    #[test]
    fn test_fluent_assertions() {
        let program = parse_source("var x: Int = 1 + 2 print(x)");
        assert_program(&program).unit_count(1).unit(0, |unit| {
            unit.kind(UnitKind::Statements)
                .node_count(2)
                .node(0, |node| {
                    node.assert_dynamic_assignment()
                        .name("x")
                        .var_type("Int")
                        .value(|value| {
                            value.assert_binary_operation().operator("+");
                        });
                })
                .node(1, |node| {
                    node.assert_call().name("print").argument_count(1).argument(0, |arg| {
                        arg.assert_identifier("x");
                    });
                });
        });
    }

    #[test]
    #[should_panic(expected = "expected Call")]
    fn test_wrong_node_type_panics() {
        let program = parse_source("1");
        assert_program(&program).unit(0, |unit| {
            unit.node(0, |node| {
                node.assert_call();
            });
        });
    }
}
