use std::fmt;

/// Errors raised while emitting code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A call argument uses a name no assignment or parameter declared before it
    UndeclaredName { name: String, call: String },
    /// A node that cannot stand on its own line
    UnsupportedTopLevel(&'static str),
    /// A node that cannot appear inside an expression
    UnsupportedExpression(&'static str),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::UndeclaredName { name, call } => {
                write!(f, "Variable '{name}' used in call to '{call}' is not defined")
            }
            GenerateError::UnsupportedTopLevel(node_type) => {
                write!(f, "{node_type} cannot be emitted as a statement")
            }
            GenerateError::UnsupportedExpression(node_type) => {
                write!(f, "{node_type} cannot be emitted as an expression")
            }
        }
    }
}

impl std::error::Error for GenerateError {}
