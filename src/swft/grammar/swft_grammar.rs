//! The swft grammar
//!
//!     SOF                     function_declaration | statements | exprs
//!     function_declaration    func function_name parameter_clause function_body
//!     parameter_clause        ( parameter_list ) | ( )
//!     function_body           { statements } | { }
//!     parameter_list          parameter , parameter_list | parameter
//!     parameter               [hint] name [: type] [= default_value]
//!     assignment              (var | let) identifier [: type] = expr
//!                             identifier [: type] = expr
//!     call                    identifier ( exprs ) | identifier ( )
//!     statements              statements statement | statement
//!     statement               function_declaration | assignment | call
//!     exprs                   expr , exprs | expr exprs | expr
//!     expr                    expr + term | expr - term | term
//!     term                    term * factor | term / factor | factor
//!     factor                  ( expr ) | identifier | literal
//!
//!     `statements`, `expr` and `term` are left recursive and get rewritten when the grammar
//!     is built.
//!
//!     The bare assignment forms are the assignment syntax of generated python, so generated
//!     code parses back into the same tree. An all uppercase name there makes a static
//!     assignment, matching how static names are emitted.

use super::error::GrammarError;
use super::reducer::{Args, ReduceError};
use super::registry::{Grammar, GrammarBuilder};
use super::value::Value;
use crate::swft::ast::{Assignment, Call, Function, Literal, Node, Parameter};

pub const START_RULE: &str = "SOF";

type ReduceResult = Result<Value, ReduceError>;

/// Declarations of the swft grammar, not yet built.
pub fn swft_grammar_builder() -> GrammarBuilder {
    let mut builder = GrammarBuilder::new(START_RULE);
    declare_units(&mut builder);
    declare_functions(&mut builder);
    declare_parameters(&mut builder);
    declare_statements(&mut builder);
    declare_expressions(&mut builder);
    builder
}

/// The built swft grammar, with left recursion rewritten.
pub fn swft_grammar() -> Result<Grammar, GrammarError> {
    swft_grammar_builder().build()
}

fn forward(args: &mut Args) -> ReduceResult {
    args.take("value")
}

fn empty_list(_: &mut Args) -> ReduceResult {
    Ok(Value::List(vec![]))
}

fn single(args: &mut Args) -> ReduceResult {
    Ok(Value::List(vec![args.take("item")?]))
}

fn prepend(args: &mut Args) -> ReduceResult {
    let mut rest = args.list("rest")?;
    rest.insert(0, args.take("item")?);
    Ok(Value::List(rest))
}

fn declare_units(builder: &mut GrammarBuilder) {
    builder
        .declare("SOF : function_declaration", &["value"], forward)
        .declare("SOF : statements", &["value"], forward)
        .declare("SOF : exprs", &["value"], forward);
}

fn declare_functions(builder: &mut GrammarBuilder) {
    builder
        .declare(
            "function_declaration : func function_name parameter_clause function_body",
            &["name", "parameters", "body"],
            |args| {
                Ok(Value::Node(Node::Function(Function::new(
                    args.text("name")?,
                    args.parameters("parameters")?,
                    args.nodes("body")?,
                ))))
            },
        )
        .declare("function_name : identifier", &["value"], forward)
        .declare("parameter_clause : ( parameter_list )", &["value"], forward)
        .declare("parameter_clause : ( )", &[], empty_list)
        .declare("function_body : { statements }", &["value"], forward)
        .declare("function_body : { }", &[], empty_list);
}

fn parameter(args: &mut Args, hint: bool, typed: bool, default: bool) -> ReduceResult {
    let hint = if hint { Some(args.text("hint")?) } else { None };
    let mut parameter = Parameter::new(args.text("name")?);
    if let Some(hint) = hint {
        parameter = parameter.with_hint(hint);
    }
    if typed {
        parameter = parameter.with_type(args.text("type")?);
    }
    if default {
        parameter = parameter.with_default(args.node("default")?);
    }
    Ok(Value::from(parameter))
}

fn declare_parameters(builder: &mut GrammarBuilder) {
    // Most specific first: the first matching form wins.
    builder
        .declare("parameter_list : parameter , parameter_list", &["item", "rest"], prepend)
        .declare("parameter_list : parameter", &["item"], single)
        .declare(
            "parameter : hint name : type = default_value",
            &["hint", "name", "type", "default"],
            |args| parameter(args, true, true, true),
        )
        .declare(
            "parameter : name : type = default_value",
            &["name", "type", "default"],
            |args| parameter(args, false, true, true),
        )
        .declare(
            "parameter : hint name = default_value",
            &["hint", "name", "default"],
            |args| parameter(args, true, false, true),
        )
        .declare(
            "parameter : hint name : type",
            &["hint", "name", "type"],
            |args| parameter(args, true, true, false),
        )
        .declare(
            "parameter : name = default_value",
            &["name", "default"],
            |args| parameter(args, false, false, true),
        )
        .declare("parameter : name : type", &["name", "type"], |args| {
            parameter(args, false, true, false)
        })
        .declare("parameter : hint name", &["hint", "name"], |args| {
            parameter(args, true, false, false)
        })
        .declare("parameter : name", &["name"], |args| {
            parameter(args, false, false, false)
        })
        .declare("hint : identifier", &["value"], forward)
        .declare("name : identifier", &["value"], forward)
        .declare("type : identifier", &["value"], forward)
        .declare("default_value : literal", &["value"], forward);
}

/// Names written in upper case are static.
pub fn is_static_name(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_alphabetic()) && !name.chars().any(|c| c.is_ascii_lowercase())
}

fn dynamic(args: &mut Args, typed: bool) -> ReduceResult {
    Ok(Value::Node(Node::DynamicAssignment(assignment(args, typed)?)))
}

fn fixed(args: &mut Args, typed: bool) -> ReduceResult {
    Ok(Value::Node(Node::StaticAssignment(assignment(args, typed)?)))
}

fn bare(args: &mut Args, typed: bool) -> ReduceResult {
    let assignment = assignment(args, typed)?;
    if is_static_name(&assignment.name) {
        Ok(Value::Node(Node::StaticAssignment(assignment)))
    } else {
        Ok(Value::Node(Node::DynamicAssignment(assignment)))
    }
}

fn assignment(args: &mut Args, typed: bool) -> Result<Assignment, ReduceError> {
    let name = args.text("name")?;
    if typed {
        let var_type = args.text("type")?;
        Ok(Assignment::new(name, var_type, args.node("value")?))
    } else {
        Ok(Assignment::untyped(name, args.node("value")?))
    }
}

fn declare_statements(builder: &mut GrammarBuilder) {
    builder
        .declare("assignment : var identifier = expr", &["name", "value"], |args| {
            dynamic(args, false)
        })
        .declare(
            "assignment : var identifier : type = expr",
            &["name", "type", "value"],
            |args| dynamic(args, true),
        )
        .declare("assignment : let identifier = expr", &["name", "value"], |args| {
            fixed(args, false)
        })
        .declare(
            "assignment : let identifier : type = expr",
            &["name", "type", "value"],
            |args| fixed(args, true),
        )
        .declare("assignment : identifier = expr", &["name", "value"], |args| {
            bare(args, false)
        })
        .declare(
            "assignment : identifier : type = expr",
            &["name", "type", "value"],
            |args| bare(args, true),
        )
        .declare("call : identifier ( exprs )", &["name", "arguments"], |args| {
            Ok(Value::Node(Node::Call(Call::new(
                args.text("name")?,
                args.nodes("arguments")?,
            ))))
        })
        .declare("call : identifier ( )", &["name"], |args| {
            Ok(Value::Node(Node::Call(Call::new(args.text("name")?, vec![]))))
        })
        .declare(
            "statements : statements statement",
            &["statements", "statement"],
            |args| {
                let mut statements = args.list("statements")?;
                statements.push(args.take("statement")?);
                Ok(Value::List(statements))
            },
        )
        .declare("statements : statement", &["item"], single)
        .declare("statement : function_declaration", &["value"], forward)
        .declare("statement : assignment", &["value"], forward)
        .declare("statement : call", &["value"], forward);
}

fn binary(args: &mut Args) -> ReduceResult {
    Ok(Value::Node(Node::binary(
        args.node("left")?,
        args.text("operator")?,
        args.node("right")?,
    )))
}

fn declare_expressions(builder: &mut GrammarBuilder) {
    let operands = &["left", "operator", "right"];
    builder
        .declare("exprs : expr , exprs", &["item", "rest"], prepend)
        .declare("exprs : expr exprs", &["item", "rest"], prepend)
        .declare("exprs : expr", &["item"], single)
        .declare("expr : expr + term", operands, binary)
        .declare("expr : expr - term", operands, binary)
        .declare("expr : term", &["value"], forward)
        .declare("term : term * factor", operands, binary)
        .declare("term : term / factor", operands, binary)
        .declare("term : factor", &["value"], forward)
        .declare("factor : ( expr )", &["value"], forward)
        .declare("factor : identifier", &["value"], forward)
        .declare("factor : literal", &["value"], forward)
        .declare("identifier : _", &["value"], |args| {
            Ok(Value::Node(Node::identifier(args.text("value")?)))
        })
        .declare("literal : _", &["value"], |args| {
            Ok(Value::Node(Node::Literal(Literal::from_token_text(
                &args.text("value")?,
            ))))
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds() {
        let grammar = swft_grammar().unwrap();
        assert_eq!(grammar.start_rule(), "SOF");
        for rule in ["expr_autoedit", "expr'", "term'", "statements'"] {
            assert!(grammar.is_known_rule(rule), "missing {rule}");
        }
    }

    #[test]
    fn test_rewritten_rule_tries_continuation_first() {
        let grammar = swft_grammar().unwrap();
        let rhs: Vec<String> = grammar
            .alternatives_for("expr")
            .iter()
            .map(|a| a.rhs())
            .collect();
        assert_eq!(rhs, vec!["autoedit", "term"]);
    }

    #[test]
    fn test_static_names() {
        assert!(is_static_name("MAX"));
        assert!(is_static_name("MAX_2"));
        assert!(!is_static_name("Max"));
        assert!(!is_static_name("_1"));
    }
}
