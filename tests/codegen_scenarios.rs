//! Python generation from parsed swft sources

use std::fs;
use swft::swft::codegen::GenerateError;
use swft::swft::pipeline::{compile, CompileError};
use swft::swft::testing::factories::compile_source;

#[test]
fn test_undeclared_call_argument_fails() {
    let err = compile("print(x)").unwrap_err();
    assert_eq!(
        err,
        CompileError::Generate(GenerateError::UndeclaredName {
            name: "x".to_string(),
            call: "print".to_string(),
        })
    );
}

#[test]
fn test_declared_call_argument_succeeds() {
    assert_eq!(compile_source("let x = 1 print(x)"), "X = 1\nprint(X)");
    assert_eq!(compile_source("var x = 1 print(x)"), "x = 1\nprint(x)");
}

#[test]
fn test_undeclared_name_inside_argument_expression() {
    let err = compile("var a = 1 print(a + b * 2)").unwrap_err();
    assert!(matches!(
        err,
        CompileError::Generate(GenerateError::UndeclaredName { ref name, .. }) if name == "b"
    ));
}

#[test]
fn test_sample_with_undeclared_name() {
    let source = fs::read_to_string("samples/040-undeclared.swft").unwrap();
    let err = compile(&source).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Generate error: Variable 'y' used in call to 'print' is not defined"
    );
}

#[test]
fn test_program_sample() {
    let source = fs::read_to_string("samples/030-program.swft").unwrap();
    insta::assert_snapshot!(compile_source(&source), @r#"
    def greet(name: Str, times=1):
        print(name, times)
    LIMIT = 10
    count: Int = 1 + 2
    print(count, LIMIT)
    "#);
}

#[test]
fn test_parameters_are_declared_in_body() {
    assert_eq!(
        compile_source("func twice(n: Int) { var m = n * 2 print(m, n) }"),
        "def twice(n: Int):\n    m = n * 2\n    print(m, n)"
    );
}

#[test]
fn test_parentheses_follow_the_tree() {
    assert_eq!(compile_source("(1 + 2) * 3"), "(1 + 2) * 3");
    assert_eq!(compile_source("1 - (2 - 3)"), "1 - (2 - 3)");
    assert_eq!(compile_source("(1 - 2) - 3"), "1 - 2 - 3");
    assert_eq!(compile_source("true"), "True");
}

#[test]
fn test_long_program_compiles() {
    let source: String = (0..3000).map(|n| format!("var v{n} = {n}\n")).collect();
    let code = compile(&source).unwrap();
    assert_eq!(code.lines().count(), 3000);
    assert_eq!(code.lines().next(), Some("v0 = 0"));
    assert_eq!(code.lines().last(), Some("v2999 = 2999"));
}
