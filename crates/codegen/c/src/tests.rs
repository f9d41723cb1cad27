//! Tests for twig-codegen-c.

use crate::{CodegenConfig, GenError, generate, generate_with};
use twig_ir::{NodeKind, TargetNode};

fn program(statements: Vec<TargetNode>) -> TargetNode {
    TargetNode::program(statements.into_iter().map(TargetNode::statement).collect())
}

#[test]
fn test_generate_literals() {
    assert_eq!(generate(&TargetNode::number("42")).unwrap(), "42");
    assert_eq!(generate(&TargetNode::string("hello")).unwrap(), "\"hello\"");
    assert_eq!(generate(&TargetNode::string("")).unwrap(), "\"\"");
    assert_eq!(generate(&TargetNode::identifier("add")).unwrap(), "add");
}

#[test]
fn test_generate_call() {
    let code = generate(&program(vec![TargetNode::call(
        "add",
        vec![TargetNode::number("2"), TargetNode::number("2")],
    )]))
    .unwrap();
    assert_eq!(code, "add(2, 2)");
}

#[test]
fn test_generate_nested_call() {
    let code = generate(&program(vec![TargetNode::call(
        "add",
        vec![
            TargetNode::number("2"),
            TargetNode::call(
                "subtract",
                vec![TargetNode::number("4"), TargetNode::number("2")],
            ),
        ],
    )]))
    .unwrap();
    assert_eq!(code, "add(2, subtract(4, 2))");
}

#[test]
fn test_generate_zero_argument_call() {
    let code = generate(&program(vec![TargetNode::call("foo", vec![])])).unwrap();
    assert_eq!(code, "foo()");
}

#[test]
fn test_generate_statements_on_separate_lines() {
    let code = generate(&program(vec![
        TargetNode::call("foo", vec![]),
        TargetNode::call("bar", vec![TargetNode::string("x")]),
    ]))
    .unwrap();
    assert_eq!(code, "foo()\nbar(\"x\")");
}

#[test]
fn test_generate_empty_program() {
    assert_eq!(generate(&TargetNode::program(vec![])).unwrap(), "");
}

#[test]
fn test_generate_string_quotes_not_escaped() {
    assert_eq!(generate(&TargetNode::string("a\\")).unwrap(), "\"a\\\"");
}

#[test]
fn test_generate_nested_program() {
    let code = generate(&TargetNode::program(vec![TargetNode::program(vec![])]));
    assert_eq!(
        code,
        Err(GenError::UnexpectedKind {
            kind: NodeKind::Program
        })
    );
}

#[test]
fn test_generate_invalid_callee() {
    let call = TargetNode::CallExpression {
        callee: Box::new(TargetNode::string("f")),
        arguments: vec![],
    };
    assert_eq!(
        generate(&call),
        Err(GenError::InvalidCallee {
            kind: NodeKind::StringLiteral
        })
    );
}

#[test]
fn test_generate_with_config() {
    let config = CodegenConfig {
        statement_separator: "\n\n".into(),
        argument_separator: ",".into(),
        statement_terminator: ";".into(),
    };
    let code = generate_with(
        &program(vec![
            TargetNode::call("add", vec![TargetNode::number("1"), TargetNode::number("2")]),
            TargetNode::call("foo", vec![]),
        ]),
        &config,
    )
    .unwrap();
    assert_eq!(code, "add(1,2);\n\nfoo();");
}

#[test]
fn test_terminator_only_applies_to_statements() {
    let config = CodegenConfig {
        statement_terminator: ";".into(),
        ..CodegenConfig::default()
    };
    let code = generate_with(
        &program(vec![TargetNode::call(
            "f",
            vec![TargetNode::call("g", vec![])],
        )]),
        &config,
    )
    .unwrap();
    assert_eq!(code, "f(g());");
}

#[test]
fn test_config_from_toml() {
    let config = CodegenConfig::from_toml_str("statement_terminator = \";\"").unwrap();
    assert_eq!(config.statement_terminator, ";");
    assert_eq!(config.statement_separator, "\n");
    assert_eq!(config.argument_separator, ", ");

    assert_eq!(
        CodegenConfig::from_toml_str("").unwrap(),
        CodegenConfig::default()
    );
    assert!(CodegenConfig::from_toml_str("argument_separator = 3").is_err());
}
