//! End-to-end tests for the S-expression → call-expression pipeline.

use tracing_subscriber::EnvFilter;
use twig::{
    CodegenConfig, CompileError, LexError, NodeKind, ParseError, TargetNode, TokenKind, compile,
    compile_with, source_ast, target_ast, tokens,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn assert_compiles(source: &str, expected: &str) {
    init_tracing();
    let output = compile(source).expect("compile failed");
    assert_eq!(output, expected, "source: {}", source);
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_add() {
    assert_compiles("(add 2 2)", "add(2, 2)");
}

#[test]
fn test_subtract() {
    assert_compiles("(subtract 4 2)", "subtract(4, 2)");
}

#[test]
fn test_nested_call() {
    assert_compiles("(add 2 (subtract 4 2))", "add(2, subtract(4, 2))");
}

#[test]
fn test_string_arguments() {
    assert_compiles("(concat \"a\" \"b\")", "concat(\"a\", \"b\")");
}

#[test]
fn test_zero_argument_call() {
    assert_compiles("(foo)", "foo()");
}

#[test]
fn test_multiple_statements() {
    assert_compiles("(foo) (bar 1)\n(baz (qux))", "foo()\nbar(1)\nbaz(qux())");
}

#[test]
fn test_deeply_nested_calls() {
    assert_compiles("(a (b (c (d 1))))", "a(b(c(d(1))))");
}

#[test]
fn test_top_level_literals() {
    assert_compiles("1 \"two\"", "1\n\"two\"");
}

#[test]
fn test_empty_source() {
    assert_compiles("", "");
    assert_compiles("  \n\t ", "");
}

#[test]
fn test_strings_keep_inner_text() {
    assert_compiles("(print \"hello, world (1)\")", "print(\"hello, world (1)\")");
}

#[test]
fn test_permissive_call_name() {
    assert_compiles("(42 1)", "42(1)");
}

#[test]
fn test_statement_terminator_config() {
    let config = CodegenConfig::from_toml_str("statement_terminator = \";\"").unwrap();
    let output = compile_with("(add 2 (subtract 4 2)) (foo)", &config).unwrap();
    assert_eq!(output, "add(2, subtract(4, 2));\nfoo();");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_unrecognized_character() {
    assert_eq!(
        compile("(add 2 #)"),
        Err(CompileError::Lex(LexError::UnexpectedCharacter {
            offset: 7,
            character: '#'
        }))
    );
}

#[test]
fn test_unterminated_string() {
    assert!(matches!(
        compile("(concat \"a"),
        Err(CompileError::Lex(LexError::UnterminatedString { offset: 8 }))
    ));
}

#[test]
fn test_unterminated_call() {
    assert_eq!(
        compile("(add 2 (subtract 4 2)"),
        Err(CompileError::Parse(ParseError::UnexpectedEnd))
    );
}

#[test]
fn test_stray_close_paren() {
    assert_eq!(
        compile("(foo))"),
        Err(CompileError::Parse(ParseError::UnexpectedToken {
            kind: TokenKind::Paren
        }))
    );
}

#[test]
fn test_bare_name() {
    assert_eq!(
        compile("add"),
        Err(CompileError::Parse(ParseError::UnexpectedToken {
            kind: TokenKind::Name
        }))
    );
}

#[test]
fn test_error_messages() {
    let err = compile("(add 2 #)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "lex error: unexpected character '#' at offset 7"
    );

    let err = compile("(add").unwrap_err();
    assert_eq!(err.to_string(), "parse error: unexpected end of input");
}

// =============================================================================
// Stages
// =============================================================================

#[test]
fn test_stage_tokens() {
    let toks = tokens("(add 2)").unwrap();
    let kinds: Vec<_> = toks.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Paren,
            TokenKind::Name,
            TokenKind::Number,
            TokenKind::Paren
        ]
    );
}

#[test]
fn test_stage_trees() {
    let source = source_ast("(add 2 (subtract 4 2))").unwrap();
    let target = target_ast("(add 2 (subtract 4 2))").unwrap();

    assert_eq!(source.body.len(), 1);
    let TargetNode::Program { body } = &target else {
        panic!("expected program, got {}", target.kind());
    };
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].kind(), NodeKind::ExpressionStatement);
    assert_eq!(source.calls_by_depth(), target.calls_by_depth());
}

#[test]
fn test_target_ast_json_dump() {
    let target = target_ast("(add 2 \"x\")").unwrap();
    let json = serde_json::to_value(&target).unwrap();
    assert_eq!(
        json["body"][0]["expression"]["callee"],
        serde_json::json!({"type": "Identifier", "name": "add"})
    );
    assert_eq!(
        json["body"][0]["expression"]["arguments"][1],
        serde_json::json!({"type": "StringLiteral", "text": "x"})
    );
}
