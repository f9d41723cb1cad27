//! Twig: a tiny compiler from S-expression calls to C-style calls.
//!
//! ```text
//! (add 2 (subtract 4 2))   ──>   add(2, subtract(4, 2))
//! ```
//!
//! The pipeline has four stages, each in its own crate:
//!
//! ```text
//! text ─tokenize─> tokens ─parse─> source tree ─transform─> target tree ─generate─> text
//!      (twig-syntax-sexpr)          (twig-transform)              (twig-codegen-c)
//! ```
//!
//! [`compile`] runs all of them. The first failing stage aborts compilation
//! and its error is returned unchanged inside [`CompileError`].

use thiserror::Error;
use tracing::debug;

pub use twig_codegen_c::{CodegenConfig, ConfigError, GenError, generate, generate_with};
pub use twig_ir::{NodeKind, Program, SourceNode, TargetNode, ValidationError, validate};
pub use twig_syntax_sexpr::{LexError, ParseError, Token, TokenKind, parse, tokenize};
pub use twig_transform::{TraversalError, transform};

/// Errors that can occur during compilation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("traversal error: {0}")]
    Traversal(#[from] TraversalError),

    #[error("codegen error: {0}")]
    Gen(#[from] GenError),
}

/// Compile source text with the default output formatting.
pub fn compile(source: &str) -> Result<String, CompileError> {
    compile_with(source, &CodegenConfig::default())
}

/// Compile source text with the given output formatting.
pub fn compile_with(source: &str, config: &CodegenConfig) -> Result<String, CompileError> {
    let span = tracing::debug_span!("compile", source_bytes = source.len());
    let _enter = span.enter();

    let target = target_ast(source)?;
    let code = generate_with(&target, config)?;
    debug!(output_bytes = code.len(), "compiled");
    Ok(code)
}

/// Run the lexer only.
pub fn tokens(source: &str) -> Result<Vec<Token>, CompileError> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "lexed");
    Ok(tokens)
}

/// Run the lexer and parser.
pub fn source_ast(source: &str) -> Result<Program, CompileError> {
    let tokens = tokens(source)?;
    let program = parse(&tokens)?;
    debug!(forms = program.body.len(), "parsed");
    Ok(program)
}

/// Run every stage up to the target tree.
pub fn target_ast(source: &str) -> Result<TargetNode, CompileError> {
    let program = source_ast(source)?;
    let target = transform(&program)?;

    #[cfg(debug_assertions)]
    if let Err(err) = validate(&target) {
        tracing::warn!(%err, "transform produced an invalid target tree");
    }

    Ok(target)
}
