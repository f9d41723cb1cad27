//! S-expression frontend for Twig.
//!
//! Turns source text like `(add 2 (subtract 4 2))` into the source tree
//! defined in `twig_ir`:
//!
//! - [`tokenize`] splits text into [`Token`]s
//! - [`parse`] builds a [`Program`](twig_ir::Program) from tokens
//! - [`read`] does both

mod lexer;
mod parser;

pub use lexer::{LexError, Token, TokenKind, tokenize};
pub use parser::{ParseError, parse};

use thiserror::Error;
use twig_ir::Program;

/// Either frontend stage failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Tokenize and parse source text.
pub fn read(source: &str) -> Result<Program, SyntaxError> {
    let tokens = tokenize(source)?;
    Ok(parse(&tokens)?)
}
