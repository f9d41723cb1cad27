//! Recursive-descent parser from tokens to the source tree.

use thiserror::Error;
use twig_ir::{Program, SourceNode};

use crate::lexer::{Token, TokenKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected {kind} token")]
    UnexpectedToken { kind: TokenKind },

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("call name must not be empty")]
    EmptyCallName,
}

/// Parse a token sequence into a [`Program`].
///
/// The token after `(` names the call whatever its kind, so `(1 2)` is a
/// call named `1` and `() )` is a call named `)`. Only an empty name is
/// rejected.
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    let mut parser = Parser { tokens, current: 0 };
    let mut body = Vec::new();

    while parser.current < tokens.len() {
        body.push(parser.walk()?);
    }

    tracing::trace!(forms = body.len(), "parsed");
    Ok(Program::new(body))
}

struct Parser<'t> {
    tokens: &'t [Token],
    current: usize,
}

impl<'t> Parser<'t> {
    fn peek(&self) -> Result<&'t Token, ParseError> {
        self.tokens.get(self.current).ok_or(ParseError::UnexpectedEnd)
    }

    fn advance(&mut self) -> Result<&'t Token, ParseError> {
        let token = self.peek()?;
        self.current += 1;
        Ok(token)
    }

    fn walk(&mut self) -> Result<SourceNode, ParseError> {
        let token = self.advance()?;

        match token.kind {
            TokenKind::Number => Ok(SourceNode::number(token.text.as_str())),
            TokenKind::String => Ok(SourceNode::string(token.text.as_str())),
            TokenKind::Paren if token.is_open() => self.walk_call(),
            kind => Err(ParseError::UnexpectedToken { kind }),
        }
    }

    /// Parse the rest of a call whose `(` has been consumed.
    fn walk_call(&mut self) -> Result<SourceNode, ParseError> {
        let name = self.advance()?;
        if name.text.is_empty() {
            return Err(ParseError::EmptyCallName);
        }

        let mut params = Vec::new();
        while !self.peek()?.is_close() {
            params.push(self.walk()?);
        }
        self.current += 1;

        Ok(SourceNode::call(name.text.as_str(), params))
    }
}
