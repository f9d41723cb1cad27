//! Tokenizer for the S-expression source language.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while tokenizing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// `offset` is a byte offset into the source.
    #[error("unexpected character {character:?} at offset {offset}")]
    UnexpectedCharacter { offset: usize, character: char },

    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Paren,
    Number,
    String,
    Name,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Paren => "paren",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Name => "name",
        })
    }
}

/// A lexical unit. For [`TokenKind::Paren`] the text is `(` or `)`; for
/// [`TokenKind::String`] it excludes the quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.kind == TokenKind::Paren && self.text == "("
    }

    pub fn is_close(&self) -> bool {
        self.kind == TokenKind::Paren && self.text == ")"
    }
}

/// Split source text into tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(source).run()?;
    tracing::trace!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Unicode whitespace plus the ASCII separators U+001C..=U+001F.
fn is_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(&(offset, ch)) = self.chars.peek() {
            match ch {
                '(' | ')' => {
                    self.chars.next();
                    tokens.push(Token::new(TokenKind::Paren, ch));
                }
                c if is_space(c) => {
                    self.chars.next();
                }
                c if c.is_ascii_digit() => {
                    let text = self.take_while(offset, |c| c.is_ascii_digit());
                    tokens.push(Token::new(TokenKind::Number, text));
                }
                '"' => {
                    let text = self.read_string(offset)?;
                    tokens.push(Token::new(TokenKind::String, text));
                }
                c if c.is_alphabetic() => {
                    let text = self.take_while(offset, char::is_alphabetic);
                    tokens.push(Token::new(TokenKind::Name, text));
                }
                character => {
                    return Err(LexError::UnexpectedCharacter { offset, character });
                }
            }
        }

        Ok(tokens)
    }

    /// Consume the maximal run starting at `start` whose characters satisfy `pred`.
    fn take_while(&mut self, start: usize, pred: impl Fn(char) -> bool) -> &'a str {
        let mut end = start;
        while let Some(&(offset, ch)) = self.chars.peek() {
            if !pred(ch) {
                break;
            }
            end = offset + ch.len_utf8();
            self.chars.next();
        }
        let source = self.source;
        &source[start..end]
    }

    /// Consume a string literal whose opening quote is at `start`.
    fn read_string(&mut self, start: usize) -> Result<&'a str, LexError> {
        self.chars.next();
        let source = self.source;
        let body = start + 1;
        for (offset, ch) in self.chars.by_ref() {
            if ch == '"' {
                return Ok(&source[body..offset]);
            }
        }
        Err(LexError::UnterminatedString { offset: start })
    }
}
