//! Target tree to C-style source generation.

use thiserror::Error;
use twig_ir::{NodeKind, TargetNode};

use crate::config::CodegenConfig;

/// Errors that can occur during generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("unexpected {kind} node")]
    UnexpectedKind { kind: NodeKind },

    #[error("callee must be an Identifier, got {kind}")]
    InvalidCallee { kind: NodeKind },
}

/// Render a target tree with the default formatting.
pub fn generate(node: &TargetNode) -> Result<String, GenError> {
    generate_with(node, &CodegenConfig::default())
}

/// Render a target tree with the given formatting.
///
/// `Program` is only accepted as the node passed in; any other node may
/// also be rendered on its own.
pub fn generate_with(node: &TargetNode, config: &CodegenConfig) -> Result<String, GenError> {
    let code = Generator { config }.render(node, true)?;
    tracing::trace!(bytes = code.len(), "generated");
    Ok(code)
}

struct Generator<'a> {
    config: &'a CodegenConfig,
}

impl Generator<'_> {
    fn render(&self, node: &TargetNode, is_root: bool) -> Result<String, GenError> {
        match node {
            TargetNode::Program { body } if is_root => {
                let statements = self.render_all(body)?;
                Ok(statements.join(self.config.statement_separator.as_str()))
            }
            TargetNode::Program { .. } => Err(GenError::UnexpectedKind {
                kind: NodeKind::Program,
            }),
            TargetNode::ExpressionStatement { expression } => {
                let mut code = self.render(expression, false)?;
                code.push_str(&self.config.statement_terminator);
                Ok(code)
            }
            TargetNode::CallExpression { callee, arguments } => {
                let TargetNode::Identifier { name } = callee.as_ref() else {
                    return Err(GenError::InvalidCallee {
                        kind: callee.kind(),
                    });
                };
                let args = self.render_all(arguments)?;
                Ok(format!(
                    "{}({})",
                    name,
                    args.join(self.config.argument_separator.as_str())
                ))
            }
            TargetNode::Identifier { name } => Ok(name.clone()),
            TargetNode::NumberLiteral { text } => Ok(text.clone()),
            // Embedded quotes are not escaped; the source language has no escapes either
            TargetNode::StringLiteral { text } => Ok(format!("\"{}\"", text)),
        }
    }

    fn render_all(&self, nodes: &[TargetNode]) -> Result<Vec<String>, GenError> {
        nodes.iter().map(|node| self.render(node, false)).collect()
    }
}
