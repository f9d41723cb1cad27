//! Convenience constructors for both trees.

use crate::{SourceNode, TargetNode};

// ============================================================================
// Source tree
// ============================================================================

impl SourceNode {
    /// Numeric literal, kept as its source text.
    pub fn number(text: impl Into<String>) -> Self {
        SourceNode::NumberLiteral { text: text.into() }
    }

    /// String literal, without its quotes.
    pub fn string(text: impl Into<String>) -> Self {
        SourceNode::StringLiteral { text: text.into() }
    }

    /// Call expression `(name params...)`.
    pub fn call(name: impl Into<String>, params: Vec<SourceNode>) -> Self {
        SourceNode::CallExpression {
            name: name.into(),
            params,
        }
    }
}

// ============================================================================
// Target tree
// ============================================================================

impl TargetNode {
    pub fn program(body: Vec<TargetNode>) -> Self {
        TargetNode::Program { body }
    }

    /// Wraps an expression as a top-level statement.
    pub fn statement(expression: TargetNode) -> Self {
        TargetNode::ExpressionStatement {
            expression: Box::new(expression),
        }
    }

    /// Call expression with an identifier callee.
    pub fn call(callee: impl Into<String>, arguments: Vec<TargetNode>) -> Self {
        TargetNode::CallExpression {
            callee: Box::new(TargetNode::identifier(callee)),
            arguments,
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        TargetNode::Identifier { name: name.into() }
    }

    pub fn number(text: impl Into<String>) -> Self {
        TargetNode::NumberLiteral { text: text.into() }
    }

    pub fn string(text: impl Into<String>) -> Self {
        TargetNode::StringLiteral { text: text.into() }
    }
}
