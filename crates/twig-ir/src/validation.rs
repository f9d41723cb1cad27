//! Target tree validation.

use crate::{NodeKind, TargetNode};
use thiserror::Error;

/// Errors that can occur during validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("root must be a Program, got {0}")]
    NotAProgram(NodeKind),

    #[error("{kind} is not allowed {position}")]
    Misplaced {
        kind: NodeKind,
        position: &'static str,
    },

    #[error("callee must be an Identifier, got {0}")]
    InvalidCallee(NodeKind),

    #[error("identifier name must not be empty")]
    EmptyIdentifier,
}

/// Validate a target tree for structural correctness.
///
/// This checks:
/// - The root is a `Program`, and `Program` appears nowhere else
/// - `ExpressionStatement` appears only directly under the root
/// - Every callee is an `Identifier` with a non-empty name
pub fn validate(root: &TargetNode) -> Result<(), ValidationError> {
    let TargetNode::Program { body } = root else {
        return Err(ValidationError::NotAProgram(root.kind()));
    };

    for node in body {
        match node {
            TargetNode::ExpressionStatement { expression } => validate_expression(expression)?,
            other => validate_expression(other)?,
        }
    }

    Ok(())
}

fn validate_expression(node: &TargetNode) -> Result<(), ValidationError> {
    match node {
        TargetNode::Program { .. } => Err(ValidationError::Misplaced {
            kind: NodeKind::Program,
            position: "below the root",
        }),
        TargetNode::ExpressionStatement { .. } => Err(ValidationError::Misplaced {
            kind: NodeKind::ExpressionStatement,
            position: "inside an expression",
        }),
        TargetNode::CallExpression { callee, arguments } => {
            match callee.as_ref() {
                TargetNode::Identifier { name } if name.is_empty() => {
                    return Err(ValidationError::EmptyIdentifier);
                }
                TargetNode::Identifier { .. } => {}
                other => return Err(ValidationError::InvalidCallee(other.kind())),
            }
            for arg in arguments {
                validate_expression(arg)?;
            }
            Ok(())
        }
        TargetNode::Identifier { name } if name.is_empty() => Err(ValidationError::EmptyIdentifier),
        // All other kinds (Identifier, NumberLiteral, StringLiteral) are valid
        _ => Ok(()),
    }
}
