//! The target tree, in the call-expression grammar.

use serde::{Deserialize, Serialize};

use crate::NodeKind;
use crate::source::bump;

/// A node of the target tree.
///
/// Top-level calls are wrapped in [`TargetNode::ExpressionStatement`];
/// nested calls appear bare as arguments. Every `callee` is an
/// [`TargetNode::Identifier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TargetNode {
    /// Root only.
    Program {
        body: Vec<TargetNode>,
    },
    ExpressionStatement {
        expression: Box<TargetNode>,
    },
    CallExpression {
        callee: Box<TargetNode>,
        arguments: Vec<TargetNode>,
    },
    Identifier {
        name: String,
    },
    NumberLiteral {
        text: String,
    },
    StringLiteral {
        text: String,
    },
}

impl TargetNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            TargetNode::Program { .. } => NodeKind::Program,
            TargetNode::ExpressionStatement { .. } => NodeKind::ExpressionStatement,
            TargetNode::CallExpression { .. } => NodeKind::CallExpression,
            TargetNode::Identifier { .. } => NodeKind::Identifier,
            TargetNode::NumberLiteral { .. } => NodeKind::NumberLiteral,
            TargetNode::StringLiteral { .. } => NodeKind::StringLiteral,
        }
    }

    /// The argument list of this call, or of the call wrapped by this
    /// statement.
    pub fn arguments_mut(&mut self) -> Option<&mut Vec<TargetNode>> {
        match self {
            TargetNode::CallExpression { arguments, .. } => Some(arguments),
            TargetNode::ExpressionStatement { expression } => expression.arguments_mut(),
            _ => None,
        }
    }

    /// Number of call expressions at each nesting depth (index 0 = top level).
    ///
    /// Statement wrappers do not count as a level.
    pub fn calls_by_depth(&self) -> Vec<usize> {
        let mut counts = Vec::new();
        match self {
            TargetNode::Program { body } => {
                for node in body {
                    node.count_calls(0, &mut counts);
                }
            }
            node => node.count_calls(0, &mut counts),
        }
        counts
    }

    fn count_calls(&self, depth: usize, counts: &mut Vec<usize>) {
        match self {
            TargetNode::ExpressionStatement { expression } => expression.count_calls(depth, counts),
            TargetNode::CallExpression { arguments, .. } => {
                bump(counts, depth);
                for arg in arguments {
                    arg.count_calls(depth + 1, counts);
                }
            }
            _ => {}
        }
    }
}
