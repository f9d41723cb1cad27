//! The source tree, in the S-expression grammar.

use serde::{Deserialize, Serialize};

use crate::NodeKind;

/// Root of the source tree: the top-level forms in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<SourceNode>,
}

/// A node of the source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SourceNode {
    NumberLiteral {
        text: String,
    },
    StringLiteral {
        text: String,
    },
    /// `(name params...)`. `params` may be empty.
    CallExpression {
        name: String,
        params: Vec<SourceNode>,
    },
}

impl Program {
    pub fn new(body: Vec<SourceNode>) -> Self {
        Self { body }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Program
    }

    /// Number of call expressions at each nesting depth (index 0 = top level).
    pub fn calls_by_depth(&self) -> Vec<usize> {
        let mut counts = Vec::new();
        for node in &self.body {
            node.count_calls(0, &mut counts);
        }
        counts
    }
}

impl SourceNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            SourceNode::NumberLiteral { .. } => NodeKind::NumberLiteral,
            SourceNode::StringLiteral { .. } => NodeKind::StringLiteral,
            SourceNode::CallExpression { .. } => NodeKind::CallExpression,
        }
    }

    /// Parameters of a call; empty for literals.
    pub fn params(&self) -> &[SourceNode] {
        match self {
            SourceNode::CallExpression { params, .. } => params,
            _ => &[],
        }
    }

    fn count_calls(&self, depth: usize, counts: &mut Vec<usize>) {
        if let SourceNode::CallExpression { params, .. } = self {
            bump(counts, depth);
            for param in params {
                param.count_calls(depth + 1, counts);
            }
        }
    }
}

pub(crate) fn bump(counts: &mut Vec<usize>, depth: usize) {
    if counts.len() <= depth {
        counts.resize(depth + 1, 0);
    }
    counts[depth] += 1;
}
