//! Node kinds shared by the source and target trees.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every kind of node that can appear in either tree.
///
/// The source tree uses `Program`, `CallExpression`, `NumberLiteral` and
/// `StringLiteral`. The target tree uses all six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Program,
    ExpressionStatement,
    CallExpression,
    Identifier,
    NumberLiteral,
    StringLiteral,
}

impl NodeKind {
    /// The kind's name as it appears in serialized trees.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::Identifier => "Identifier",
            NodeKind::NumberLiteral => "NumberLiteral",
            NodeKind::StringLiteral => "StringLiteral",
        }
    }

    /// Number and string literals. These are the leaves of a traversal.
    pub fn is_literal(self) -> bool {
        matches!(self, NodeKind::NumberLiteral | NodeKind::StringLiteral)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
