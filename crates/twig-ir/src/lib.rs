//! Syntax trees for Twig.
//!
//! This crate defines the two trees that sit between the S-expression
//! frontend and the call-expression backend:
//!
//! - the **source tree** ([`Program`] of [`SourceNode`]s), produced by the parser
//! - the **target tree** ([`TargetNode`]), produced by the transformer and
//!   consumed by the code generator
//!
//! Both trees share the closed set of node kinds in [`NodeKind`].
//!
//! # JSON shape
//!
//! Nodes serialize with a `type` tag naming their kind:
//! ```json
//! {"type": "CallExpression", "name": "add", "params": [
//!   {"type": "NumberLiteral", "text": "2"},
//!   {"type": "NumberLiteral", "text": "2"}
//! ]}
//! ```

mod builders;
mod kind;
mod source;
mod target;
mod validation;

pub use kind::NodeKind;
pub use source::{Program, SourceNode};
pub use target::TargetNode;
pub use validation::{ValidationError, validate};
