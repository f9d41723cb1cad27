//! Tree traversal and the source-to-target transform for Twig.
//!
//! [`traverse`] is a generic pre-order walker that dispatches to
//! [`Visitor`]s by [`NodeKind`](twig_ir::NodeKind). [`transform`] drives it
//! with three visitors to turn the S-expression tree into the
//! call-expression tree.

mod transformer;
mod traverser;

pub use transformer::transform;
pub use traverser::{SourceRef, Traversable, TraversalError, Visitor, Visitors, traverse};
