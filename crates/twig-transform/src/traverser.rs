//! Depth-first traversal with visitors keyed by node kind.
//!
//! The traverser knows how to descend into `Program` and `CallExpression`
//! nodes and that literals are leaves. Everything else about a walk lives in
//! the [`Visitor`]s: each one is entered before its node's children and
//! returns the context those children should see.
//!
//! The context is threaded through the walk as an argument. For the
//! transformer it is the target-side list a node's output is appended to,
//! so a call expression can hand its own argument list down to its
//! parameters without storing anything on the source tree.

use std::collections::HashMap;

use thiserror::Error;
use twig_ir::{NodeKind, Program, SourceNode, TargetNode};

/// Errors that can occur during traversal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraversalError {
    #[error("cannot traverse {kind} node")]
    UnknownKind { kind: NodeKind },

    #[error("visitor for {kind} could not find the container it created")]
    MissingContext { kind: NodeKind },
}

/// A tree the traverser can walk.
pub trait Traversable: Copy {
    fn kind(&self) -> NodeKind;

    /// Nodes to descend into, in order. Only consulted for `Program` and
    /// `CallExpression`.
    fn children(&self) -> Vec<Self>;
}

/// Borrowed view of a source tree node, including its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRef<'a> {
    Program(&'a Program),
    Node(&'a SourceNode),
}

impl Traversable for SourceRef<'_> {
    fn kind(&self) -> NodeKind {
        match self {
            SourceRef::Program(program) => program.kind(),
            SourceRef::Node(node) => node.kind(),
        }
    }

    fn children(&self) -> Vec<Self> {
        let nodes = match *self {
            SourceRef::Program(program) => program.body.as_slice(),
            SourceRef::Node(node) => node.params(),
        };
        nodes.iter().map(SourceRef::Node).collect()
    }
}

impl<'a> Traversable for &'a TargetNode {
    fn kind(&self) -> NodeKind {
        TargetNode::kind(self)
    }

    fn children(&self) -> Vec<Self> {
        let node: &'a TargetNode = *self;
        match node {
            TargetNode::Program { body } => body.iter().collect(),
            TargetNode::CallExpression { arguments, .. } => arguments.iter().collect(),
            _ => Vec::new(),
        }
    }
}

/// Callback entered when the traverser reaches a node of a registered kind.
pub trait Visitor<T, C> {
    /// Called before `node`'s children are visited. `context` is the value
    /// bound by the nearest ancestor; the returned context is what the
    /// children receive.
    fn enter<'c>(
        &mut self,
        node: T,
        parent: Option<T>,
        context: &'c mut C,
    ) -> Result<&'c mut C, TraversalError>;
}

/// Visitors keyed by the node kind they handle.
pub struct Visitors<'v, T, C> {
    by_kind: HashMap<NodeKind, Box<dyn Visitor<T, C> + Send + 'v>>,
}

impl<'v, T, C> Visitors<'v, T, C> {
    pub fn new() -> Self {
        Self {
            by_kind: HashMap::new(),
        }
    }

    /// Register `visitor` for `kind`, replacing any earlier one.
    pub fn on(mut self, kind: NodeKind, visitor: impl Visitor<T, C> + Send + 'v) -> Self {
        self.by_kind.insert(kind, Box::new(visitor));
        self
    }

    pub fn handles(&self, kind: NodeKind) -> bool {
        self.by_kind.contains_key(&kind)
    }

    fn get_mut(&mut self, kind: NodeKind) -> Option<&mut (dyn Visitor<T, C> + Send + 'v)> {
        self.by_kind.get_mut(&kind).map(|visitor| &mut **visitor)
    }
}

impl<T, C> Default for Visitors<'_, T, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk `root` depth-first, entering registered visitors in pre-order.
pub fn traverse<T: Traversable, C>(
    root: T,
    visitors: &mut Visitors<'_, T, C>,
    context: &mut C,
) -> Result<(), TraversalError> {
    traverse_node(root, None, visitors, context)
}

fn traverse_node<T: Traversable, C>(
    node: T,
    parent: Option<T>,
    visitors: &mut Visitors<'_, T, C>,
    context: &mut C,
) -> Result<(), TraversalError> {
    let kind = node.kind();
    let context = match visitors.get_mut(kind) {
        Some(visitor) => visitor.enter(node, parent, context)?,
        None => context,
    };

    match kind {
        NodeKind::Program | NodeKind::CallExpression => {
            for child in node.children() {
                traverse_node(child, Some(node), visitors, context)?;
            }
            Ok(())
        }
        kind if kind.is_literal() => Ok(()),
        kind => Err(TraversalError::UnknownKind { kind }),
    }
}
