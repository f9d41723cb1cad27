//! Source tree to target tree transform.

use twig_ir::{NodeKind, Program, SourceNode, TargetNode};

use crate::traverser::{SourceRef, Traversable, TraversalError, Visitor, Visitors, traverse};

type Context = Vec<TargetNode>;

/// Build the target tree for `program`.
///
/// Each top-level call becomes an `ExpressionStatement`; nested calls stay
/// bare expressions in their parent's argument list.
pub fn transform(program: &Program) -> Result<TargetNode, TraversalError> {
    let mut body = Context::new();
    let mut visitors: Visitors<'_, SourceRef<'_>, Context> = Visitors::new()
        .on(NodeKind::NumberLiteral, NumberLiteralVisitor)
        .on(NodeKind::StringLiteral, StringLiteralVisitor)
        .on(NodeKind::CallExpression, CallExpressionVisitor);

    traverse(SourceRef::Program(program), &mut visitors, &mut body)?;

    tracing::trace!(statements = body.len(), "transformed");
    Ok(TargetNode::program(body))
}

struct NumberLiteralVisitor;

impl<'a> Visitor<SourceRef<'a>, Context> for NumberLiteralVisitor {
    fn enter<'c>(
        &mut self,
        node: SourceRef<'a>,
        _parent: Option<SourceRef<'a>>,
        context: &'c mut Context,
    ) -> Result<&'c mut Context, TraversalError> {
        if let SourceRef::Node(SourceNode::NumberLiteral { text }) = node {
            context.push(TargetNode::number(text.as_str()));
        }
        Ok(context)
    }
}

struct StringLiteralVisitor;

impl<'a> Visitor<SourceRef<'a>, Context> for StringLiteralVisitor {
    fn enter<'c>(
        &mut self,
        node: SourceRef<'a>,
        _parent: Option<SourceRef<'a>>,
        context: &'c mut Context,
    ) -> Result<&'c mut Context, TraversalError> {
        if let SourceRef::Node(SourceNode::StringLiteral { text }) = node {
            context.push(TargetNode::string(text.as_str()));
        }
        Ok(context)
    }
}

/// Appends the new call to its parent's list, then hands the call's own
/// argument list to its children.
struct CallExpressionVisitor;

impl<'a> Visitor<SourceRef<'a>, Context> for CallExpressionVisitor {
    fn enter<'c>(
        &mut self,
        node: SourceRef<'a>,
        parent: Option<SourceRef<'a>>,
        context: &'c mut Context,
    ) -> Result<&'c mut Context, TraversalError> {
        let SourceRef::Node(SourceNode::CallExpression { name, .. }) = node else {
            return Ok(context);
        };

        let call = TargetNode::call(name.as_str(), Vec::new());
        let nested = parent.is_some_and(|p| p.kind() == NodeKind::CallExpression);
        context.push(if nested {
            call
        } else {
            TargetNode::statement(call)
        });

        context
            .last_mut()
            .and_then(TargetNode::arguments_mut)
            .ok_or(TraversalError::MissingContext {
                kind: NodeKind::CallExpression,
            })
    }
}
