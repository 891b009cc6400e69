pub mod node;
pub mod quantifier;

pub use self::{
    node::{Node, TokenSpec},
    quantifier::Repeat,
};

use super::{Error, LengthBounds, MAX_DEPTH, Result, analysis::BoundsVisitor, visitor::Visitor};
use std::{fmt, sync::Arc};

/// A shared, immutable predicate tree.
///
/// Cloning is cheap; clones share the same nodes. The only way to obtain a
/// `Predicate` is through the constructors in [`crate::builder`], which
/// validate every node, so a `Predicate` is always well formed.
#[derive(Clone)]
pub struct Predicate(Arc<Inner>);

struct Inner {
    node: Node,
    bounds: LengthBounds,
    depth: usize,
}

impl Predicate {
    pub(crate) fn new(node: Node) -> Result<Self> {
        let result = validate(&node).and_then(|()| {
            let depth = 1 + node.children().map(Predicate::depth).max().unwrap_or(0);
            if depth > MAX_DEPTH {
                return Err(Error::TooDeep { depth });
            }
            let bounds = node.accept(&mut BoundsVisitor, ());
            Ok(Inner {
                node,
                bounds,
                depth,
            })
        });

        match result {
            Ok(inner) => Ok(Self(Arc::new(inner))),
            Err(error) => {
                tracing::debug!(%error, "rejected predicate");
                Err(error)
            }
        }
    }

    /// Wraps a childless node, which needs no validation.
    pub(crate) fn terminal(node: Node) -> Self {
        debug_assert!(node.children().next().is_none());
        let bounds = node.accept(&mut BoundsVisitor, ());
        Self(Arc::new(Inner {
            node,
            bounds,
            depth: 1,
        }))
    }

    #[must_use]
    pub fn node(&self) -> &Node {
        &self.0.node
    }

    /// The smallest and largest number of tokens a match can consume.
    #[must_use]
    pub fn length_bounds(&self) -> LengthBounds {
        self.0.bounds
    }

    /// Nesting depth; a leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.depth
    }

    /// Dispatches to the `visit_*` method of `visitor` matching this node.
    pub fn accept<A, V>(&self, visitor: &mut V, arg: A) -> V::Output
    where
        V: Visitor<A> + ?Sized,
    {
        self.0.node.accept(visitor, arg)
    }

    /// Returns true if both handles share the same tree.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

fn validate(node: &Node) -> Result<()> {
    match node {
        Node::Sequence(items) if items.is_empty() => Err(Error::EmptySequence),
        Node::Alternative(choices) if choices.is_empty() => Err(Error::EmptyAlternative),
        Node::Repeat { item, bounds } => {
            if let Some(max) = bounds.max
                && bounds.min > max
            {
                return Err(Error::RepetitionBounds {
                    min: bounds.min,
                    max,
                });
            }
            if bounds.max.is_none() && item.length_bounds().min == 0 {
                return Err(Error::ZeroWidthRepetition);
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0.node == other.0.node
    }
}

impl Eq for Predicate {}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0.node, f)
    }
}

impl std::ops::Deref for Predicate {
    type Target = Node;

    fn deref(&self) -> &Self::Target {
        &self.0.node
    }
}
