//! Double-dispatch interface over predicate trees.
//!
//! Every interpretation of a tree (matching, printing, length analysis,
//! expansion) is a [`Visitor`]. [`Predicate::accept`](crate::Predicate::accept)
//! selects the method for the node's variant and forwards the caller's
//! argument unchanged. There are no default methods, so a new node variant
//! fails to compile until every visitor handles it.

use crate::{Predicate, Repeat, TokenSpec};

/// An algorithm over predicate nodes, parameterised by the argument type `A`
/// threaded through each call.
pub trait Visitor<A> {
    type Output;

    fn visit_token(&mut self, spec: &TokenSpec, arg: A) -> Self::Output;

    fn visit_any(&mut self, arg: A) -> Self::Output;

    fn visit_sequence(&mut self, items: &[Predicate], arg: A) -> Self::Output;

    fn visit_alternative(&mut self, choices: &[Predicate], arg: A) -> Self::Output;

    fn visit_optional(&mut self, item: &Predicate, arg: A) -> Self::Output;

    fn visit_repeat(&mut self, item: &Predicate, bounds: Repeat, arg: A) -> Self::Output;

    fn visit_not(&mut self, item: &Predicate, arg: A) -> Self::Output;
}
