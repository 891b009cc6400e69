//! Static analyses over predicate trees.

mod bounds;
mod expand;

pub(crate) use self::bounds::BoundsVisitor;
pub use self::{bounds::LengthBounds, expand::Element};
