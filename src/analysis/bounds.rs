use crate::{Predicate, Repeat, TokenSpec, visitor::Visitor};

/// The range of token counts a predicate can consume when it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthBounds {
    pub min: usize,
    /// `None` when the predicate can consume arbitrarily many tokens.
    pub max: Option<usize>,
}

impl LengthBounds {
    pub const ONE: Self = Self::exact(1);

    #[must_use]
    pub const fn exact(len: usize) -> Self {
        Self {
            min: len,
            max: Some(len),
        }
    }

    /// Returns true if the predicate can match without consuming anything.
    #[must_use]
    pub const fn is_nullable(self) -> bool {
        self.min == 0
    }

    /// Returns true if `len` lies within the bounds.
    #[must_use]
    pub fn contains(self, len: usize) -> bool {
        len >= self.min && self.max.is_none_or(|max| len <= max)
    }
}

/// Computes [`LengthBounds`] for one node from the bounds cached on its
/// children, so building a tree stays linear.
pub(crate) struct BoundsVisitor;

impl Visitor<()> for BoundsVisitor {
    type Output = LengthBounds;

    fn visit_token(&mut self, _: &TokenSpec, (): ()) -> LengthBounds {
        LengthBounds::ONE
    }

    fn visit_any(&mut self, (): ()) -> LengthBounds {
        LengthBounds::ONE
    }

    fn visit_sequence(&mut self, items: &[Predicate], (): ()) -> LengthBounds {
        items
            .iter()
            .map(Predicate::length_bounds)
            .fold(LengthBounds::exact(0), |acc, next| LengthBounds {
                min: acc.min.saturating_add(next.min),
                max: acc.max.zip(next.max).and_then(|(a, b)| a.checked_add(b)),
            })
    }

    fn visit_alternative(&mut self, choices: &[Predicate], (): ()) -> LengthBounds {
        let mut bounds = choices.iter().map(Predicate::length_bounds);
        let Some(first) = bounds.next() else {
            return LengthBounds::exact(0);
        };
        bounds.fold(first, |acc, next| LengthBounds {
            min: acc.min.min(next.min),
            max: acc.max.zip(next.max).map(|(a, b)| a.max(b)),
        })
    }

    fn visit_optional(&mut self, item: &Predicate, (): ()) -> LengthBounds {
        LengthBounds {
            min: 0,
            max: item.length_bounds().max,
        }
    }

    fn visit_repeat(&mut self, item: &Predicate, bounds: Repeat, (): ()) -> LengthBounds {
        let inner = item.length_bounds();
        let max = match (inner.max, bounds.max) {
            (Some(0), _) | (_, Some(0)) => Some(0),
            (Some(a), Some(b)) => a.checked_mul(b),
            _ => None,
        };
        LengthBounds {
            min: inner.min.saturating_mul(bounds.min),
            max,
        }
    }

    fn visit_not(&mut self, _: &Predicate, (): ()) -> LengthBounds {
        LengthBounds::ONE
    }
}
