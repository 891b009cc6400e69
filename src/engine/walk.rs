use crate::{Lexeme, MatchOptions, Predicate, Repeat, TokenSpec, visitor::Visitor};

/// The matching visitor. The argument is the position to match at and the
/// output is the number of tokens consumed, or `None` on failure.
pub(super) struct Walk<'a, T> {
    tokens: &'a [T],
    options: MatchOptions,
}

impl<'a, T: Lexeme> Walk<'a, T> {
    pub(super) const fn new(tokens: &'a [T], options: MatchOptions) -> Self {
        Self { tokens, options }
    }

    #[inline]
    fn token_at(&self, pos: usize) -> Option<&'a T> {
        self.tokens.get(pos)
    }

    /// Whether `item` matches at `pos`, discarding how much it would consume.
    fn matches_here(&mut self, item: &Predicate, pos: usize) -> bool {
        item.accept(self, pos).is_some()
    }
}

impl<T: Lexeme> Visitor<usize> for Walk<'_, T> {
    type Output = Option<usize>;

    fn visit_token(&mut self, spec: &TokenSpec, pos: usize) -> Option<usize> {
        let token = self.token_at(pos)?;
        spec.matches(token, self.options.ignore_case).then_some(1)
    }

    fn visit_any(&mut self, pos: usize) -> Option<usize> {
        self.token_at(pos).map(|_| 1)
    }

    fn visit_sequence(&mut self, items: &[Predicate], pos: usize) -> Option<usize> {
        let mut consumed = 0;
        for item in items {
            consumed += item.accept(self, pos + consumed)?;
        }
        Some(consumed)
    }

    fn visit_alternative(&mut self, choices: &[Predicate], pos: usize) -> Option<usize> {
        choices.iter().find_map(|choice| choice.accept(self, pos))
    }

    fn visit_optional(&mut self, item: &Predicate, pos: usize) -> Option<usize> {
        Some(item.accept(self, pos).unwrap_or(0))
    }

    fn visit_repeat(&mut self, item: &Predicate, bounds: Repeat, pos: usize) -> Option<usize> {
        let mut count = 0;
        let mut consumed = 0;

        while bounds.allows_more(count) {
            let Some(step) = item.accept(self, pos + consumed) else {
                break;
            };
            if step == 0 {
                // a zero-width step repeats identically up to `max`, which is
                // never below `min`
                return Some(consumed);
            }
            count += 1;
            consumed += step;
        }

        (count >= bounds.min).then_some(consumed)
    }

    fn visit_not(&mut self, item: &Predicate, pos: usize) -> Option<usize> {
        self.token_at(pos)?;
        (!self.matches_here(item, pos)).then_some(1)
    }
}
