use crate::{Lexeme, MatchResult, Matcher};
use std::iter::FusedIterator;

/// Iterator returned by [`find_all`](super::find_all) and
/// [`Matcher::find_all`].
#[derive(Debug, Clone)]
pub struct FindAll<'t, T> {
    matcher: Matcher,
    tokens: &'t [T],
    current_pos: usize,
}

impl<'t, T: Lexeme> FindAll<'t, T> {
    pub(crate) const fn new(matcher: Matcher, tokens: &'t [T]) -> Self {
        Self {
            matcher,
            tokens,
            current_pos: 0,
        }
    }
}

impl<T: Lexeme> Iterator for FindAll<'_, T> {
    type Item = MatchResult;

    fn next(&mut self) -> Option<Self::Item> {
        let report_empty = self.matcher.options().report_empty;

        while self.current_pos <= self.tokens.len() {
            let start = self.current_pos;
            match self.matcher.match_at(self.tokens, start) {
                Some(found) if !found.is_empty() => {
                    self.current_pos = found.end();
                    tracing::trace!(start, end = found.end(), "scanner match");
                    return Some(found);
                }
                Some(found) if report_empty => {
                    self.current_pos = start + 1;
                    tracing::trace!(start, "scanner empty match");
                    return Some(found);
                }
                _ => self.current_pos = start + 1,
            }
        }

        None
    }
}

impl<T: Lexeme> FusedIterator for FindAll<'_, T> {}
