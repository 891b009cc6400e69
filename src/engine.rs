//! Matching a predicate tree against a token slice.

mod walk;

use super::{Lexeme, MatchOptions, Predicate, scanner::FindAll};
use std::ops::Range;
use walk::Walk;


/// Matches `predicate` against `tokens` starting exactly at `offset`, with
/// default [`MatchOptions`].
#[must_use]
pub fn match_at<T: Lexeme>(
    predicate: &Predicate,
    tokens: &[T],
    offset: usize,
) -> Option<MatchResult> {
    Matcher::new(predicate).match_at(tokens, offset)
}

/// A predicate paired with the options used to match it.
#[derive(Debug, Clone)]
pub struct Matcher {
    predicate: Predicate,
    options: MatchOptions,
}

impl Matcher {
    #[must_use]
    pub fn new(predicate: &Predicate) -> Self {
        Self {
            predicate: predicate.clone(),
            options: MatchOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    #[must_use]
    pub const fn options(&self) -> MatchOptions {
        self.options
    }

    /// Determines whether the predicate matches `tokens` starting exactly at
    /// `offset`, and if so how many tokens it consumes.
    ///
    /// Failing to match is not an error. An `offset` past the end of `tokens`
    /// never matches; an `offset` equal to its length matches only predicates
    /// that can consume nothing.
    #[must_use]
    pub fn match_at<T: Lexeme>(&self, tokens: &[T], offset: usize) -> Option<MatchResult> {
        if offset > tokens.len() {
            return None;
        }

        let mut walk = Walk::new(tokens, self.options);
        let consumed = self.predicate.accept(&mut walk, offset)?;
        tracing::trace!(offset, consumed, "predicate matched");
        Some(MatchResult {
            start: offset,
            consumed,
        })
    }

    /// Lazily yields every non-overlapping match in `tokens`.
    pub fn find_all<'t, T: Lexeme>(&self, tokens: &'t [T]) -> FindAll<'t, T> {
        FindAll::new(self.clone(), tokens)
    }
}

/// The extent of a successful match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchResult {
    /// Index of the first matched token.
    pub start: usize,
    /// Number of tokens matched.
    pub consumed: usize,
}

impl MatchResult {
    /// Index one past the last matched token.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.consumed
    }

    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.consumed == 0
    }

    /// The matched tokens, or an empty slice if `tokens` is not the slice
    /// this result came from and is too short.
    #[must_use]
    pub fn tokens<'t, T>(&self, tokens: &'t [T]) -> &'t [T] {
        tokens.get(self.range()).unwrap_or_default()
    }
}
