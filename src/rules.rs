//! Named collections of predicates matched together.
//!
//! A [`RuleSet`] is built once, when rules are compiled, and then shared
//! read-only by every matching attempt. Reloading rules means building a new
//! set and swapping it in.

use super::{Error, Lexeme, MatchOptions, MatchResult, Matcher, Predicate, Result};
use std::iter::FusedIterator;

#[derive(Debug, Clone)]
struct Rule {
    name: String,
    matcher: Matcher,
}

/// An ordered set of named predicates. Earlier rules take precedence.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    options: MatchOptions,
}

/// A match of one rule of a [`RuleSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'r> {
    pub rule: &'r str,
    pub span: MatchResult,
}

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the options used for every rule, including ones already added.
    #[must_use]
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        tracing::debug!(rules = self.rules.len(), ?options, "rule set options changed");
        for rule in &mut self.rules {
            rule.matcher = rule.matcher.clone().with_options(options);
        }
        self
    }

    #[must_use]
    pub const fn options(&self) -> MatchOptions {
        self.options
    }

    /// Appends a rule with lower precedence than every existing one.
    pub fn insert(&mut self, name: impl Into<String>, predicate: &Predicate) -> Result<()> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(Error::DuplicateRule(name));
        }

        tracing::debug!(rule = %name, %predicate, "rule added");
        self.rules.push(Rule {
            name,
            matcher: Matcher::new(predicate).with_options(self.options),
        });
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.rules
            .iter()
            .find(|rule| rule.name == name)
            .map(|rule| rule.matcher.predicate())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in precedence order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name.as_str())
    }

    /// The first rule, in precedence order, that matches at `offset`.
    #[must_use]
    pub fn match_at<T: Lexeme>(&self, tokens: &[T], offset: usize) -> Option<RuleMatch<'_>> {
        self.rules.iter().find_map(|rule| {
            rule.matcher.match_at(tokens, offset).map(|span| RuleMatch {
                rule: &rule.name,
                span,
            })
        })
    }

    /// The first rule that consumes tokens at `offset`, falling back to the
    /// first zero-length match when `report_empty` is set.
    fn scan_at<T: Lexeme>(&self, tokens: &[T], offset: usize) -> Option<RuleMatch<'_>> {
        let mut empty = None;
        for rule in &self.rules {
            let Some(span) = rule.matcher.match_at(tokens, offset) else {
                continue;
            };
            let found = RuleMatch {
                rule: &rule.name,
                span,
            };
            if !span.is_empty() {
                return Some(found);
            }
            if self.options.report_empty && empty.is_none() {
                empty = Some(found);
            }
        }
        empty
    }

    /// Lazily yields non-overlapping rule matches in `tokens`, scanning the
    /// same way as [`find_all`](crate::find_all). At each offset a rule that
    /// consumes tokens wins over earlier rules that only match empty.
    pub fn scan<'r, 't, T: Lexeme>(&'r self, tokens: &'t [T]) -> Scan<'r, 't, T> {
        Scan {
            rules: self,
            tokens,
            current_pos: 0,
        }
    }
}

/// Iterator returned by [`RuleSet::scan`].
#[derive(Debug, Clone)]
pub struct Scan<'r, 't, T> {
    rules: &'r RuleSet,
    tokens: &'t [T],
    current_pos: usize,
}

impl<'r, T: Lexeme> Iterator for Scan<'r, '_, T> {
    type Item = RuleMatch<'r>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_pos <= self.tokens.len() {
            let start = self.current_pos;
            match self.rules.scan_at(self.tokens, start) {
                Some(found) if !found.span.is_empty() => {
                    self.current_pos = found.span.end();
                    tracing::trace!(
                        rule = found.rule,
                        start,
                        end = found.span.end(),
                        "rule match"
                    );
                    return Some(found);
                }
                Some(found) => {
                    self.current_pos = start + 1;
                    tracing::trace!(rule = found.rule, start, "rule empty match");
                    return Some(found);
                }
                None => self.current_pos = start + 1,
            }
        }

        None
    }
}

impl<T: Lexeme> FusedIterator for Scan<'_, '_, T> {}
