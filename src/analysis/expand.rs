use crate::{
    DEFAULT_EXPANSION_LIMIT, Error, Predicate, Repeat, Result, TokenSpec, printer,
    visitor::Visitor,
};
use std::fmt;

/// One single-token step of an expanded predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Token(TokenSpec),
    Any,
    /// Any token the wrapped predicate does not match.
    Not(Predicate),
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Token(spec) => printer::write_spec(f, spec),
            Element::Any => f.write_str("_"),
            Element::Not(item) => printer::write_not(f, item),
        }
    }
}

impl Predicate {
    /// Enumerates every sequence of single-token steps this predicate
    /// denotes, most preferred first, with
    /// [`DEFAULT_EXPANSION_LIMIT`](crate::DEFAULT_EXPANSION_LIMIT).
    pub fn expand(&self) -> Result<Vec<Vec<Element>>> {
        self.expand_with_limit(DEFAULT_EXPANSION_LIMIT)
    }

    /// Like [`Predicate::expand`], failing once more than `limit` sequences
    /// would be produced or a repetition allows more than `limit` iterations.
    pub fn expand_with_limit(&self, limit: usize) -> Result<Vec<Vec<Element>>> {
        let expanded = self.accept(&mut Expander { limit }, ())?;

        let mut unique: Vec<Vec<Element>> = Vec::with_capacity(expanded.len());
        for sequence in expanded {
            if !unique.contains(&sequence) {
                unique.push(sequence);
            }
        }
        Ok(unique)
    }
}

struct Expander {
    limit: usize,
}

impl Expander {
    fn check(&self, count: usize) -> Result<()> {
        if count > self.limit {
            Err(Error::ExpansionLimit { limit: self.limit })
        } else {
            Ok(())
        }
    }

    fn product(&self, heads: &[Vec<Element>], tails: &[Vec<Element>]) -> Result<Vec<Vec<Element>>> {
        let count = heads.len().saturating_mul(tails.len());
        self.check(count)?;

        let mut out = Vec::with_capacity(count);
        for head in heads {
            for tail in tails {
                out.push(head.iter().chain(tail).cloned().collect());
            }
        }
        Ok(out)
    }
}

impl Visitor<()> for Expander {
    type Output = Result<Vec<Vec<Element>>>;

    fn visit_token(&mut self, spec: &TokenSpec, (): ()) -> Self::Output {
        Ok(vec![vec![Element::Token(spec.clone())]])
    }

    fn visit_any(&mut self, (): ()) -> Self::Output {
        Ok(vec![vec![Element::Any]])
    }

    fn visit_sequence(&mut self, items: &[Predicate], (): ()) -> Self::Output {
        let mut acc = vec![Vec::new()];
        for item in items {
            let next = item.accept(self, ())?;
            acc = self.product(&acc, &next)?;
        }
        Ok(acc)
    }

    fn visit_alternative(&mut self, choices: &[Predicate], (): ()) -> Self::Output {
        let mut out = Vec::new();
        for choice in choices {
            out.extend(choice.accept(self, ())?);
            self.check(out.len())?;
        }
        Ok(out)
    }

    fn visit_optional(&mut self, item: &Predicate, (): ()) -> Self::Output {
        let mut out = item.accept(self, ())?;
        out.push(Vec::new());
        self.check(out.len())?;
        Ok(out)
    }

    fn visit_repeat(&mut self, item: &Predicate, bounds: Repeat, (): ()) -> Self::Output {
        let Some(max) = bounds.max else {
            return Err(Error::UnboundedExpansion);
        };
        // each iteration rebuilds every sequence, so the count is capped too
        self.check(max)?;
        // every repetition count contributes at least one sequence
        self.check(max.saturating_sub(bounds.min).saturating_add(1))?;

        let once = item.accept(self, ())?;
        let mut levels = Vec::new();
        let mut total = 0usize;
        let mut current = vec![Vec::new()];
        for count in 0..=max {
            if count >= bounds.min {
                total = total.saturating_add(current.len());
                self.check(total)?;
                levels.push(current.clone());
            }
            if count < max {
                current = self.product(&current, &once)?;
            }
        }

        // greedy: more repetitions first
        Ok(levels.into_iter().rev().flatten().collect())
    }

    fn visit_not(&mut self, item: &Predicate, (): ()) -> Self::Output {
        Ok(vec![vec![Element::Not(item.clone())]])
    }
}
