//! Combinators for building predicate trees.
//!
//! Every composite constructor validates its node before returning, so a tree
//! is either built whole or not at all:
//!
//! ```
//! use tokpred::{keyword, not, repeat, sequence};
//!
//! # fn main() -> tokpred::Result<()> {
//! let block = sequence([
//!     keyword("BEGIN"),
//!     repeat(not(keyword("END"))?, 0, None)?,
//!     keyword("END"),
//! ])?;
//! assert_eq!(block.length_bounds().min, 2);
//! # Ok(())
//! # }
//! ```

use super::{
    Result,
    predicate::{Node, Predicate, Repeat, TokenSpec},
    token::category,
};

/// Matches one token of `category` whose text equals `value`.
#[must_use]
pub fn token(category: &str, value: &str) -> Predicate {
    Predicate::terminal(Node::Token(TokenSpec::new(category, Some(value))))
}

/// Matches one token of `category` with any text.
#[must_use]
pub fn kind(category: &str) -> Predicate {
    Predicate::terminal(Node::Token(TokenSpec::new(category, None)))
}

/// Shorthand for `token("KEYWORD", value)`.
#[must_use]
pub fn keyword(value: &str) -> Predicate {
    token(category::KEYWORD, value)
}

/// Matches exactly one arbitrary token.
#[must_use]
pub fn any() -> Predicate {
    Predicate::terminal(Node::Any)
}

/// Matches `items` consecutively.
pub fn sequence(items: impl IntoIterator<Item = Predicate>) -> Result<Predicate> {
    Predicate::new(Node::Sequence(items.into_iter().collect()))
}

/// Matches the first of `choices` that matches.
pub fn alternative(choices: impl IntoIterator<Item = Predicate>) -> Result<Predicate> {
    Predicate::new(Node::Alternative(choices.into_iter().collect()))
}

/// Matches `item` or nothing.
pub fn optional(item: Predicate) -> Result<Predicate> {
    Predicate::new(Node::Optional(item))
}

/// Matches `item` between `min` and `max` times, as many as possible.
/// `max: None` is unbounded.
pub fn repeat(item: Predicate, min: usize, max: Option<usize>) -> Result<Predicate> {
    Predicate::new(Node::Repeat {
        item,
        bounds: Repeat::new(min, max),
    })
}

/// Matches one token where `item` does not match.
pub fn not(item: Predicate) -> Result<Predicate> {
    Predicate::new(Node::Not(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, MAX_DEPTH};

    #[test]
    fn empty_composites_are_rejected() {
        assert_eq!(sequence(Vec::new()), Err(Error::EmptySequence));
        assert_eq!(alternative(Vec::new()), Err(Error::EmptyAlternative));
    }

    #[test]
    fn nesting_limit() {
        let mut predicate = any();
        for _ in 1..MAX_DEPTH {
            predicate = optional(predicate).unwrap();
        }
        assert_eq!(predicate.depth(), MAX_DEPTH);
        assert_eq!(
            optional(predicate),
            Err(Error::TooDeep {
                depth: MAX_DEPTH + 1
            })
        );
    }

    #[test]
    fn shared_subtrees() {
        let end = keyword("END");
        let tree = sequence([end.clone(), end.clone()]).unwrap();
        assert!(tree.children().all(|child| child.ptr_eq(&end)));
    }
}
