//! Structural pattern matching over streams of lexical tokens.
//!
//! A [`Predicate`] is an immutable tree describing a multi-token construct
//! (a `BEGIN ... END` block, a vendor-specific statement prefix, ...). The
//! [`engine`] answers whether a predicate matches a token slice at a given
//! offset, and the [`scanner`] slides it across a whole slice to find every
//! non-overlapping occurrence.

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod analysis;
pub mod builder;
pub mod engine;
pub mod options;
pub mod predicate;
pub mod printer;
pub mod rules;
pub mod scanner;
pub mod token;
pub mod visitor;

pub use self::{
    analysis::{Element, LengthBounds},
    builder::{alternative, any, keyword, kind, not, optional, repeat, sequence, token},
    engine::{MatchResult, Matcher, match_at},
    options::MatchOptions,
    predicate::{Node, Predicate, Repeat, TokenSpec},
    rules::{RuleMatch, RuleSet, Scan},
    scanner::{FindAll, find_all},
    token::{Lexeme, Token},
    visitor::Visitor,
};

/// An invalid pattern, reported when a predicate is built or expanded.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A sequence was built without any items.
    #[error("sequence requires at least one item")]
    EmptySequence,

    /// An alternative was built without any choices.
    #[error("alternative requires at least one choice")]
    EmptyAlternative,

    /// The lower repetition bound exceeds the upper one.
    #[error("invalid repetition bounds ({min} > {max})")]
    RepetitionBounds { min: usize, max: usize },

    /// An unbounded repetition wraps an item that can match zero tokens.
    #[error("unbounded repetition of an item that can match zero tokens")]
    ZeroWidthRepetition,

    /// The predicate tree nests deeper than [`MAX_DEPTH`].
    #[error("predicate nesting too deep ({depth} > {MAX_DEPTH})")]
    TooDeep { depth: usize },

    /// Expansion reached a repetition without an upper bound.
    #[error("cannot expand a repetition without an upper bound")]
    UnboundedExpansion,

    /// Expansion produced more sequences, or met a longer repetition, than
    /// allowed.
    #[error("expansion exceeds the limit of {limit}")]
    ExpansionLimit { limit: usize },

    /// A rule with the same name is already registered.
    #[error("duplicate rule name '{0}'")]
    DuplicateRule(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Maximum nesting depth of a predicate tree.
pub const MAX_DEPTH: usize = 500;

/// Default cap on the number of sequences produced by [`Predicate::expand`].
pub const DEFAULT_EXPANSION_LIMIT: usize = 1024;
