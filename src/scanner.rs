//! Finding every non-overlapping occurrence of a predicate.

mod iter;

pub use self::iter::FindAll;

use super::{Lexeme, Matcher, Predicate};

/// Lazily yields the non-overlapping matches of `predicate` in `tokens`, in
/// increasing order of start offset, with default options.
///
/// A match is attempted at every offset; once one succeeds the scan resumes
/// after its last token, so no token is ever covered twice.
pub fn find_all<'t, T: Lexeme>(predicate: &Predicate, tokens: &'t [T]) -> FindAll<'t, T> {
    Matcher::new(predicate).find_all(tokens)
}
