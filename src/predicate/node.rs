use super::{super::visitor::Visitor, Predicate, Repeat};
use crate::Lexeme;

/// One node of a predicate tree.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Node {
    /// Exactly one token of the given category (and value, if set).
    Token(TokenSpec),
    /// Exactly one token of any kind.
    Any,
    /// All items, consecutively, in order.
    Sequence(Vec<Predicate>),
    /// The first choice that matches (ordered choice).
    Alternative(Vec<Predicate>),
    /// The item, or nothing.
    Optional(Predicate),
    /// The item repeated greedily within `bounds`.
    Repeat { item: Predicate, bounds: Repeat },
    /// One token, provided the item does not match here.
    Not(Predicate),
}

impl Node {
    /// Dispatches to the `visit_*` method of `visitor` matching this variant.
    pub fn accept<A, V>(&self, visitor: &mut V, arg: A) -> V::Output
    where
        V: Visitor<A> + ?Sized,
    {
        match self {
            Node::Token(spec) => visitor.visit_token(spec, arg),
            Node::Any => visitor.visit_any(arg),
            Node::Sequence(items) => visitor.visit_sequence(items, arg),
            Node::Alternative(choices) => visitor.visit_alternative(choices, arg),
            Node::Optional(item) => visitor.visit_optional(item, arg),
            Node::Repeat { item, bounds } => visitor.visit_repeat(item, *bounds, arg),
            Node::Not(item) => visitor.visit_not(item, arg),
        }
    }

    /// Direct children, in declaration order.
    pub fn children(&self) -> impl Iterator<Item = &Predicate> {
        let (many, one): (&[Predicate], Option<&Predicate>) = match self {
            Node::Token(_) | Node::Any => (&[], None),
            Node::Sequence(items) | Node::Alternative(items) => (items.as_slice(), None),
            Node::Optional(item) | Node::Repeat { item, .. } | Node::Not(item) => (&[], Some(item)),
        };
        many.iter().chain(one)
    }

    /// Returns true for the variants that consume exactly one token.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Node::Token(_) | Node::Any | Node::Not(_))
    }
}

/// The expected shape of a single token.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TokenSpec {
    category: Box<str>,
    value: Option<Box<str>>,
}

impl TokenSpec {
    #[must_use]
    pub fn new(category: &str, value: Option<&str>) -> Self {
        Self {
            category: category.into(),
            value: value.map(Into::into),
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The expected token text; `None` accepts any text.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Checks `token` against this spec. Categories always compare exactly.
    pub fn matches<T: Lexeme + ?Sized>(&self, token: &T, ignore_case: bool) -> bool {
        if token.category() != &*self.category {
            return false;
        }
        match self.value() {
            None => true,
            Some(value) if ignore_case => value.eq_ignore_ascii_case(token.text()),
            Some(value) => value == token.text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Token;

    #[test]
    fn spec_without_value_accepts_any_text() {
        let spec = TokenSpec::new("KEYWORD", None);
        assert!(spec.matches(&Token::keyword("BEGIN"), false));
        assert!(spec.matches(&Token::keyword("end"), false));
        assert!(!spec.matches(&Token::ident("BEGIN"), false));
    }

    #[test]
    fn spec_value_case() {
        let spec = TokenSpec::new("KEYWORD", Some("BEGIN"));
        assert!(spec.matches(&Token::keyword("BEGIN"), false));
        assert!(!spec.matches(&Token::keyword("begin"), false));
        assert!(spec.matches(&Token::keyword("begin"), true));
        assert!(!spec.matches(&Token::keyword("BEGINS"), true));
    }
}
