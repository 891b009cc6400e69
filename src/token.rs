//! Tokens consumed by the matcher.
//!
//! The engine only ever asks a token for its category and its text, so any
//! tokenizer output can be matched by implementing [`Lexeme`].

use std::fmt;

/// Well-known token categories.
pub mod category {
    pub const KEYWORD: &str = "KEYWORD";
    pub const IDENTIFIER: &str = "IDENTIFIER";
    pub const NUMBER: &str = "NUMBER";
    pub const STRING: &str = "STRING";
    pub const SYMBOL: &str = "SYMBOL";
    pub const DELIMITER: &str = "DELIMITER";
}

/// A classified lexical unit.
pub trait Lexeme {
    /// The token kind, e.g. `KEYWORD`.
    fn category(&self) -> &str;

    /// The source text of the token.
    fn text(&self) -> &str;
}

impl<T: Lexeme + ?Sized> Lexeme for &T {
    #[inline]
    fn category(&self) -> &str {
        (**self).category()
    }

    #[inline]
    fn text(&self) -> &str {
        (**self).text()
    }
}

/// An owned token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    category: String,
    text: String,
}

impl Token {
    #[must_use]
    pub fn new(category: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn keyword(text: impl Into<String>) -> Self {
        Self::new(category::KEYWORD, text)
    }

    #[must_use]
    pub fn ident(text: impl Into<String>) -> Self {
        Self::new(category::IDENTIFIER, text)
    }

    #[must_use]
    pub fn number(text: impl Into<String>) -> Self {
        Self::new(category::NUMBER, text)
    }

    #[must_use]
    pub fn symbol(text: impl Into<String>) -> Self {
        Self::new(category::SYMBOL, text)
    }

    #[must_use]
    pub fn delimiter(text: impl Into<String>) -> Self {
        Self::new(category::DELIMITER, text)
    }
}

impl Lexeme for Token {
    #[inline]
    fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_category() {
        assert_eq!(Token::keyword("BEGIN").category(), category::KEYWORD);
        assert_eq!(Token::ident("x").category(), category::IDENTIFIER);
        assert_eq!(Token::number("1").category(), category::NUMBER);
        assert_eq!(Token::symbol("=").category(), category::SYMBOL);
        assert_eq!(Token::delimiter(";").category(), category::DELIMITER);
    }

    fn describe(lexeme: impl Lexeme) -> String {
        format!("{}:{}", lexeme.category(), lexeme.text())
    }

    #[test]
    fn references_are_lexemes() {
        let token = Token::keyword("END");
        assert_eq!(describe(&token), "KEYWORD:END");
        assert_eq!(token.to_string(), "END");
    }
}
