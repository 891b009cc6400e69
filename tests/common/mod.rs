#![allow(dead_code)]

use tokpred::Token;

/// Classifies whitespace-separated words the way a SQL tokenizer would.
pub fn lex(source: &str) -> Vec<Token> {
    source
        .split_whitespace()
        .map(|word| {
            let upper = word.to_ascii_uppercase();
            match upper.as_str() {
                "BEGIN" | "END" | "DECLARE" | "IF" | "THEN" | "ELSE" | "LOOP" | "CASE"
                | "WHEN" | "CREATE" | "OR" | "REPLACE" | "PROCEDURE" | "FUNCTION" | "AS"
                | "SELECT" | "FROM" => Token::keyword(word),
                "=" | "+" | "-" | "*" | "," | "(" | ")" => Token::symbol(word),
                ";" | "/" | "GO" => Token::delimiter(word),
                _ if word.chars().all(|c| c.is_ascii_digit()) => Token::number(word),
                _ => Token::ident(word),
            }
        })
        .collect()
}
