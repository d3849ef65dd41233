use super::token::{Token, PUNCTUATION};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Words with contractions (`don't`, `it’s`) or a single punctuation mark.
    static ref TOKEN_PATTERN: Regex =
        Regex::new(&token_pattern()).expect("token pattern is a valid regex");
}

/// Word characters are ASCII letters, digits and `_`. Accented letters fall
/// outside the class and split a word, so `naïve` yields `na` and `ve`.
fn token_pattern() -> String {
    let marks: String = PUNCTUATION
        .iter()
        .map(|c| regex::escape(&c.to_string()))
        .collect();
    format!(r"[A-Za-z0-9_'’]+|[{}]", marks)
}

/// Splits `text` into word and punctuation tokens, left to right.
///
/// Every search resumes at the end of the previous token, so repeated words
/// resolve to strictly increasing offsets. Characters outside the token
/// grammar (whitespace, quotes, symbols) are skipped and later show up as gaps.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(found) = TOKEN_PATTERN.find_at(text, cursor) {
        tokens.push(Token::new(found.as_str(), found.start()));
        cursor = found.end();
    }

    tokens
}

/// Token texts only, lower-cased. Used to compare phrases token by token.
pub fn normalized_words(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .map(|token| token.text.to_lowercase())
        .collect()
}
