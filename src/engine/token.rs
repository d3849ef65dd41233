/// A lexical unit of the checked sentence.
///
/// `start` and `end` are byte offsets into the source text, so
/// `&source[token.start..token.end] == token.text` always holds.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(text: &str, start: usize) -> Self {
        Self {
            text: text.to_string(),
            start,
            end: start + text.len(),
        }
    }
}

/// Punctuation characters that form single-character tokens.
pub const PUNCTUATION: [char; 5] = ['.', ',', '!', '?', ';'];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_end_offset_from_byte_length() {
        let token = Token::new("héllo", 4);
        assert_eq!(token.start, 4);
        assert_eq!(token.end, 10);
    }
}
