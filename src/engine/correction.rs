use serde::{Deserialize, Serialize};

/// A claim from the suggestion provider that `word` is mistaken.
///
/// `word` is the surface form as the provider reported it and may span
/// several words (`"she go"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub word: String,
    pub suggestion: String,
}

impl Correction {
    pub fn new(word: &str, suggestion: &str) -> Self {
        Self {
            word: word.to_string(),
            suggestion: suggestion.to_string(),
        }
    }
}
