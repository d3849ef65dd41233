//! Suggestion providers
//!
//! A provider takes the user's sentence and returns the words it considers
//! mistaken, each with a suggested replacement. The hosted implementation
//! lives in [`openai`]; tests substitute their own.

use crate::engine::Correction;
use thiserror::Error;

pub mod openai;

pub use openai::OpenAiProvider;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// The payload could not be parsed into a list of corrections.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// The call did not complete: network failure, auth, rate limit or any
    /// non-success status.
    #[error("provider transport error: {0}")]
    Transport(String),
}

pub trait SuggestionProvider {
    /// Returns corrections for `text`, in provider order.
    ///
    /// `text` is expected to be non-empty after trimming; callers validate.
    fn get_corrections(&self, text: &str) -> Result<Vec<Correction>, ProviderError>;
}
