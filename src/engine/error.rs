use crate::app::{Notice, ValidationError};
use crate::session::SessionError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no API key configured; pass --api-key or set OPENAI_API_KEY")]
    MissingApiKey,

    #[error("invalid log filter: {0}")]
    LogFilter(String),

    #[error("could not build HTTP client: {0}")]
    HttpClient(String),
}

/// Top-level error for the binary and the non-interactive commands.
#[derive(Error, Debug)]
pub enum GrammarFixError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    /// A failed provider call, carrying the same text the UI shows.
    #[error("{}: {}", .0.title, .0.message)]
    CheckFailed(Notice),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("not logged in; run `grammarfix login` first")]
    NotAuthenticated,
}
