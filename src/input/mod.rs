use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Clipboard is empty")]
    EmptyClipboard,
}

pub mod clipboard;
