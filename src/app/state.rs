use crate::engine::{Correction, Segment};
use crate::provider::ProviderError;
use crate::session::Identity;
use thiserror::Error;

/// Input rejected before any state changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter text to check.")]
    EmptyText,

    #[error("Please enter both username and password")]
    MissingCredentials,
}

/// Trimmed text to check, or `EmptyText` when there is nothing to send.
pub fn validate_text(text: &str) -> Result<&str, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    Ok(trimmed)
}

/// Both fields must be non-blank. The password is checked for presence only.
pub fn validate_credentials(username: &str, password: &str) -> Result<Identity, ValidationError> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(Identity::new(username))
}

/// Lifecycle of one grammar check. Replaced wholesale on every transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CheckState {
    #[default]
    Idle,
    /// Dispatched, waiting on the provider. Further submissions are ignored.
    Checking { text: String },
    Done {
        text: String,
        segments: Vec<Segment>,
        corrections: Vec<Correction>,
    },
}

impl CheckState {
    pub fn is_busy(&self) -> bool {
        matches!(self, CheckState::Checking { .. })
    }
}

/// A modal message for the user, dismissed by any key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<&ValidationError> for Notice {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::EmptyText => Notice::new("Input Required", &err.to_string()),
            ValidationError::MissingCredentials => Notice::new("Error", &err.to_string()),
        }
    }
}

impl From<&ProviderError> for Notice {
    fn from(err: &ProviderError) -> Self {
        match err {
            ProviderError::MalformedResponse(_) => {
                Notice::new("AI Error", "Could not parse AI response")
            }
            ProviderError::Transport(_) => Notice::new("Error", "Something went wrong. Try again."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_checking_is_busy() {
        assert!(!CheckState::Idle.is_busy());
        assert!(CheckState::Checking {
            text: "x".to_string()
        }
        .is_busy());
        assert!(!CheckState::Done {
            text: "x".to_string(),
            segments: vec![],
            corrections: vec![],
        }
        .is_busy());
    }

    #[test]
    fn test_validate_text_trims() {
        assert_eq!(validate_text("  He go \n"), Ok("He go"));
        assert_eq!(validate_text(" \t "), Err(ValidationError::EmptyText));
    }

    #[test]
    fn test_validate_credentials() {
        assert_eq!(validate_credentials(" amy ", "pw"), Ok(Identity::new("amy")));
        assert_eq!(
            validate_credentials("amy", "  "),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(
            validate_credentials("", "pw"),
            Err(ValidationError::MissingCredentials)
        );
    }

    #[test]
    fn test_validation_notices() {
        let notice = Notice::from(&ValidationError::EmptyText);
        assert_eq!(notice, Notice::new("Input Required", "Please enter text to check."));

        let notice = Notice::from(&ValidationError::MissingCredentials);
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.message, "Please enter both username and password");
    }

    #[test]
    fn test_provider_notices() {
        let notice = Notice::from(&ProviderError::MalformedResponse("bad".to_string()));
        assert_eq!(notice, Notice::new("AI Error", "Could not parse AI response"));

        let notice = Notice::from(&ProviderError::Transport("HTTP 500".to_string()));
        assert_eq!(notice, Notice::new("Error", "Something went wrong. Try again."));
    }
}
