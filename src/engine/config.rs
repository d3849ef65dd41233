// Configuration for the grammar checker: provider access, session storage,
// correction matching and logging. Defaults mirror the hosted chat API.

use super::highlight::MatchMode;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Suggestion provider access. The API key is injected here and nowhere else.
#[derive(Clone, PartialEq)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Where the "current user" record lives.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub path: PathBuf,
    /// Keep the record in memory only; nothing touches disk.
    pub ephemeral: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_data_dir().join("session.json"),
            ephemeral: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub path: PathBuf,
    /// Fallback level when `GRAMMARFIX_LOG` is unset (default "info")
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: default_data_dir().join("grammarfix.log"),
            level: "info".to_string(),
        }
    }
}

/// Master configuration combining all settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub session: SessionConfig,
    pub matching: MatchMode,
    pub log: LogConfig,
}

/// `$HOME/.grammarfix`, or `./.grammarfix` when no home directory is set.
pub fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".grammarfix")
}
