//! Command-line surface: flags, configuration assembly and the one-shot
//! subcommands. Without a subcommand the interactive terminal UI starts.

use crate::app::{validate_credentials, validate_text, App, Notice};
use crate::engine::config::{
    Config, LogConfig, ProviderConfig, SessionConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECS,
};
use crate::engine::error::GrammarFixError;
use crate::engine::{build_segments_with, mistake_count, Correction, MatchMode, Segment};
use crate::provider::{OpenAiProvider, SuggestionProvider};
use crate::session::{FileSessionStore, MemorySessionStore, SessionStore};
use crate::ui::TuiManager;
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use serde::Serialize;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "grammarfix", version, about = "Highlight grammar mistakes in a sentence")]
pub struct Cli {
    /// API key for the chat-completions endpoint
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Session record location (default: ~/.grammarfix/session.json)
    #[arg(long)]
    pub session_file: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Also highlight multi-word corrections ("she go") by matching runs of
    /// consecutive words. Off by default: only exact single-word matches are
    /// highlighted.
    #[arg(long)]
    pub phrase_matching: bool,

    /// Log file for the interactive UI (default: ~/.grammarfix/grammarfix.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level used when GRAMMARFIX_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Start the interactive UI (default)
    Tui,
    /// Check one sentence and print the highlighted result
    Check {
        text: String,
        /// Print segments and corrections as JSON
        #[arg(long)]
        json: bool,
    },
    /// Store a local session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Remove the local session
    Logout,
    /// Show who is logged in
    Status,
}

impl Cli {
    pub fn to_config(&self) -> Config {
        let session_defaults = SessionConfig::default();
        let log_defaults = LogConfig::default();

        Config {
            provider: ProviderConfig {
                api_key: self.api_key.clone(),
                endpoint: self.endpoint.clone(),
                model: self.model.clone(),
                timeout: Duration::from_secs(self.timeout_secs),
            },
            session: SessionConfig {
                path: self.session_file.clone().unwrap_or(session_defaults.path),
                ephemeral: self.ephemeral,
            },
            matching: if self.phrase_matching {
                MatchMode::Phrase
            } else {
                MatchMode::SingleToken
            },
            log: LogConfig {
                path: self.log_file.clone().unwrap_or(log_defaults.path),
                level: self.log_level.clone(),
            },
        }
    }
}

pub fn build_session_store(config: &SessionConfig) -> Box<dyn SessionStore> {
    if config.ephemeral {
        Box::new(MemorySessionStore::new())
    } else {
        Box::new(FileSessionStore::new(&config.path))
    }
}

pub fn run(command: CliCommand, config: &Config) -> Result<(), GrammarFixError> {
    match command {
        CliCommand::Tui => run_tui(config),
        CliCommand::Check { text, json } => run_check(&text, json, config),
        CliCommand::Login { username, password } => {
            let identity = validate_credentials(&username, &password)?;
            build_session_store(&config.session).set_authenticated(&identity)?;
            println!("Logged in as {}", identity.username);
            Ok(())
        }
        CliCommand::Logout => {
            build_session_store(&config.session).clear_authenticated()?;
            println!("Logged out");
            Ok(())
        }
        CliCommand::Status => {
            match build_session_store(&config.session).current() {
                Some(identity) => println!("Logged in as {}", identity.username),
                None => println!("Not logged in"),
            }
            Ok(())
        }
    }
}

fn run_tui(config: &Config) -> Result<(), GrammarFixError> {
    let provider: Option<Box<dyn SuggestionProvider>> =
        match OpenAiProvider::new(&config.provider) {
            Ok(provider) => Some(Box::new(provider)),
            Err(err) => {
                warn!(error = %err, "grammar checks disabled");
                None
            }
        };

    let mut app = App::new(
        build_session_store(&config.session),
        provider,
        config.matching,
    );

    info!(screen = ?app.screen(), "starting terminal UI");
    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;
    Ok(())
}

#[derive(Serialize)]
struct CheckReport<'a> {
    text: &'a str,
    segments: &'a [Segment],
    corrections: &'a [Correction],
}

fn run_check(text: &str, json: bool, config: &Config) -> Result<(), GrammarFixError> {
    if !build_session_store(&config.session).is_authenticated() {
        return Err(GrammarFixError::NotAuthenticated);
    }
    validate_text(text)?;

    let provider = OpenAiProvider::new(&config.provider)?;
    let (segments, corrections) = check_text(&provider, text, config.matching)?;

    if json {
        let report = CheckReport {
            text,
            segments: &segments,
            corrections: &corrections,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if std::io::stdout().is_terminal() {
        println!("{}", render_ansi(&segments));
    } else {
        println!("{}", render_plain(&segments));
    }
    for correction in &corrections {
        println!("  {} -> {}", correction.word, correction.suggestion);
    }
    Ok(())
}

/// Runs one check. Provider failures carry the same notice text as the UI.
pub fn check_text(
    provider: &dyn SuggestionProvider,
    text: &str,
    matching: MatchMode,
) -> Result<(Vec<Segment>, Vec<Correction>), GrammarFixError> {
    let corrections = provider.get_corrections(text.trim()).map_err(|err| {
        warn!(error = %err, "grammar check failed");
        GrammarFixError::CheckFailed(Notice::from(&err))
    })?;
    let segments = build_segments_with(text, &corrections, matching);
    info!(
        corrections = corrections.len(),
        mistakes = mistake_count(&segments),
        "grammar check completed"
    );
    Ok((segments, corrections))
}

/// Mistakes in bold red.
pub fn render_ansi(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.is_mistake {
                s.text.clone().red().bold().to_string()
            } else {
                s.text.clone()
            }
        })
        .collect()
}

/// Mistakes wrapped in brackets, for pipes and files.
pub fn render_plain(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.is_mistake {
                format!("[{}]", s.text)
            } else {
                s.text.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;

    struct FixedReply(Result<Vec<Correction>, ProviderError>);

    impl SuggestionProvider for FixedReply {
        fn get_corrections(&self, _text: &str) -> Result<Vec<Correction>, ProviderError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_check_text_highlights_corrections() {
        let provider = FixedReply(Ok(vec![Correction::new("go", "goes")]));
        let (segments, corrections) =
            check_text(&provider, "He go home.", MatchMode::SingleToken).unwrap();
        assert_eq!(render_plain(&segments), "He [go] home.");
        assert_eq!(corrections.len(), 1);
    }

    #[test]
    fn test_check_text_malformed_reply_uses_notice_text() {
        let provider = FixedReply(Err(ProviderError::MalformedResponse("eof".to_string())));
        let err = check_text(&provider, "He go home.", MatchMode::SingleToken).unwrap_err();
        assert_eq!(err.to_string(), "AI Error: Could not parse AI response");
    }

    #[test]
    fn test_check_text_transport_failure_uses_notice_text() {
        let provider = FixedReply(Err(ProviderError::Transport("HTTP 500".to_string())));
        let err = check_text(&provider, "He go home.", MatchMode::SingleToken).unwrap_err();
        assert_eq!(err.to_string(), "Error: Something went wrong. Try again.");
    }

    #[test]
    fn test_defaults_produce_single_token_matching() {
        let cli = Cli::parse_from(["grammarfix", "status"]);
        let config = cli.to_config();
        assert_eq!(config.matching, MatchMode::SingleToken);
        assert_eq!(config.provider.model, DEFAULT_MODEL);
        assert_eq!(cli.command, Some(CliCommand::Status));
    }

    #[test]
    fn test_flags_flow_into_config() {
        let cli = Cli::parse_from([
            "grammarfix",
            "--api-key",
            "sk-test",
            "--model",
            "gpt-4o-mini",
            "--timeout-secs",
            "5",
            "--session-file",
            "/tmp/gf/session.json",
            "--phrase-matching",
            "--ephemeral",
        ]);
        let config = cli.to_config();
        assert_eq!(config.provider.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.provider.model, "gpt-4o-mini");
        assert_eq!(config.provider.timeout, Duration::from_secs(5));
        assert_eq!(config.session.path, PathBuf::from("/tmp/gf/session.json"));
        assert!(config.session.ephemeral);
        assert_eq!(config.matching, MatchMode::Phrase);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_check_subcommand_parses() {
        let cli = Cli::parse_from(["grammarfix", "check", "He go home.", "--json"]);
        assert_eq!(
            cli.command,
            Some(CliCommand::Check {
                text: "He go home.".to_string(),
                json: true
            })
        );
    }

    #[test]
    fn test_render_plain_brackets_mistakes() {
        let segments = vec![
            Segment::plain("He"),
            Segment::plain(" "),
            Segment::mistake("go"),
            Segment::plain("."),
        ];
        assert_eq!(render_plain(&segments), "He [go].");
    }

    #[test]
    fn test_render_ansi_keeps_plain_text_untouched() {
        let segments = vec![Segment::plain("He "), Segment::mistake("go")];
        let rendered = render_ansi(&segments);
        assert!(rendered.starts_with("He "));
        assert!(rendered.contains("go"));
        assert!(rendered.contains('\u{1b}'));
    }

    #[test]
    fn test_check_requires_session() {
        let cli = Cli::parse_from(["grammarfix", "--ephemeral", "check", "He go"]);
        let config = cli.to_config();
        let result = run(
            CliCommand::Check {
                text: "He go".to_string(),
                json: false,
            },
            &config,
        );
        assert!(matches!(result, Err(GrammarFixError::NotAuthenticated)));
    }

    #[test]
    fn test_login_rejects_blank_password() {
        let cli = Cli::parse_from(["grammarfix", "--ephemeral"]);
        let result = run(
            CliCommand::Login {
                username: "amy".to_string(),
                password: " ".to_string(),
            },
            &cli.to_config(),
        );
        assert!(matches!(result, Err(GrammarFixError::Validation(_))));
    }
}
