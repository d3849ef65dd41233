use crate::engine::config::LogConfig;
use crate::engine::error::ConfigError;
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

pub const LOG_ENV: &str = "GRAMMARFIX_LOG";

/// Builds the filter from `GRAMMARFIX_LOG`, falling back to the configured level.
pub fn build_filter(level: &str) -> Result<EnvFilter, ConfigError> {
    match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => {
            EnvFilter::try_new(directives).map_err(|e| ConfigError::LogFilter(e.to_string()))
        }
        _ => EnvFilter::try_new(format!("grammarfix={},warn", level))
            .map_err(|e| ConfigError::LogFilter(e.to_string())),
    }
}

/// Routes logs to a file; the terminal belongs to the UI.
pub fn init_logging(config: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = build_filter(&config.level)?;

    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)?;

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    Registry::default().with(filter).with(fmt_layer).try_init()?;
    Ok(())
}

/// Stderr logging for the one-shot subcommands.
pub fn init_stderr_logging(config: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = build_filter(&config.level)?;
    let fmt_layer = fmt::layer().with_writer(io::stderr).with_target(false);
    Registry::default().with(filter).with(fmt_layer).try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_from_level() {
        std::env::remove_var(LOG_ENV);
        let filter = build_filter("debug").unwrap();
        assert!(filter.to_string().contains("grammarfix=debug"));
    }

    #[test]
    fn test_build_filter_rejects_garbage_level() {
        std::env::remove_var(LOG_ENV);
        assert!(matches!(
            build_filter("not a level!!"),
            Err(ConfigError::LogFilter(_))
        ));
    }
}
