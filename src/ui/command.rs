//! Command parsing for the input box
//!
//! Input starting with `:` is a command rather than text to check:
//! - `:q` or `:quit` → Quit
//! - `:h` or `:help` → Help
//! - `:logout` → Logout
//! - `:paste` or `:p` → replace the input with the clipboard text

use crate::app::AppEvent;

/// Commands that can be typed into the input box
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Logout,
    Paste,
    Unknown(String),
}

pub fn is_command(input: &str) -> bool {
    input.trim_start().starts_with(':')
}

/// Parse input box text into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    match input.strip_prefix(':').map(str::trim) {
        Some("q") | Some("quit") => Command::Quit,
        Some("h") | Some("help") => Command::Help,
        Some("logout") => Command::Logout,
        Some("p") | Some("paste") => Command::Paste,
        _ => Command::Unknown(input.to_string()),
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Logout => AppEvent::Logout,
        Command::Paste => AppEvent::Paste,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
