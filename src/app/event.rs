/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Char(char),
    Backspace,
    Newline,
    NextField,
    Submit,
    Logout,
    Paste,
    /// Text delivered by the terminal in one bracketed paste
    PasteText(String),
    Help,
    Quit,
    InvalidCommand(String),
    None,
}
