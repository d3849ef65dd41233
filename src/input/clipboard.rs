use super::InputError;
use arboard::Clipboard;

/// Reads plain text from the system clipboard.
pub fn read_text() -> Result<String, InputError> {
    let mut clipboard = Clipboard::new().map_err(|e| InputError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| InputError::Clipboard(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(InputError::EmptyClipboard);
    }
    Ok(text)
}
