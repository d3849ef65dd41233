use super::form::{LoginField, LoginForm, TextField};
use super::mode::Screen;
use super::state::{CheckState, Notice};
use crate::engine::{Correction, Segment};

pub const CHECK_LABEL: &str = "Check Grammar";
pub const BUSY_LABEL: &str = "Checking...";

/// Snapshot of everything the UI draws
pub struct RenderState {
    pub screen: Screen,
    pub username: Option<String>,
    pub login_username: String,
    pub login_password_masked: String,
    pub login_focus: LoginField,
    pub input: String,
    pub input_cursor_column: usize,
    pub busy: bool,
    pub button_label: &'static str,
    /// Highlighted result, or the live input as one plain segment.
    pub output: Vec<Segment>,
    pub corrections: Vec<Correction>,
    pub notice: Option<Notice>,
}

impl RenderState {
    pub fn from_app_parts(
        screen: Screen,
        username: Option<&str>,
        login: &LoginForm,
        input: &TextField,
        check: &CheckState,
        notice: Option<&Notice>,
    ) -> Self {
        let (output, corrections) = match check {
            CheckState::Done {
                segments,
                corrections,
                ..
            } => (segments.clone(), corrections.clone()),
            _ if input.value().is_empty() => (vec![], vec![]),
            _ => (vec![Segment::plain(input.value())], vec![]),
        };

        let busy = check.is_busy();

        Self {
            screen,
            username: username.map(str::to_string),
            login_username: login.username.value().to_string(),
            login_password_masked: login.password.masked(),
            login_focus: login.focus,
            input: input.value().to_string(),
            input_cursor_column: input.cursor_column(),
            busy,
            button_label: if busy { BUSY_LABEL } else { CHECK_LABEL },
            output,
            corrections,
            notice: notice.cloned(),
        }
    }
}
