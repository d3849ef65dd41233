use super::event::AppEvent;
use super::form::{LoginForm, TextField};
use super::mode::Screen;
use super::render_state::RenderState;
use super::state::{validate_credentials, validate_text, CheckState, Notice, ValidationError};
use crate::engine::{build_segments_with, mistake_count, MatchMode};
use crate::input::clipboard;
use crate::provider::SuggestionProvider;
use crate::session::{resolve_route, Identity, SessionStore};
use crate::ui::command::{command_to_app_event, is_command, parse_command};
use tracing::{debug, error, info, warn};

pub const HELP_TEXT: &str =
    "Enter: check grammar\nAlt+Enter: new line\n:paste  paste clipboard\n:logout  sign out\n:q  quit";

pub struct App {
    screen: Screen,
    login: LoginForm,
    input: TextField,
    check: CheckState,
    notice: Option<Notice>,
    user: Option<Identity>,
    matching: MatchMode,
    provider: Option<Box<dyn SuggestionProvider>>,
    session: Box<dyn SessionStore>,
}

impl App {
    /// Mounts the application: the session guard picks the first screen.
    pub fn new(
        session: Box<dyn SessionStore>,
        provider: Option<Box<dyn SuggestionProvider>>,
        matching: MatchMode,
    ) -> Self {
        let screen = Screen::from(resolve_route(session.as_ref()));
        let user = session.current();

        Self {
            screen,
            login: LoginForm::default(),
            input: TextField::new(),
            check: CheckState::Idle,
            notice: None,
            user,
            matching,
            provider,
            session,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn check_state(&self) -> &CheckState {
        &self.check
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn input(&self) -> &str {
        self.input.value()
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        if event == AppEvent::None {
            return;
        }

        if let AppEvent::PasteText(text) = event {
            self.notice = None;
            self.insert_pasted(&text);
            return;
        }

        // A pending notice swallows the next key, like a modal alert.
        if self.notice.is_some() {
            self.notice = None;
            return;
        }

        match event {
            AppEvent::Quit => self.screen = Screen::Quit,
            AppEvent::Help => self.notice = Some(Notice::new("Help", HELP_TEXT)),
            AppEvent::InvalidCommand(input) => {
                self.notice = Some(Notice::new("Unknown command", &input));
            }
            AppEvent::None => {}
            _ => match self.screen {
                Screen::Login => self.handle_login_event(event),
                Screen::Home => self.handle_home_event(event),
                Screen::Quit => {}
            },
        }
    }

    fn handle_login_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Char(c) => self.login.focused_mut().push(c),
            AppEvent::Backspace => self.login.focused_mut().pop(),
            AppEvent::NextField => self.login.next_field(),
            AppEvent::Submit => {
                if let Err(err) = self.submit_login() {
                    self.notice = Some(Notice::from(&err));
                }
            }
            _ => {}
        }
    }

    fn handle_home_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Char(c) => self.input.push(c),
            AppEvent::Newline => self.input.push('\n'),
            AppEvent::Backspace => self.input.pop(),
            AppEvent::Logout => self.logout(),
            AppEvent::Paste => self.paste(),
            AppEvent::Submit => self.submit_home(),
            _ => {}
        }
    }

    fn submit_home(&mut self) {
        if is_command(self.input.value()) {
            let event = command_to_app_event(parse_command(self.input.value()));
            self.input.clear();
            self.handle_event(event);
            return;
        }

        if let Err(err) = self.begin_check() {
            self.notice = Some(Notice::from(&err));
        }
    }

    /// Stores the session record and routes to the home screen.
    ///
    /// Any non-blank password is accepted; it is never stored.
    pub fn submit_login(&mut self) -> Result<(), ValidationError> {
        let identity =
            validate_credentials(self.login.username.value(), self.login.password.value())?;

        match self.session.set_authenticated(&identity) {
            Ok(()) => {
                info!(username = %identity.username, "logged in");
                self.user = Some(identity);
                self.login.reset();
                self.screen = Screen::Home;
            }
            Err(err) => {
                error!(error = %err, "failed to store session");
                self.notice = Some(Notice::new("Error", "Could not save your session."));
            }
        }
        Ok(())
    }

    pub fn logout(&mut self) {
        if let Err(err) = self.session.clear_authenticated() {
            error!(error = %err, "failed to clear session");
            self.notice = Some(Notice::new("Error", "Could not clear your session."));
            return;
        }

        info!("logged out");
        self.user = None;
        self.input.clear();
        self.check = CheckState::Idle;
        self.screen = Screen::Login;
    }

    /// Single-line login fields drop line breaks; the sentence keeps them.
    fn insert_pasted(&mut self, text: &str) {
        match self.screen {
            Screen::Login => {
                let line: String = text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
                self.login.focused_mut().push_str(&line);
            }
            Screen::Home => self.input.push_str(&text.replace("\r\n", "\n").replace('\r', "\n")),
            Screen::Quit => {}
        }
    }

    fn paste(&mut self) {
        match clipboard::read_text() {
            Ok(text) => self.input.set(&text),
            Err(err) => {
                warn!(error = %err, "clipboard unavailable");
                self.notice = Some(Notice::new("Clipboard", &err.to_string()));
            }
        }
    }

    /// Validates the input and moves to `Checking`.
    ///
    /// Returns `Ok(false)` without touching state when a check is already in
    /// flight.
    pub fn begin_check(&mut self) -> Result<bool, ValidationError> {
        if self.check.is_busy() {
            debug!("check already in flight; ignoring submit");
            return Ok(false);
        }
        validate_text(self.input.value())?;

        self.check = CheckState::Checking {
            text: self.input.value().to_string(),
        };
        Ok(true)
    }

    /// Runs the pending check to completion. No-op unless `Checking`.
    pub fn complete_check(&mut self) {
        let text = match &self.check {
            CheckState::Checking { text } => text.clone(),
            _ => return,
        };

        let Some(provider) = self.provider.as_ref() else {
            warn!("grammar check requested without a configured provider");
            self.fail_check(Notice::new(
                "Error",
                "No API key configured. Set OPENAI_API_KEY and restart.",
            ));
            return;
        };

        info!(chars = text.chars().count(), "grammar check dispatched");
        match provider.get_corrections(text.trim()) {
            Ok(corrections) => {
                let segments = build_segments_with(&text, &corrections, self.matching);
                info!(
                    corrections = corrections.len(),
                    mistakes = mistake_count(&segments),
                    "grammar check completed"
                );
                self.check = CheckState::Done {
                    text,
                    segments,
                    corrections,
                };
            }
            Err(err) => {
                error!(error = %err, "grammar check failed");
                self.fail_check(Notice::from(&err));
            }
        }
    }

    /// `begin_check` followed by `complete_check`.
    pub fn check_now(&mut self) -> Result<(), ValidationError> {
        if self.begin_check()? {
            self.complete_check();
        }
        Ok(())
    }

    fn fail_check(&mut self, notice: Notice) {
        self.input.clear();
        self.check = CheckState::Idle;
        self.notice = Some(notice);
    }

    pub fn get_render_state(&self) -> RenderState {
        RenderState::from_app_parts(
            self.screen,
            self.username(),
            &self.login,
            &self.input,
            &self.check,
            self.notice.as_ref(),
        )
    }
}
