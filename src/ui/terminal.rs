use crate::app::{App, AppEvent, Screen};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::draw;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::debug;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Runs until the app reaches `Screen::Quit`.
    ///
    /// A submitted check is drawn in its busy state first and only then
    /// handed to the provider, which blocks this loop until it answers.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            self.render_frame(app)?;

            if app.screen() == Screen::Quit {
                return Ok(());
            }

            if app.check_state().is_busy() {
                app.complete_check();
                continue;
            }

            match event::read()? {
                Event::Key(key) => {
                    let app_event = key_to_event(key);
                    debug!(?app_event, "key event");
                    app.handle_event(app_event);
                }
                Event::Paste(text) => app.handle_event(AppEvent::PasteText(text)),
                _ => {}
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        self.terminal.draw(|frame| draw(frame, &render_state))?;
        Ok(())
    }
}

/// Maps a terminal key press onto an application event.
pub fn key_to_event(key: KeyEvent) -> AppEvent {
    if key.kind != KeyEventKind::Press {
        return AppEvent::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => AppEvent::Quit,
        KeyCode::Char('c') if ctrl => AppEvent::Quit,
        KeyCode::Char('o') if ctrl => AppEvent::Logout,
        KeyCode::Char('v') if ctrl => AppEvent::Paste,
        KeyCode::Char(_) if ctrl => AppEvent::None,
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => AppEvent::Newline,
        KeyCode::Enter => AppEvent::Submit,
        KeyCode::Tab | KeyCode::BackTab => AppEvent::NextField,
        KeyCode::Backspace => AppEvent::Backspace,
        KeyCode::Char(c) => AppEvent::Char(c),
        _ => AppEvent::None,
    }
}
