use grammarfix::app::{App, AppEvent, CheckState, Notice, Screen};
use grammarfix::engine::{build_segments, mistake_count, Correction, MatchMode, Segment};
use grammarfix::provider::openai::{extract_content, parse_corrections};
use grammarfix::provider::{ProviderError, SuggestionProvider};
use grammarfix::session::{resolve_route, FileSessionStore, Route, SessionStore};
use tempfile::tempdir;

/// Replays a canned chat-completions body through the real parsing path.
struct CannedBody(&'static str);

impl SuggestionProvider for CannedBody {
    fn get_corrections(&self, _text: &str) -> Result<Vec<Correction>, ProviderError> {
        let content = extract_content(self.0)?;
        parse_corrections(&content)
    }
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(AppEvent::Char(c));
    }
}

#[test]
fn end_to_end_login_check_logout() {
    let dir = tempdir().unwrap();
    let session_path = dir.path().join("session.json");

    let body = r#"{"choices":[{"message":{"role":"assistant","content":"[{\"word\":\"go\",\"suggestion\":\"goes\"}]"}}]}"#;
    let mut app = App::new(
        Box::new(FileSessionStore::new(&session_path)),
        Some(Box::new(CannedBody(body))),
        MatchMode::SingleToken,
    );
    assert_eq!(app.screen(), Screen::Login);

    type_text(&mut app, "alice");
    app.handle_event(AppEvent::NextField);
    type_text(&mut app, "password");
    app.handle_event(AppEvent::Submit);
    assert_eq!(app.screen(), Screen::Home);
    assert_eq!(
        resolve_route(&FileSessionStore::new(&session_path)),
        Route::Home
    );

    type_text(&mut app, "He go home.");
    app.handle_event(AppEvent::Submit);
    assert!(app.get_render_state().busy);
    app.complete_check();

    let state = app.get_render_state();
    assert!(!state.busy);
    assert_eq!(
        state.output,
        vec![
            Segment::plain("He"),
            Segment::plain(" "),
            Segment::mistake("go"),
            Segment::plain(" "),
            Segment::plain("home"),
            Segment::plain("."),
        ]
    );
    assert_eq!(state.corrections, vec![Correction::new("go", "goes")]);

    app.handle_event(AppEvent::Logout);
    assert_eq!(app.screen(), Screen::Login);
    assert!(!FileSessionStore::new(&session_path).is_authenticated());
}

#[test]
fn unparsable_payload_yields_malformed_response_and_no_segments() {
    let dir = tempdir().unwrap();
    let session = FileSessionStore::new(dir.path().join("session.json"));
    session
        .set_authenticated(&grammarfix::session::Identity::new("bob"))
        .unwrap();

    let body = r#"{"choices":[{"message":{"content":"Sure! Here are the mistakes: go -> goes"}}]}"#;
    assert!(matches!(
        CannedBody(body).get_corrections("He go home."),
        Err(ProviderError::MalformedResponse(_))
    ));

    let mut app = App::new(
        Box::new(session),
        Some(Box::new(CannedBody(body))),
        MatchMode::SingleToken,
    );
    type_text(&mut app, "He go home.");
    app.check_now().unwrap();

    assert_eq!(*app.check_state(), CheckState::Idle);
    assert_eq!(
        app.notice(),
        Some(&Notice::new("AI Error", "Could not parse AI response"))
    );
    assert!(app.get_render_state().output.is_empty());
}

#[test]
fn multi_word_correction_is_not_highlighted_by_default() {
    let corrections = vec![Correction::new("she go", "she goes")];
    let segments = build_segments("she go home", &corrections);
    assert_eq!(mistake_count(&segments), 0);
}
