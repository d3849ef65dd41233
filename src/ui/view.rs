use crate::app::form::LoginField;
use crate::app::{Notice, RenderState, Screen};
use crate::engine::{Correction, Segment};
use crate::ui::theme::{colors, mistake_style, normal_style};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Turns segments into styled lines, splitting on embedded newlines.
pub fn segments_to_lines(segments: &[Segment]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for segment in segments {
        let style = if segment.is_mistake {
            mistake_style()
        } else {
            normal_style()
        };

        let mut parts = segment.text.split('\n').peekable();
        while let Some(part) = parts.next() {
            if !part.is_empty() {
                current.push(Span::styled(part.to_string(), style));
            }
            if parts.peek().is_some() {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

pub fn render_header(username: Option<&str>) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(
        "GrammarFix",
        Style::default()
            .fg(colors::text())
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(name) = username {
        spans.push(Span::styled(
            format!("  {}", name),
            Style::default().fg(colors::dimmed()),
        ));
    }
    spans.push(Span::styled(
        "   :logout  :help  :q",
        Style::default().fg(colors::mistake()),
    ));

    Paragraph::new(Line::from(spans)).style(Style::default().bg(colors::background()))
}

pub fn render_output(segments: &[Segment]) -> Paragraph<'static> {
    Paragraph::new(segments_to_lines(segments))
        .wrap(Wrap { trim: false })
        .block(panel("Live Output", false))
}

pub fn render_corrections(corrections: &[Correction]) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = corrections
        .iter()
        .map(|c| {
            Line::from(vec![
                Span::styled(c.word.clone(), mistake_style()),
                Span::styled(" → ", Style::default().fg(colors::dimmed())),
                Span::styled(c.suggestion.clone(), normal_style()),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel("Suggestions", false))
}

pub fn render_input(input: &str) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = if input.is_empty() {
        vec![Line::styled(
            "Type something...",
            Style::default().fg(colors::dimmed()),
        )]
    } else {
        input
            .split('\n')
            .map(|line| Line::styled(line.to_string(), normal_style()))
            .collect()
    };

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel("Enter Text", true))
}

pub fn render_button(label: &str, busy: bool) -> Paragraph<'static> {
    let fg = if busy { colors::dimmed() } else { colors::background() };
    let bg = if busy { colors::surface() } else { colors::text() };
    Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD))
}

fn panel(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { colors::accent() } else { colors::dimmed() };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors::background()))
}

fn render_field(label: &'static str, value: &str, focused: bool) -> Paragraph<'static> {
    let line = if value.is_empty() {
        Line::styled(label, Style::default().fg(colors::dimmed()))
    } else {
        Line::styled(value.to_string(), normal_style())
    };
    Paragraph::new(line).block(panel(label, focused))
}

/// Rectangle of `width` x `height` centred in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn render_notice(frame: &mut Frame, notice: &Notice) {
    let lines = notice.message.lines().count() as u16;
    let area = centered_rect(50, lines + 4, frame.area());

    frame.render_widget(Clear, area);
    let body = Paragraph::new(notice.message.clone())
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .style(normal_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(notice.title.clone())
                .title_bottom(Line::from("any key").alignment(Alignment::Right))
                .border_style(Style::default().fg(colors::mistake()))
                .style(Style::default().bg(colors::surface())),
        );
    frame.render_widget(body, area);
}

fn draw_login(frame: &mut Frame, state: &RenderState) {
    let area = centered_rect(44, 12, frame.area());
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new("GrammarFix App")
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::text()).add_modifier(Modifier::BOLD));
    frame.render_widget(title, rows[0]);

    let username_focused = state.login_focus == LoginField::Username;
    frame.render_widget(
        render_field("Username", &state.login_username, username_focused),
        rows[1],
    );
    frame.render_widget(
        render_field("Password", &state.login_password_masked, !username_focused),
        rows[2],
    );
    frame.render_widget(render_button("Login", false), rows[4]);

    let (row, value) = if username_focused {
        (rows[1], &state.login_username)
    } else {
        (rows[2], &state.login_password_masked)
    };
    let column = unicode_width::UnicodeWidthStr::width(value.as_str());
    frame.set_cursor_position((cursor_x(row, column), row.y.saturating_add(1)));
}

/// Cursor column inside a bordered box, pinned to the last inner cell when
/// the text is wider than the box.
fn cursor_x(area: Rect, column: usize) -> u16 {
    let last_inner = area.width.saturating_sub(3);
    let column = u16::try_from(column).unwrap_or(u16::MAX).min(last_inner);
    area.x.saturating_add(1).saturating_add(column)
}

fn draw_home(frame: &mut Frame, state: &RenderState) {
    let suggestions_height = if state.corrections.is_empty() {
        0
    } else {
        state.corrections.len() as u16 + 2
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(suggestions_height),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(render_header(state.username.as_deref()), rows[0]);
    frame.render_widget(render_output(&state.output), rows[1]);
    if suggestions_height > 0 {
        frame.render_widget(render_corrections(&state.corrections), rows[2]);
    }
    frame.render_widget(render_input(&state.input), rows[3]);
    frame.render_widget(render_button(state.button_label, state.busy), rows[4]);

    let line_count = u16::try_from(state.input.split('\n').count().max(1)).unwrap_or(u16::MAX);
    let input_area = rows[3];
    frame.set_cursor_position((
        cursor_x(input_area, state.input_cursor_column),
        input_area
            .y
            .saturating_add(line_count.min(input_area.height.saturating_sub(2))),
    ));
}

/// Draws a full frame for the current screen.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        frame.area(),
    );

    match state.screen {
        Screen::Login => draw_login(frame, state),
        Screen::Home => draw_home(frame, state),
        Screen::Quit => {}
    }

    if let Some(notice) = &state.notice {
        render_notice(frame, notice);
    }
}
