use ratatui::style::{Color, Modifier, Style};

/// Midnight palette
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub mistake: Color,
    pub dimmed: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26
            surface: Color::Rgb(36, 40, 59),    // #24283B
            text: Color::Rgb(169, 177, 214),    // #A9B1D6
            mistake: Color::Rgb(247, 118, 142), // #F7768E
            dimmed: Color::Rgb(100, 110, 150),  // #646E96
            accent: Color::Rgb(122, 162, 247),  // #7AA2F7
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn surface() -> Color {
        Theme::current().surface
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn mistake() -> Color {
        Theme::current().mistake
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
}

pub fn normal_style() -> Style {
    Style::default().fg(colors::text())
}

/// Red and bold, like a teacher's pen.
pub fn mistake_style() -> Style {
    Style::default()
        .fg(colors::mistake())
        .add_modifier(Modifier::BOLD)
}
