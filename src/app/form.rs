use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Single editable text buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn push_str(&mut self, text: &str) {
        self.value.push_str(text);
    }

    pub fn set(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Removes the last grapheme cluster, so `é` written as `e` + combining
    /// accent disappears in one keystroke.
    pub fn pop(&mut self) {
        if let Some((offset, _)) = self.value.grapheme_indices(true).next_back() {
            self.value.truncate(offset);
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Display width of the last line, for cursor placement.
    pub fn cursor_column(&self) -> usize {
        self.value
            .rsplit('\n')
            .next()
            .map(|line| line.width())
            .unwrap_or(0)
    }

    /// One `*` per grapheme.
    pub fn masked(&self) -> String {
        "*".repeat(self.value.graphemes(true).count())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: TextField,
    pub password: TextField,
    pub focus: LoginField,
}

impl LoginForm {
    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
