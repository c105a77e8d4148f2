use crate::keymap::Action;
use crossterm::event::KeyCode;

/// Character used to mask secret input (passwords).
pub const MASK_CHAR: char = '•';

/// A single-line text buffer with a character-indexed cursor.
///
/// Form fields keep one of these per input; the cursor is counted in
/// characters, never bytes, so multi-byte input is safe to edit.
///
/// # Example
/// ```
/// use portal::utils::text_input::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('h');
/// input.insert_char('i');
/// assert_eq!(input.text(), "hi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input holding `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_text(text);
        input
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole value and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// The value with every character replaced by [`MASK_CHAR`].
    pub fn masked(&self) -> String {
        std::iter::repeat(MASK_CHAR).take(self.len()).collect()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor. Control characters are ignored.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Apply an editing action from the keymap.
    ///
    /// Returns true if the action was an editing action.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    /// Apply a raw key. Returns true if the key edited the buffer or moved the cursor.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Whether a mapped action should still fire while an input has focus.
    ///
    /// Everything else (e.g. `Quit` bound to `q`) is suppressed so the key
    /// types into the field instead.
    pub fn is_action_allowed_when_focused(action: &Action) -> bool {
        matches!(
            action,
            Action::Cancel
                | Action::Confirm
                | Action::NextField
                | Action::PrevField
                | Action::MoveLeft
                | Action::MoveRight
                | Action::Home
                | Action::End
                | Action::Backspace
                | Action::DeleteChar
                | Action::GoHome
                | Action::GoRegister
                | Action::GoLogin
                | Action::Logout
                | Action::ForceQuit
        )
    }
}
