use crate::keymap::Action;

/// Capitalization hint carried by a text field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Capitalization {
    #[default]
    None,
    Words,
}

/// Declarative keyboard hints for a text field.
///
/// A terminal has no soft keyboard, so `capitalization` and `auto_correct`
/// never rewrite what the user typed. `single_line` is enforced: line breaks
/// in pasted text are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardOptions {
    pub capitalization: Capitalization,
    pub auto_correct: bool,
    pub single_line: bool,
}

impl Default for KeyboardOptions {
    fn default() -> Self {
        Self {
            capitalization: Capitalization::None,
            auto_correct: true,
            single_line: false,
        }
    }
}

impl KeyboardOptions {
    /// Options for a name field: single line, capitalized words, no auto-correct.
    pub fn name_field() -> Self {
        Self {
            capitalization: Capitalization::Words,
            auto_correct: false,
            single_line: true,
        }
    }
}

/// A text input field with encapsulated state.
///
/// Wraps the text, the cursor position (in characters) and the keyboard hints
/// of the field.
///
/// # Example
/// ```
/// use welcome_hello::utils::text_input::TextInput;
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
    options: KeyboardOptions,
}

impl TextInput {
    /// Create a new empty text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            options: KeyboardOptions::default(),
        }
    }

    /// Replace the keyboard hints.
    pub fn with_options(mut self, options: KeyboardOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the current text as a string slice.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the input, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Get the current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn options(&self) -> KeyboardOptions {
        self.options
    }

    /// Check if the text is empty. Whitespace counts as content.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the text and move cursor to end. The text is stored verbatim.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        handle_char_insertion(&mut self.text, &mut self.cursor, c);
    }

    /// Insert a pasted string at the cursor position.
    ///
    /// Line breaks are dropped for single-line fields; other control
    /// characters are always dropped.
    pub fn insert_str(&mut self, pasted: &str) {
        for c in pasted.chars() {
            if c == '\n' && !self.options.single_line {
                insert_at_cursor(&mut self.text, &mut self.cursor, c);
                continue;
            }
            self.insert_char(c);
        }
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        handle_backspace(&mut self.text, &mut self.cursor);
    }

    /// Delete the character at the cursor position.
    pub fn delete(&mut self) {
        handle_delete(&mut self.text, &mut self.cursor);
    }

    /// Move the cursor left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor right.
    pub fn move_right(&mut self) {
        let char_count = self.text.chars().count();
        if self.cursor < char_count {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Handle an action from the keymap.
    ///
    /// Returns true if the action was handled.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => {
                self.move_left();
                true
            }
            Action::MoveRight => {
                self.move_right();
                true
            }
            Action::Home => {
                self.move_home();
                true
            }
            Action::End => {
                self.move_end();
                true
            }
            Action::Backspace => {
                self.backspace();
                true
            }
            Action::DeleteChar => {
                self.delete();
                true
            }
            _ => false,
        }
    }
}

fn insert_at_cursor(text: &mut String, cursor_pos: &mut usize, c: char) {
    let byte_index = text
        .char_indices()
        .map(|(i, _)| i)
        .nth(*cursor_pos)
        .unwrap_or(text.len());
    text.insert(byte_index, c);
    *cursor_pos = (*cursor_pos + 1).min(text.chars().count());
}

/// Insert a single typed character, ignoring control characters.
fn handle_char_insertion(text: &mut String, cursor_pos: &mut usize, c: char) {
    if !c.is_control() {
        insert_at_cursor(text, cursor_pos, c);
    }
}

/// Handle character deletion (backspace)
fn handle_backspace(text: &mut String, cursor_pos: &mut usize) {
    if *cursor_pos > 0 {
        let before_cursor = text.chars().take(*cursor_pos - 1);
        let after_cursor = text.chars().skip(*cursor_pos);
        *text = before_cursor.chain(after_cursor).collect();
        *cursor_pos -= 1;
    }
}

/// Handle character deletion (delete key)
fn handle_delete(text: &mut String, cursor_pos: &mut usize) {
    let char_count = text.chars().count();
    if *cursor_pos < char_count {
        let before_cursor = text.chars().take(*cursor_pos);
        let after_cursor = text.chars().skip(*cursor_pos + 1);
        *text = before_cursor.chain(after_cursor).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_insertion() {
        let mut text = String::from("hello");
        let mut cursor = 2;

        handle_char_insertion(&mut text, &mut cursor, 'x');
        assert_eq!(text, "hexllo");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn test_control_chars_rejected() {
        let mut text = String::from("ab");
        let mut cursor = 2;

        handle_char_insertion(&mut text, &mut cursor, '\n');
        handle_char_insertion(&mut text, &mut cursor, '\t');
        assert_eq!(text, "ab");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_non_ascii_insertion() {
        let mut input = TextInput::new();
        for c in "José Ñúñez".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text(), "José Ñúñez");
        assert_eq!(input.cursor(), 10);
    }

    #[test]
    fn test_backspace() {
        let mut text = String::from("hello");
        let mut cursor = 3;

        handle_backspace(&mut text, &mut cursor);
        assert_eq!(text, "helo");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_backspace_at_start() {
        let mut text = String::from("hello");
        let mut cursor = 0;

        handle_backspace(&mut text, &mut cursor);
        assert_eq!(text, "hello");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_delete_at_end() {
        let mut text = String::from("hello");
        let mut cursor = 5;

        handle_delete(&mut text, &mut cursor);
        assert_eq!(text, "hello");
        assert_eq!(cursor, 5);
    }

    #[test]
    fn test_unicode_handling() {
        let mut text = String::from("héllo");
        let mut cursor = 2;

        handle_char_insertion(&mut text, &mut cursor, 'x');
        assert_eq!(text, "héxllo");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn test_text_input_with_text() {
        let input = TextInput::with_text("hello");
        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor(), 5);
        assert!(!input.is_empty());
    }

    #[test]
    fn test_whitespace_is_content() {
        let input = TextInput::with_text("   ");
        assert!(!input.is_empty());
        assert_eq!(input.text(), "   ");
    }

    #[test]
    fn test_text_input_cursor_movement() {
        let mut input = TextInput::with_text("hello");

        input.move_home();
        assert_eq!(input.cursor(), 0);

        input.move_left();
        assert_eq!(input.cursor(), 0);

        input.move_right();
        assert_eq!(input.cursor(), 1);

        input.move_end();
        assert_eq!(input.cursor(), 5);

        input.move_right();
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_text_input_handle_action() {
        let mut input = TextInput::with_text("hello");

        assert!(input.handle_action(Action::Home));
        assert_eq!(input.cursor(), 0);

        assert!(input.handle_action(Action::MoveRight));
        assert!(input.handle_action(Action::DeleteChar));
        assert_eq!(input.text(), "hllo");

        assert!(!input.handle_action(Action::Confirm));
        assert!(!input.handle_action(Action::Quit));
    }

    #[test]
    fn test_paste_single_line_drops_line_breaks() {
        let mut input = TextInput::new().with_options(KeyboardOptions::name_field());
        input.insert_str("Ana\r\nMaria");
        assert_eq!(input.text(), "AnaMaria");
        assert_eq!(input.cursor(), 8);
    }

    #[test]
    fn test_paste_multi_line_keeps_line_breaks() {
        let mut input = TextInput::new();
        input.insert_str("a\nb");
        assert_eq!(input.text(), "a\nb");
    }

    #[test]
    fn test_name_field_options() {
        let options = KeyboardOptions::name_field();
        assert_eq!(options.capitalization, Capitalization::Words);
        assert!(!options.auto_correct);
        assert!(options.single_line);
    }

    #[test]
    fn test_hints_do_not_rewrite_text() {
        let mut input = TextInput::new().with_options(KeyboardOptions::name_field());
        input.insert_str("ana maría");
        assert_eq!(input.text(), "ana maría");
    }
}
