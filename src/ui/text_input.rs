//! Single-line text field with a character limit

use macroquad::prelude::*;

use super::theme::*;
use super::Rect;

/// State for a text input field
#[derive(Debug, Clone)]
pub struct TextInputState {
    /// The text content
    pub text: String,
    /// Cursor position (byte index, always on a char boundary)
    pub cursor: usize,
    /// Most characters the field accepts
    pub max_chars: usize,
    /// Blink timer for cursor
    pub blink_timer: f32,
    pub focused: bool,
}

impl TextInputState {
    pub fn new(max_chars: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            max_chars,
            blink_timer: 0.0,
            focused: false,
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_full(&self) -> bool {
        self.char_count() >= self.max_chars
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.text.len())
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Insert a character at cursor. Returns false once the field is full.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.is_full() {
            return false;
        }
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
        true
    }

    /// Insert as much of `s` as fits
    pub fn insert(&mut self, s: &str) {
        for ch in s.chars() {
            if !self.insert_char(ch) {
                break;
            }
        }
    }

    /// Delete character before cursor (backspace)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    /// Delete character after cursor (delete key)
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.drain(self.cursor..next);
        }
    }

    /// Handle keyboard input, returns true if text changed
    pub fn handle_input(&mut self) -> bool {
        let before = self.text.len();
        let cursor_before = self.cursor;
        self.blink_timer += get_frame_time();

        if is_key_pressed(KeyCode::Left) {
            self.move_left();
        }
        if is_key_pressed(KeyCode::Right) {
            self.move_right();
        }
        if is_key_pressed(KeyCode::Home) {
            self.move_home();
        }
        if is_key_pressed(KeyCode::End) {
            self.move_end();
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.backspace();
        }
        if is_key_pressed(KeyCode::Delete) {
            self.delete();
        }

        while let Some(ch) = get_char_pressed() {
            // Filter control characters
            if ch >= ' ' && ch != '\u{7f}' {
                self.insert_char(ch);
            }
        }

        let changed = self.text.len() != before || self.cursor != cursor_before;
        if changed {
            self.blink_timer = 0.0;
        }
        self.text.len() != before
    }
}

/// Draw a text input field and, while focused, handle typing.
/// Returns true if the text changed.
pub fn draw_text_input(rect: Rect, state: &mut TextInputState, placeholder: &str, font_size: f32) -> bool {
    let border = if state.focused { ACCENT } else { PANEL_BORDER };
    super::draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, 6.0, INPUT_BG);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.5, border);

    let changed = if state.focused { state.handle_input() } else { false };

    let padding = 10.0;
    let text_x = rect.x + padding;
    let text_y = rect.y + (rect.h + font_size * 0.7) / 2.0;

    if state.text.is_empty() {
        draw_text(placeholder, text_x, text_y, font_size, TEXT_DIM);
    } else {
        draw_text(&state.text, text_x, text_y, font_size, TEXT_COLOR);
    }

    if state.focused && (state.blink_timer % 1.0) < 0.5 {
        let before_cursor = &state.text[..state.cursor];
        let cursor_x = text_x + measure_text(before_cursor, None, font_size as u16, 1.0).width;
        draw_line(cursor_x, rect.y + 8.0, cursor_x, rect.bottom() - 8.0, 1.5, TEXT_COLOR);
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_stops_at_limit() {
        let mut input = TextInputState::new(5);
        input.insert("peace and love");
        assert_eq!(input.text, "peace");
        assert!(input.is_full());
        assert!(!input.insert_char('!'));
    }

    #[test]
    fn test_limit_counts_characters() {
        let mut input = TextInputState::new(3);
        input.insert("星星星星");
        assert_eq!(input.text, "星星星");
        assert_eq!(input.char_count(), 3);
        assert_eq!(input.cursor, 9);
    }

    #[test]
    fn test_editing_at_cursor() {
        let mut input = TextInputState::new(50);
        input.insert("pace");
        input.move_home();
        input.move_right();
        input.insert_char('e');
        assert_eq!(input.text, "peace");

        input.move_end();
        input.backspace();
        assert_eq!(input.text, "peac");

        input.move_home();
        input.delete();
        assert_eq!(input.text, "eac");
    }

    #[test]
    fn test_multibyte_cursor_moves() {
        let mut input = TextInputState::new(50);
        input.insert("a星b");
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor, 1);
        input.delete();
        assert_eq!(input.text, "ab");
        input.backspace();
        assert_eq!(input.text, "b");
        input.backspace();
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_clear() {
        let mut input = TextInputState::new(50);
        input.insert("gone");
        input.clear();
        assert_eq!(input.char_count(), 0);
        assert_eq!(input.cursor, 0);
    }
}
