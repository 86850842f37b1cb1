use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

pub const SEARCH_PLACEHOLDER: &str = "Enter your company name";

/// Single-line company name field.
pub struct SearchField<'a>(pub TextArea<'a>);

impl Default for SearchField<'_> {
    fn default() -> Self {
        let mut area = TextArea::default();
        area.set_placeholder_text(SEARCH_PLACEHOLDER);
        Self(area)
    }
}

impl SearchField<'_> {
    /// The field's content. Newlines are never inserted, so this is the
    /// first line.
    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().concat()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn set_text(&mut self, text: &str) {
        self.clear();
        self.0.insert_str(text);
    }
}

impl Clone for SearchField<'_> {
    fn clone(&self) -> Self {
        let mut field = Self::default();
        field.0 = TextArea::new(self.0.lines().to_vec());
        field.0.set_placeholder_text(SEARCH_PLACEHOLDER);
        let (row, col) = self.0.cursor();
        field.0.move_cursor(CursorMove::Jump(row as u16, col as u16));
        field
    }
}

impl std::fmt::Debug for SearchField<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchField")
            .field("text", &self.text())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for SearchField<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for SearchField<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SearchField<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &SearchField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_clear() {
        let mut field = SearchField::default();
        field.insert_str("acme");
        assert_eq!(field.text(), "acme");

        let copy = field.clone();
        assert_eq!(copy, field);

        field.clear();
        assert_eq!(field.text(), "");
        assert_eq!(field.placeholder_text(), SEARCH_PLACEHOLDER);
    }

    #[test]
    fn test_set_text_replaces_content() {
        let mut field = SearchField::default();
        field.set_text("ac");
        field.set_text("globex");
        assert_eq!(field.text(), "globex");
        assert_eq!(field.cursor(), (0, 6));
    }
}
