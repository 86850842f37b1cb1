use crate::app::state::SearchField;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

/// The "Company Name" field.
pub struct SearchBox<'a, 'b> {
    pub field: &'a mut SearchField<'b>,
    pub theme: &'a Theme,
}

impl Widget for SearchBox<'_, '_> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("Company Name", self.theme.option_label),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        self.field.set_block(block);
        self.field.set_style(self.theme.field);
        self.field.set_placeholder_style(self.theme.field_placeholder);
        self.field.set_cursor_line_style(self.theme.field);

        Widget::render(&*self.field, area, buf);
    }
}
