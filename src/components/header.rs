use crate::app::state::AppState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a, 'b> {
    pub state: &'a AppState<'b>,
    pub theme: &'a Theme,
}

impl Widget for Header<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(" COLORS ", self.theme.header_logo)];

        if let Some(company) = &self.state.selection.selected_company {
            spans.push(Span::styled(
                format!(" {} · {} ", company.name, company.domain),
                self.theme.header_item,
            ));
        }

        if self.state.working() {
            spans.push(Span::styled(
                format!(" {} resolving palette ", self.state.spinner()),
                self.theme.header_busy,
            ));
        } else if self.state.search.controller.is_busy() {
            spans.push(Span::styled(
                format!(" {} searching ", self.state.spinner()),
                self.theme.header_item,
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
