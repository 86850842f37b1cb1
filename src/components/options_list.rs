use crate::domain::models::SearchOption;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
    },
};

/// Candidates for the current term, one "Name  domain" row each.
pub struct OptionsList<'a> {
    pub options: &'a [SearchOption],
    pub empty_message: &'a str,
    pub theme: &'a Theme,
}

impl StatefulWidget for OptionsList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("Matches", self.theme.option_label),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        if self.options.is_empty() {
            Paragraph::new(Span::styled(self.empty_message, self.theme.dimmed))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|option| {
                ListItem::new(Line::from(vec![
                    Span::styled(option.label.as_str(), self.theme.option_label),
                    Span::raw("  "),
                    Span::styled(option.description.as_str(), self.theme.option_domain),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.list_selected)
            .highlight_symbol("› ");

        StatefulWidget::render(list, area, buf, state);
    }
}
