use crate::app::state::AppState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

const ITEMS: [FooterItem; 4] = [
    FooterItem {
        key: "↑/↓",
        desc: "choose",
    },
    FooterItem {
        key: "Enter",
        desc: "select",
    },
    FooterItem {
        key: "Ctrl-U",
        desc: "clear",
    },
    FooterItem {
        key: "Esc",
        desc: "quit",
    },
];

pub struct Footer<'a, 'b> {
    pub state: &'a AppState<'b>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        // Degradations stay quiet: a dim note, never a dialog.
        let status_span = if let Some(note) = &self.state.last_failure {
            Span::styled(format!("  {}  ", note.summary()), theme.status_note)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw(" ")];
        for item in &ITEMS {
            spans.push(Span::styled(format!(" {} ", item.key), theme.footer_segment_key));
            spans.push(Span::styled(format!(" {} ", item.desc), theme.footer_segment_val));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
