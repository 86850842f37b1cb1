use crate::domain::models::{Palette, PaletteSlot};
use crate::theme::{swatch_style, Theme};

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const COLUMNS: usize = 3;

/// The six palette slots as colored blocks, each labelled with its hex and
/// slot name in a legible text color.
pub struct SwatchGallery<'a> {
    pub palette: &'a Palette,
    pub theme: &'a Theme,
}

impl Widget for SwatchGallery<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("Palette", self.theme.option_label),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([Constraint::Ratio(1, 2); 2]).spacing(1).split(inner);
        for (row_area, slots) in rows.iter().zip(PaletteSlot::DISPLAY_ORDER.chunks(COLUMNS)) {
            let cells = Layout::horizontal([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
                .spacing(1)
                .split(*row_area);
            for (cell, slot) in cells.iter().zip(slots) {
                Swatch {
                    hex: &self.palette.get(*slot).hex,
                    label: slot.label(),
                }
                .render(*cell, buf);
            }
        }
    }
}

struct Swatch<'a> {
    hex: &'a str,
    label: &'static str,
}

impl Widget for Swatch<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = swatch_style(self.hex);
        let top_padding = area.height.saturating_sub(2) / 2;

        let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
        lines.push(Line::from(self.hex.to_uppercase()));
        lines.push(Line::from(self.label));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(style)
            .render(area, buf);
    }
}

/// Shown in place of the gallery while a selection resolves.
pub struct Working<'a> {
    pub spinner: &'a str,
    pub theme: &'a Theme,
}

impl Widget for Working<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);
        let inner = block.inner(area);
        block.render(area, buf);

        let centered = Rect {
            y: inner.y + inner.height / 2,
            height: inner.height.min(1),
            ..inner
        };
        Paragraph::new(Span::styled(
            format!("{} Fetching colors...", self.spinner),
            self.theme.spinner,
        ))
        .alignment(Alignment::Center)
        .render(centered, buf);
    }
}
