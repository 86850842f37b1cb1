use ratatui::style::{Modifier, Style};

pub mod nord;
pub mod palette;

pub use palette::{swatch_color, swatch_style, ThemeColors};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_item: Style,
    pub header_busy: Style,
    pub header: Style,

    pub field: Style,
    pub field_placeholder: Style,

    pub option_label: Style,
    pub option_domain: Style,
    pub list_selected: Style,

    pub spinner: Style,

    pub status_ready: Style,
    pub status_note: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub dimmed: Style,
}

impl Theme {
    #[must_use]
    pub fn from_colors(p: &ThemeColors) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header_busy: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.base).fg(p.text),

            field: Style::default().fg(p.text),
            field_placeholder: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),

            option_label: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            option_domain: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),
            list_selected: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            spinner: Style::default().fg(p.yellow).add_modifier(Modifier::BOLD),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_note: Style::default()
                .bg(p.surface0)
                .fg(p.red)
                .add_modifier(Modifier::DIM),

            footer_segment_key: Style::default()
                .bg(p.surface1)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.mantle).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_colors(&nord::NORD)
    }
}
