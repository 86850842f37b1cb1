use crate::domain::contrast::{parse_rgb, pick_text_color};
use ratatui::style::{Color, Style};

/// Base colors a UI theme is derived from.
pub struct ThemeColors {
    pub base: Color,
    pub mantle: Color,
    pub crust: Color,
    pub text: Color,
    pub subtext0: Color,
    pub surface0: Color,
    pub surface1: Color,
    pub surface2: Color,
    pub overlay0: Color,
    pub blue: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
}

/// Terminal color for a swatch hex. Anything unparseable renders as the
/// terminal default.
#[must_use]
pub fn swatch_color(hex: &str) -> Color {
    parse_rgb(hex).map_or(Color::Reset, |(r, g, b)| Color::Rgb(r, g, b))
}

/// Background from the swatch itself, foreground from the contrast engine.
#[must_use]
pub fn swatch_style(hex: &str) -> Style {
    Style::default()
        .bg(swatch_color(hex))
        .fg(swatch_color(pick_text_color(hex)))
}
