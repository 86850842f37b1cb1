//! Legible text color for a swatch background.
//!
//! Uses the W3C perceived-brightness formula
//! `Y = (R*299 + G*587 + B*114) / 1000` and switches to black text once the
//! background is brighter than 130. The comparison runs on the scaled integer
//! sum so the boundary is exact.

pub const BLACK_TEXT: &str = "#000000";
pub const WHITE_TEXT: &str = "#ffffff";

/// Brightness threshold, scaled by 1000 to match [`brightness_milli`].
const THRESHOLD_MILLI: u32 = 130_000;

/// Returns `"#000000"` for bright backgrounds and `"#ffffff"` otherwise.
///
/// Input that does not parse as `#RRGGBB` is never treated as bright, so it
/// yields white text rather than panicking.
#[must_use]
pub fn pick_text_color(hex: &str) -> &'static str {
    match parse_rgb(hex) {
        Some(rgb) if brightness_milli(rgb) > THRESHOLD_MILLI => BLACK_TEXT,
        _ => WHITE_TEXT,
    }
}

/// Perceived brightness times 1000.
#[must_use]
pub fn brightness_milli((r, g, b): (u8, u8, u8)) -> u32 {
    u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114
}

/// Parses the first six hex digits after an optional leading `#`.
#[must_use]
pub fn parse_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let digits = digits.get(..6)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
