use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder hex shown in every swatch before a company is picked.
pub const PLACEHOLDER_HEX: &str = "#F9F9F9";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCandidate {
    pub domain: String,
    pub logo: String,
    pub name: String,
    #[serde(default)]
    pub primary_color: String,
}

/// View-model projection of a candidate, as the options list shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOption {
    pub label: String,
    pub description: String,
    pub value: CompanyCandidate,
}

impl From<CompanyCandidate> for SearchOption {
    fn from(candidate: CompanyCandidate) -> Self {
        Self {
            label: candidate.name.clone(),
            description: candidate.domain.clone(),
            value: candidate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwatchColor {
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsl: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<f64>,
}

impl SwatchColor {
    #[must_use]
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            hsl: None,
            rgb: None,
            population: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteSlot {
    Vibrant,
    DarkVibrant,
    LightVibrant,
    Muted,
    DarkMuted,
    LightMuted,
}

impl PaletteSlot {
    /// Gallery order, left to right, top to bottom.
    pub const DISPLAY_ORDER: [PaletteSlot; 6] = [
        PaletteSlot::Vibrant,
        PaletteSlot::Muted,
        PaletteSlot::LightMuted,
        PaletteSlot::LightVibrant,
        PaletteSlot::DarkMuted,
        PaletteSlot::DarkVibrant,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteSlot::Vibrant => "Vibrant",
            PaletteSlot::DarkVibrant => "Dark Vibrant",
            PaletteSlot::LightVibrant => "Light Vibrant",
            PaletteSlot::Muted => "Muted",
            PaletteSlot::DarkMuted => "Dark Muted",
            PaletteSlot::LightMuted => "Light Muted",
        }
    }
}

/// Six named swatches. Every slot is always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub vibrant: SwatchColor,
    pub dark_vibrant: SwatchColor,
    pub light_vibrant: SwatchColor,
    pub muted: SwatchColor,
    pub dark_muted: SwatchColor,
    pub light_muted: SwatchColor,
}

impl Palette {
    /// The "no selection" palette: every slot `#F9F9F9`.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            vibrant: SwatchColor::from_hex(PLACEHOLDER_HEX),
            dark_vibrant: SwatchColor::from_hex(PLACEHOLDER_HEX),
            light_vibrant: SwatchColor::from_hex(PLACEHOLDER_HEX),
            muted: SwatchColor::from_hex(PLACEHOLDER_HEX),
            dark_muted: SwatchColor::from_hex(PLACEHOLDER_HEX),
            light_muted: SwatchColor::from_hex(PLACEHOLDER_HEX),
        }
    }

    #[must_use]
    pub fn get(&self, slot: PaletteSlot) -> &SwatchColor {
        match slot {
            PaletteSlot::Vibrant => &self.vibrant,
            PaletteSlot::DarkVibrant => &self.dark_vibrant,
            PaletteSlot::LightVibrant => &self.light_vibrant,
            PaletteSlot::Muted => &self.muted,
            PaletteSlot::DarkMuted => &self.dark_muted,
            PaletteSlot::LightMuted => &self.light_muted,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Palette body as the color-extraction service sends it. Providers may
/// leave slots out, so each one is optional until completed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalettePayload {
    pub vibrant: Option<SwatchColor>,
    pub dark_vibrant: Option<SwatchColor>,
    pub light_vibrant: Option<SwatchColor>,
    pub muted: Option<SwatchColor>,
    pub dark_muted: Option<SwatchColor>,
    pub light_muted: Option<SwatchColor>,
}

impl PalettePayload {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing_slots().len() == PaletteSlot::DISPLAY_ORDER.len()
    }

    #[must_use]
    pub fn missing_slots(&self) -> Vec<PaletteSlot> {
        PaletteSlot::DISPLAY_ORDER
            .into_iter()
            .filter(|slot| self.slot(*slot).is_none())
            .collect()
    }

    fn slot(&self, slot: PaletteSlot) -> Option<&SwatchColor> {
        match slot {
            PaletteSlot::Vibrant => self.vibrant.as_ref(),
            PaletteSlot::DarkVibrant => self.dark_vibrant.as_ref(),
            PaletteSlot::LightVibrant => self.light_vibrant.as_ref(),
            PaletteSlot::Muted => self.muted.as_ref(),
            PaletteSlot::DarkMuted => self.dark_muted.as_ref(),
            PaletteSlot::LightMuted => self.light_muted.as_ref(),
        }
    }

    /// Fills every absent slot from `fallback`.
    #[must_use]
    pub fn complete_with(self, fallback: &Palette) -> Palette {
        Palette {
            vibrant: self.vibrant.unwrap_or_else(|| fallback.vibrant.clone()),
            dark_vibrant: self
                .dark_vibrant
                .unwrap_or_else(|| fallback.dark_vibrant.clone()),
            light_vibrant: self
                .light_vibrant
                .unwrap_or_else(|| fallback.light_vibrant.clone()),
            muted: self.muted.unwrap_or_else(|| fallback.muted.clone()),
            dark_muted: self
                .dark_muted
                .unwrap_or_else(|| fallback.dark_muted.clone()),
            light_muted: self
                .light_muted
                .unwrap_or_else(|| fallback.light_muted.clone()),
        }
    }
}

impl From<Palette> for PalettePayload {
    fn from(palette: Palette) -> Self {
        Self {
            vibrant: Some(palette.vibrant),
            dark_vibrant: Some(palette.dark_vibrant),
            light_vibrant: Some(palette.light_vibrant),
            muted: Some(palette.muted),
            dark_muted: Some(palette.dark_muted),
            light_muted: Some(palette.light_muted),
        }
    }
}

/// Correlation token for one debounced search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SearchSession(pub u64);

impl fmt::Display for SearchSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "search#{}", self.0)
    }
}

/// Correlation token for one company selection and its palette fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SelectionTicket(pub u64);

impl fmt::Display for SelectionTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "selection#{}", self.0)
    }
}
