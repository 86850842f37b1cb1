use crate::domain::brand::BrandDirectory;
use crate::domain::error::FetchError;
use crate::domain::models::Palette;
use std::sync::Arc;

/// Result of a palette resolution. Always carries a complete palette.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteOutcome {
    /// The service answered with a usable palette.
    Fresh(Palette),
    /// The fetch failed; `palette` is the one held before the call.
    Degraded { palette: Palette, cause: FetchError },
}

impl PaletteOutcome {
    #[must_use]
    pub fn palette(&self) -> &Palette {
        match self {
            PaletteOutcome::Fresh(palette) | PaletteOutcome::Degraded { palette, .. } => palette,
        }
    }

    #[must_use]
    pub fn into_palette(self) -> Palette {
        match self {
            PaletteOutcome::Fresh(palette) | PaletteOutcome::Degraded { palette, .. } => palette,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&FetchError> {
        match self {
            PaletteOutcome::Fresh(_) => None,
            PaletteOutcome::Degraded { cause, .. } => Some(cause),
        }
    }
}

/// Fetches the color palette for a logo, keeping the last-known-good palette
/// when anything goes wrong.
#[derive(Clone)]
pub struct PaletteResolver {
    directory: Arc<dyn BrandDirectory>,
}

impl PaletteResolver {
    pub fn new(directory: Arc<dyn BrandDirectory>) -> Self {
        Self { directory }
    }

    /// Single attempt, no retry. Never fails: on error the outcome holds
    /// `previous` unchanged.
    pub async fn resolve_palette(&self, logo_url: &str, previous: &Palette) -> PaletteOutcome {
        match self.fetch(logo_url).await {
            Ok(palette) => PaletteOutcome::Fresh(palette),
            Err(cause) => {
                log::warn!(
                    "palette fetch for {logo_url} failed ({}): {cause}; keeping previous palette",
                    cause.kind()
                );
                PaletteOutcome::Degraded {
                    palette: previous.clone(),
                    cause,
                }
            }
        }
    }

    async fn fetch(&self, logo_url: &str) -> Result<Palette, FetchError> {
        let payload = self.directory.extract_palette(logo_url).await?;
        if payload.is_empty() {
            return Err(FetchError::Malformed("no palette slots in response".to_string()));
        }
        let missing = payload.missing_slots();
        if !missing.is_empty() {
            log::debug!("palette for {logo_url} is missing {missing:?}, using placeholders");
        }
        Ok(payload.complete_with(&Palette::placeholder()))
    }
}
