use crate::domain::error::FetchError;
use crate::domain::models::{CompanyCandidate, PalettePayload};
use async_trait::async_trait;

/// The two remote collaborators: company autocomplete and logo color
/// extraction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandDirectory: Send + Sync {
    // Raw autocomplete matches for a user-entered term, in provider order
    async fn suggest_companies(&self, term: &str) -> Result<Vec<CompanyCandidate>, FetchError>;

    // Palette extracted from the image at `logo_url`
    async fn extract_palette(&self, logo_url: &str) -> Result<PalettePayload, FetchError>;
}
