use crate::domain::brand::BrandDirectory;
use crate::domain::error::FetchError;
use crate::domain::models::SearchOption;
use std::sync::Arc;

/// Turns a search term into display-ready options, sorted by company name.
#[derive(Clone)]
pub struct CompanySearchService {
    directory: Arc<dyn BrandDirectory>,
}

impl CompanySearchService {
    pub fn new(directory: Arc<dyn BrandDirectory>) -> Self {
        Self { directory }
    }

    /// One autocomplete request for `term`, passed through as typed.
    ///
    /// Empty and whitespace-only terms are sent too; the provider decides
    /// what they match.
    pub async fn search_companies(&self, term: &str) -> Result<Vec<SearchOption>, FetchError> {
        let mut matches = self.directory.suggest_companies(term).await?;
        // Stable, so equal names keep provider order.
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matches.into_iter().map(SearchOption::from).collect())
    }
}
