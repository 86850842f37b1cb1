use crate::domain::error::FetchError;
use crate::domain::models::{CompanyCandidate, SearchOption, SearchSession, SelectionTicket};
use crate::services::PaletteOutcome;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Search field ---
    TextAreaInput(crossterm::event::KeyEvent), // Edit the company name field
    TermChanged(String),                       // Field content changed to this term
    DebounceElapsed,                           // The debounce deadline passed
    HighlightNext,                             // Next option in the list
    HighlightPrev,                             // Previous option in the list
    ConfirmHighlighted,                        // Pick the highlighted option
    ClearField,                                // Empty the field and the selection

    // --- Selection ---
    SelectCompany(Option<CompanyCandidate>), // None when the field was cleared

    // --- Async Results ---
    SearchCompleted(SearchSession, Result<Vec<SearchOption>, FetchError>),
    PaletteResolving(SelectionTicket),
    PaletteResolved(SelectionTicket, Box<CompanyCandidate>, PaletteOutcome),
}
