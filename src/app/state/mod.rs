use crate::app::debounce::DebouncedSearchController;
use crate::theme::Theme;
use std::time::Duration;

pub mod error;
pub mod input;
pub mod search;
pub mod selection;

// Re-exports
pub use error::{FailureNote, FailureSource};
pub use input::SearchField;
pub use search::SearchState;
pub use selection::{SelectionPhase, SelectionState};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState<'a> {
    pub should_quit: bool,

    // --- Search-as-you-type ---
    pub search: SearchState<'a>,

    // --- Selected company & palette (the view-model) ---
    pub selection: SelectionState,

    // --- Silent failures ---
    pub last_failure: Option<FailureNote>,

    // --- Animation ---
    pub frame_count: u64,

    pub theme: Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        let mut state = Self::default();
        state.search.controller = DebouncedSearchController::new(debounce);
        state
    }

    #[must_use]
    pub fn working(&self) -> bool {
        self.selection.working()
    }

    #[must_use]
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[(self.frame_count as usize) % SPINNER_FRAMES.len()]
    }
}
