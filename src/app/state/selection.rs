use crate::domain::models::{CompanyCandidate, Palette, SelectionTicket};

/// Where the "select a company" path currently is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    #[default]
    Idle,
    Working,
    Resolving,
}

/// The view-model the swatch gallery reads: busy flag, chosen company and
/// the palette on display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    pub phase: SelectionPhase,
    pub selected_company: Option<CompanyCandidate>,
    pub palette: Palette,
    next_ticket: u64,
    pending: Option<SelectionTicket>,
}

impl SelectionState {
    #[must_use]
    pub fn working(&self) -> bool {
        self.phase != SelectionPhase::Idle
    }

    /// Idle -> Working. Any earlier pending selection is superseded.
    pub fn begin(&mut self) -> SelectionTicket {
        self.next_ticket += 1;
        let ticket = SelectionTicket(self.next_ticket);
        self.pending = Some(ticket);
        self.phase = SelectionPhase::Working;
        ticket
    }

    /// Working -> Resolving, for the current ticket only.
    pub fn mark_resolving(&mut self, ticket: SelectionTicket) -> bool {
        if self.pending == Some(ticket) {
            self.phase = SelectionPhase::Resolving;
            true
        } else {
            false
        }
    }

    /// Resolving -> Idle with the resolved palette. Returns false (and changes
    /// nothing) when `ticket` has been superseded.
    pub fn apply(
        &mut self,
        ticket: SelectionTicket,
        company: CompanyCandidate,
        palette: Palette,
    ) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.selected_company = Some(company);
        self.palette = palette;
        self.phase = SelectionPhase::Idle;
        true
    }

    /// The field was cleared: settle to Idle, forget any in-flight fetch,
    /// keep the palette and company on display.
    pub fn settle(&mut self) {
        self.pending = None;
        self.phase = SelectionPhase::Idle;
    }
}
