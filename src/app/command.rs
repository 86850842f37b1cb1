use crate::app::debounce::SearchInvocation;
use crate::domain::models::{CompanyCandidate, Palette, SelectionTicket};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(SearchInvocation),
    ResolvePalette {
        ticket: SelectionTicket,
        company: CompanyCandidate,
        previous: Palette,
    },
}
