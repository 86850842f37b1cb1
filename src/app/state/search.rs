use super::input::SearchField;
use crate::app::debounce::DebouncedSearchController;
use crate::domain::models::{CompanyCandidate, SearchOption};
use ratatui::widgets::ListState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState<'a> {
    pub field: SearchField<'a>,
    pub options: Vec<SearchOption>,
    pub list_state: ListState,
    pub controller: DebouncedSearchController,
}

impl SearchState<'_> {
    /// Replaces the option list, highlighting the first entry if any.
    pub fn set_options(&mut self, options: Vec<SearchOption>) {
        self.list_state
            .select(if options.is_empty() { None } else { Some(0) });
        self.options = options;
    }

    pub fn highlight_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < self.options.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn highlight_prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(0) | None => self.options.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(prev));
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&CompanyCandidate> {
        self.list_state
            .selected()
            .and_then(|i| self.options.get(i))
            .map(|option| &option.value)
    }

    /// Message for an empty option list.
    #[must_use]
    pub fn empty_message(&self) -> &'static str {
        if self.field.text().is_empty() {
            "Type to search..."
        } else {
            "No company found"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(names: &[&str]) -> Vec<SearchOption> {
        names
            .iter()
            .map(|name| {
                SearchOption::from(CompanyCandidate {
                    domain: format!("{name}.com"),
                    logo: String::new(),
                    name: (*name).to_string(),
                    primary_color: String::new(),
                })
            })
            .collect()
    }

    #[test]
    fn test_highlight_wraps() {
        let mut state = SearchState::default();
        state.set_options(options(&["a", "b", "c"]));
        assert_eq!(state.list_state.selected(), Some(0));

        state.highlight_prev();
        assert_eq!(state.list_state.selected(), Some(2));
        state.highlight_next();
        assert_eq!(state.list_state.selected(), Some(0));
        state.highlight_next();
        assert_eq!(state.highlighted().unwrap().name, "b");
    }

    #[test]
    fn test_empty_options_clear_highlight() {
        let mut state = SearchState::default();
        state.set_options(options(&["a"]));
        state.set_options(Vec::new());
        assert!(state.highlighted().is_none());
        state.highlight_next();
        assert!(state.list_state.selected().is_none());
    }

    #[test]
    fn test_empty_message() {
        let mut state = SearchState::default();
        assert_eq!(state.empty_message(), "Type to search...");
        state.field.insert_str("zz");
        assert_eq!(state.empty_message(), "No company found");
    }
}
