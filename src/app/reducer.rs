use super::{
    action::Action,
    command::Command,
    state::{AppState, FailureNote, FailureSource},
};
use crate::domain::models::CompanyCandidate;
use tokio::time::Instant;

/// Applies one action. `now` is the loop's clock reading for this step and
/// is the only time source the debounce sees.
pub fn update(state: &mut AppState, action: Action, now: Instant) -> Option<Command> {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
        }
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Search field ---
        Action::TextAreaInput(key) => {
            let before = state.search.field.text();
            state.search.field.input(key);
            let term = state.search.field.text();
            if term != before {
                return term_changed(state, term, now);
            }
        }
        Action::TermChanged(term) => {
            if state.search.field.text() != term {
                state.search.field.set_text(&term);
            }
            return term_changed(state, term, now);
        }
        Action::DebounceElapsed => {
            let invocation = state.search.controller.fire_due(now)?;
            log::debug!("trailing search {} for {:?}", invocation.session, invocation.term);
            return Some(Command::Search(invocation));
        }
        Action::HighlightNext => state.search.highlight_next(),
        Action::HighlightPrev => state.search.highlight_prev(),
        Action::ConfirmHighlighted => {
            let candidate = state.search.highlighted().cloned()?;
            return select_company(state, Some(candidate));
        }
        Action::ClearField => {
            state.search.field.clear();
            state.search.controller.reset();
            state.search.set_options(Vec::new());
            return select_company(state, None);
        }

        // --- Selection ---
        Action::SelectCompany(candidate) => return select_company(state, candidate),

        // --- Async Results ---
        Action::SearchCompleted(session, result) => {
            if !state.search.controller.accept(session) {
                log::debug!("discarding stale results for {session}");
                return None;
            }
            match result {
                Ok(options) => {
                    log::debug!("{session} returned {} options", options.len());
                    clear_failure(state, FailureSource::Search);
                    state.search.set_options(options);
                }
                Err(err) => {
                    log::warn!("{session} failed ({}): {err}", err.kind());
                    state.last_failure = Some(FailureNote::new(FailureSource::Search, err));
                    state.search.set_options(Vec::new());
                }
            }
        }
        Action::PaletteResolving(ticket) => {
            if !state.selection.mark_resolving(ticket) {
                log::debug!("{ticket} superseded before resolving");
            }
        }
        Action::PaletteResolved(ticket, company, outcome) => {
            let failure = outcome.failure().cloned();
            if !state
                .selection
                .apply(ticket, *company, outcome.into_palette())
            {
                log::debug!("discarding stale palette for {ticket}");
                return None;
            }
            match failure {
                Some(err) => {
                    state.last_failure = Some(FailureNote::new(FailureSource::Palette, err));
                }
                None => clear_failure(state, FailureSource::Palette),
            }
        }
    }
    None
}

fn term_changed(state: &mut AppState, term: String, now: Instant) -> Option<Command> {
    let invocation = state.search.controller.on_term_change(term, now)?;
    log::debug!("leading search {} for {:?}", invocation.session, invocation.term);
    Some(Command::Search(invocation))
}

fn select_company(state: &mut AppState, candidate: Option<CompanyCandidate>) -> Option<Command> {
    // Cleared field: settle without fetching anything.
    let Some(company) = candidate else {
        state.selection.settle();
        return None;
    };

    state.search.field.set_text(&company.name);
    let ticket = state.selection.begin();
    log::info!("resolving palette for {} ({ticket})", company.domain);
    Some(Command::ResolvePalette {
        ticket,
        previous: state.selection.palette.clone(),
        company,
    })
}

fn clear_failure(state: &mut AppState, source: FailureSource) {
    if state
        .last_failure
        .as_ref()
        .is_some_and(|note| note.source == source)
    {
        state.last_failure = None;
    }
}
