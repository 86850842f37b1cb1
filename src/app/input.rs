use crate::app::{action::Action, state::AppState};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

pub fn map_event_to_action(event: Event, app_state: &AppState<'_>) -> Option<Action> {
    let Event::Key(key) = event else {
        return None;
    };
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('u') if ctrl => Some(Action::ClearField),
        KeyCode::Down => Some(Action::HighlightNext),
        KeyCode::Up => Some(Action::HighlightPrev),
        KeyCode::Enter => {
            if app_state.search.options.is_empty() {
                None
            } else {
                Some(Action::ConfirmHighlighted)
            }
        }
        // Only single-line edits reach the field.
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(_)
        | KeyCode::Backspace
        | KeyCode::Delete
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Home
        | KeyCode::End => Some(Action::TextAreaInput(key)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{CompanyCandidate, SearchOption};
    use crossterm::event::KeyEvent;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_typing_goes_to_field() {
        let state = AppState::default();
        let action = map_event_to_action(press(KeyCode::Char('a'), KeyModifiers::NONE), &state);
        assert!(matches!(action, Some(Action::TextAreaInput(_))));

        let action = map_event_to_action(press(KeyCode::Char('A'), KeyModifiers::SHIFT), &state);
        assert!(matches!(action, Some(Action::TextAreaInput(_))));
    }

    #[test]
    fn test_control_keys() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(press(KeyCode::Char('u'), KeyModifiers::CONTROL), &state),
            Some(Action::ClearField)
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &state),
            Some(Action::Quit)
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Char('j'), KeyModifiers::CONTROL), &state),
            None
        );
    }

    #[test]
    fn test_enter_needs_options() {
        let mut state = AppState::default();
        assert_eq!(
            map_event_to_action(press(KeyCode::Enter, KeyModifiers::NONE), &state),
            None
        );

        state.search.set_options(vec![SearchOption::from(CompanyCandidate {
            domain: "acme.com".to_string(),
            logo: String::new(),
            name: "Acme".to_string(),
            primary_color: String::new(),
        })]);
        assert_eq!(
            map_event_to_action(press(KeyCode::Enter, KeyModifiers::NONE), &state),
            Some(Action::ConfirmHighlighted)
        );
    }

    #[test]
    fn test_release_and_mouse_ignored() {
        let state = AppState::default();
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(release), &state), None);
        assert_eq!(map_event_to_action(Event::Resize(80, 24), &state), None);
    }
}
