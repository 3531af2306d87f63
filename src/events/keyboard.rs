//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::select::SelectKey;

use super::Action;

/// Handle keyboard events and return the appropriate action.
///
/// Host keys (quit, focus cycling) are resolved here; the rest is offered
/// to the focused select, which ignores anything it doesn't know.
pub fn handle_key_event(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,
        code => SelectKey::from_key_code(code).map_or(Action::None, Action::Key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Action {
        handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_host_keys() {
        assert_eq!(press(KeyCode::Char('q')), Action::Quit);
        assert_eq!(press(KeyCode::Tab), Action::FocusNext);
        assert_eq!(press(KeyCode::BackTab), Action::FocusPrev);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_select_keys() {
        assert_eq!(press(KeyCode::Down), Action::Key(SelectKey::ArrowDown));
        assert_eq!(press(KeyCode::Char(' ')), Action::Key(SelectKey::Space));
        assert_eq!(press(KeyCode::Esc), Action::Key(SelectKey::Escape));
        assert_eq!(press(KeyCode::Char('x')), Action::None);
        assert_eq!(press(KeyCode::Left), Action::None);
    }
}
