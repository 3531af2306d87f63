//! The select component: input events in, state transitions and change
//! notifications out.

use crossterm::event::KeyCode;

use super::props::SelectProps;
use super::state::SelectState;
use crate::log;

/// Keys the select reacts to. Everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectKey {
    Enter,
    Space,
    ArrowUp,
    ArrowDown,
    Escape,
}

impl SelectKey {
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Enter => Some(SelectKey::Enter),
            KeyCode::Char(' ') => Some(SelectKey::Space),
            KeyCode::Up => Some(SelectKey::ArrowUp),
            KeyCode::Down => Some(SelectKey::ArrowDown),
            KeyCode::Esc => Some(SelectKey::Escape),
            _ => None,
        }
    }
}

/// Which element a key event was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTarget {
    /// The select's own container.
    Container,
    /// A button nested inside the container (chip or clear button).
    Nested,
}

/// Input delivered to a select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectEvent {
    /// Pointer press on the container outside any nested target.
    ContainerClick,
    /// Pointer press on an option row.
    OptionClick(usize),
    /// Pointer moved over an option row.
    OptionHover(usize),
    /// Pointer press on the clear button.
    ClearClick,
    /// Pointer press on a selected-value chip (multi-select only).
    ChipClick(usize),
    /// The container lost focus.
    Blur,
    Key { key: SelectKey, target: KeyTarget },
}

/// Whether the select acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

/// A dropdown select.
///
/// Holds only the transient open/cursor state; options, value and change
/// callback arrive as [`SelectProps`] with every event and render.
#[derive(Debug, Clone, Default)]
pub struct Select {
    state: SelectState,
}

impl Select {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn highlighted_index(&self) -> usize {
        self.state.highlighted_index()
    }

    pub fn handle_event(&mut self, event: SelectEvent, props: &mut SelectProps<'_>) -> EventResult {
        match event {
            SelectEvent::ContainerClick => {
                self.state.toggle();
                log::log_event(&format!("select toggled, open={}", self.state.is_open()));
                EventResult::Consumed
            }
            SelectEvent::OptionClick(index) => {
                let options = props.options;
                let Some(option) = options.get(index) else {
                    return EventResult::Ignored;
                };
                props.select(option);
                self.state.close();
                EventResult::Consumed
            }
            SelectEvent::OptionHover(index) => {
                if index >= props.options.len() {
                    return EventResult::Ignored;
                }
                self.state.highlight(index);
                EventResult::Consumed
            }
            SelectEvent::ClearClick => {
                props.clear();
                EventResult::Consumed
            }
            SelectEvent::ChipClick(index) => {
                // Chips mirror the selected values, so resolve against those.
                let Some(option) = props.selected().get(index).map(|o| (*o).clone()) else {
                    return EventResult::Ignored;
                };
                props.select(&option);
                EventResult::Consumed
            }
            SelectEvent::Blur => {
                self.state.close();
                EventResult::Consumed
            }
            SelectEvent::Key { key, target } => {
                if target != KeyTarget::Container {
                    return EventResult::Ignored;
                }
                self.handle_key(key, props)
            }
        }
    }

    fn handle_key(&mut self, key: SelectKey, props: &mut SelectProps<'_>) -> EventResult {
        log::log_event(&format!("select key {:?}, open={}", key, self.state.is_open()));
        match key {
            SelectKey::Enter | SelectKey::Space => {
                // Decided on the open flag as it was before this keypress:
                // only a keypress that closes the list commits the cursor.
                let was_open = self.state.is_open();
                self.state.toggle();
                let options = props.options;
                if was_open && let Some(option) = options.get(self.state.highlighted_index()) {
                    props.select(option);
                }
            }
            SelectKey::ArrowUp | SelectKey::ArrowDown => {
                if !self.state.is_open() {
                    self.state.open();
                } else {
                    self.state
                        .step(key == SelectKey::ArrowDown, props.options.len());
                }
            }
            SelectKey::Escape => self.state.close(),
        }
        EventResult::Consumed
    }
}
