//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents and are processed by the App to update state.

use crate::select::SelectKey;
use crate::tui::interaction::{HitTarget, WidgetId};

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do
    None,

    // === Application ===
    /// Quit the application
    Quit,

    // === Focus ===
    /// Move focus to the next element in tab order
    FocusNext,
    /// Move focus to the previous element in tab order
    FocusPrev,

    // === Select input ===
    /// Key for the focused element
    Key(SelectKey),
    /// Pointer pressed on part of a select
    Press { widget: WidgetId, target: HitTarget },
    /// Pointer pressed outside every select
    PressOutside,
    /// The terminal window lost focus
    FocusLost,
    /// Pointer moved over an option row
    Hover { widget: WidgetId, index: usize },
}
