//! Event handling module for keyboard and mouse events.
//!
//! Raw crossterm events are turned into `Action`s here; the App applies
//! them and routes select-level events to the widget that should see them.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
