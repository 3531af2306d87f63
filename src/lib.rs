//! A dropdown select for terminal UIs, with single and multiple selection.
//!
//! The widget in [`select`] owns only its open/cursor state. Options, the
//! current value and the change callback are passed in as [`select::SelectProps`]
//! on every event and render, and every change goes back out through that
//! callback. [`tui`] draws it with ratatui and maps pointer positions back to
//! widget targets; [`app`] is the host used by the `pickbox` binary.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod log;
pub mod select;
pub mod tui;
