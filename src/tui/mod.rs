//! Terminal UI: layout, widget rendering, hit regions and terminal setup.

pub mod components;
pub mod interaction;
pub mod terminal;
pub mod theme;
pub mod ui;
