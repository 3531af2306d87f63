//! UI components for the TUI.
//!
//! - `select` - Select container, value chips and the open option list

mod select;

pub use select::{render_option_list, render_select, SelectView, SELECT_HEIGHT};
