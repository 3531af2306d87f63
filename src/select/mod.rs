//! Dropdown select component.
//!
//! Split the same way the widget behaves:
//! - `option` - option records supplied by the owner
//! - `props` - per-render contract (single or multiple) plus the selection operations
//! - `engine` - pure selection rules
//! - `state` - transient open/cursor state
//! - `component` - event handling

mod component;
mod engine;
mod option;
mod props;
mod state;

pub use component::{EventResult, KeyTarget, Select, SelectEvent, SelectKey};
pub use option::{OptionValue, SelectOption};
pub use props::{SelectMode, SelectProps};
pub use state::SelectState;
