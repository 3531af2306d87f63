//! Per-render configuration handed to a select by its owner.

use super::engine;
use super::option::SelectOption;

/// Selection contract for one render cycle.
///
/// The two variants carry differently-shaped values and callbacks, so a
/// multi-select value can never be paired with a single-select callback.
pub enum SelectMode<'a> {
    /// At most one option selected. `on_change(None)` means "cleared".
    Single {
        value: Option<&'a SelectOption>,
        on_change: &'a mut dyn FnMut(Option<SelectOption>),
    },
    /// Any number of options, in selection order.
    Multiple {
        value: &'a [SelectOption],
        on_change: &'a mut dyn FnMut(Vec<SelectOption>),
    },
}

/// Options plus the selection contract, borrowed from the owner.
pub struct SelectProps<'a> {
    pub options: &'a [SelectOption],
    pub mode: SelectMode<'a>,
}

impl<'a> SelectProps<'a> {
    pub fn single(
        options: &'a [SelectOption],
        value: Option<&'a SelectOption>,
        on_change: &'a mut dyn FnMut(Option<SelectOption>),
    ) -> Self {
        Self {
            options,
            mode: SelectMode::Single { value, on_change },
        }
    }

    pub fn multiple(
        options: &'a [SelectOption],
        value: &'a [SelectOption],
        on_change: &'a mut dyn FnMut(Vec<SelectOption>),
    ) -> Self {
        Self {
            options,
            mode: SelectMode::Multiple { value, on_change },
        }
    }

    /// Pick `option`.
    ///
    /// Multi-select toggles membership. Single-select reports the option
    /// unless it already is the current value, in which case nothing fires.
    pub fn select(&mut self, option: &SelectOption) {
        match &mut self.mode {
            SelectMode::Multiple { value, on_change } => {
                let next = engine::toggled(value, option);
                crate::log::log_change(&describe_many(&next));
                (*on_change)(next);
            }
            SelectMode::Single { value, on_change } => {
                if let Some(next) = engine::replaced(*value, option) {
                    crate::log::log_change(&next.label);
                    (*on_change)(Some(next));
                }
            }
        }
    }

    /// Report an empty selection, even if it already is empty.
    pub fn clear(&mut self) {
        crate::log::log_change("<cleared>");
        match &mut self.mode {
            SelectMode::Multiple { on_change, .. } => (*on_change)(Vec::new()),
            SelectMode::Single { on_change, .. } => (*on_change)(None),
        }
    }

    pub fn is_option_selected(&self, option: &SelectOption) -> bool {
        match &self.mode {
            SelectMode::Multiple { value, .. } => engine::contains(value, option),
            SelectMode::Single { value, .. } => *value == Some(option),
        }
    }

    /// The selected options, in display order for the value area.
    pub fn selected(&self) -> Vec<&SelectOption> {
        match &self.mode {
            SelectMode::Multiple { value, .. } => value.iter().collect(),
            SelectMode::Single { value, .. } => value.iter().copied().collect(),
        }
    }
}

fn describe_many(value: &[SelectOption]) -> String {
    let labels: Vec<&str> = value.iter().map(|o| o.label.as_str()).collect();
    format!("[{}]", labels.join(", "))
}
