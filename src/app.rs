//! Host application state: the owner of both selects' values.

use serde::Serialize;

use crate::config::Config;
use crate::events::Action;
use crate::log;
use crate::select::{EventResult, KeyTarget, Select, SelectEvent, SelectKey, SelectOption, SelectProps};
use crate::tui::interaction::{HitTarget, InteractionRegistry, WidgetId};

/// Focusable element within a select widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Container,
    Chip(usize),
    Clear,
}

impl FocusTarget {
    fn key_target(self) -> KeyTarget {
        match self {
            FocusTarget::Container => KeyTarget::Container,
            FocusTarget::Chip(_) | FocusTarget::Clear => KeyTarget::Nested,
        }
    }
}

/// Which element currently holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub widget: WidgetId,
    pub target: FocusTarget,
}

/// Owner-side storage for a select's value, shaped by its mode.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotValue {
    Single(Option<SelectOption>),
    Multiple(Vec<SelectOption>),
}

/// A select widget together with the value its owner keeps for it.
#[derive(Debug, Clone)]
pub struct SelectSlot {
    pub title: String,
    pub select: Select,
    pub value: SlotValue,
}

impl SelectSlot {
    pub fn single(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            select: Select::new(),
            value: SlotValue::Single(None),
        }
    }

    pub fn multiple(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            select: Select::new(),
            value: SlotValue::Multiple(Vec::new()),
        }
    }

    /// Build this render cycle's props and hand them to `f`.
    ///
    /// Any value reported through the change callback is stored once `f`
    /// returns, the way an owner commits state between renders.
    pub fn with_props<R>(
        &mut self,
        options: &[SelectOption],
        f: impl FnOnce(&mut Select, &mut SelectProps<'_>) -> R,
    ) -> R {
        match &mut self.value {
            SlotValue::Single(value) => {
                let mut changed = None;
                let mut on_change = |next: Option<SelectOption>| changed = Some(next);
                let mut props = SelectProps::single(options, value.as_ref(), &mut on_change);
                let result = f(&mut self.select, &mut props);
                if let Some(next) = changed {
                    *value = next;
                }
                result
            }
            SlotValue::Multiple(value) => {
                let mut changed = None;
                let mut on_change = |next: Vec<SelectOption>| changed = Some(next);
                let mut props = SelectProps::multiple(options, value.as_slice(), &mut on_change);
                let result = f(&mut self.select, &mut props);
                if let Some(next) = changed {
                    *value = next;
                }
                result
            }
        }
    }

    pub fn dispatch(&mut self, options: &[SelectOption], event: SelectEvent) -> EventResult {
        self.with_props(options, |select, props| select.handle_event(event, props))
    }

    /// Focus stops inside this widget, in tab order.
    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        let mut targets = vec![FocusTarget::Container];
        if let SlotValue::Multiple(value) = &self.value {
            targets.extend((0..value.len()).map(FocusTarget::Chip));
        }
        targets.push(FocusTarget::Clear);
        targets
    }
}

/// Final selections, printed with `--json`.
#[derive(Debug, Serialize)]
pub struct SelectionSummary<'a> {
    pub single: Option<&'a SelectOption>,
    pub multiple: &'a [SelectOption],
}

#[derive(Debug)]
pub struct App {
    pub options: Vec<SelectOption>,
    pub slots: Vec<SelectSlot>,
    pub placeholder: String,
    pub focus: Option<Focus>,
    pub interactions: InteractionRegistry,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            options: config.options(),
            slots: vec![
                SelectSlot::single(config.single_title()),
                SelectSlot::multiple(config.multiple_title()),
            ],
            placeholder: config.placeholder().to_string(),
            focus: Some(Focus {
                widget: 0,
                target: FocusTarget::Container,
            }),
            interactions: InteractionRegistry::new(),
            should_quit: false,
        }
    }

    pub fn focus_for(&self, widget: WidgetId) -> Option<FocusTarget> {
        self.focus
            .filter(|focus| focus.widget == widget)
            .map(|focus| focus.target)
    }

    pub fn summary(&self) -> SelectionSummary<'_> {
        let mut summary = SelectionSummary {
            single: None,
            multiple: &[],
        };
        for slot in &self.slots {
            match &slot.value {
                SlotValue::Single(value) => summary.single = value.as_ref(),
                SlotValue::Multiple(value) => summary.multiple = value.as_slice(),
            }
        }
        summary
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::FocusNext => self.cycle_focus(true),
            Action::FocusPrev => self.cycle_focus(false),
            Action::Key(key) => self.handle_key(key),
            Action::Press { widget, target } => self.handle_press(widget, target),
            Action::PressOutside => self.set_focus(None),
            Action::FocusLost => {
                // Focus stays put so keys reach the same element once the
                // terminal is back in front.
                if let Some(focus) = self.focus {
                    self.dispatch(focus.widget, SelectEvent::Blur);
                }
            }
            Action::Hover { widget, index } => {
                self.dispatch(widget, SelectEvent::OptionHover(index));
            }
        }
    }

    fn dispatch(&mut self, widget: WidgetId, event: SelectEvent) -> EventResult {
        let options = &self.options;
        let result = match self.slots.get_mut(widget) {
            Some(slot) => slot.dispatch(options, event),
            None => EventResult::Ignored,
        };
        if result == EventResult::Consumed {
            log::log_event(&format!("select {} consumed {:?}", widget, event));
        }
        result
    }

    /// Move focus, blurring the widget that loses it.
    ///
    /// Moving between elements of the same widget still blurs it: focus
    /// leaves the container element either way.
    fn set_focus(&mut self, focus: Option<Focus>) {
        if self.focus == focus {
            return;
        }
        if let Some(previous) = self.focus {
            self.dispatch(previous.widget, SelectEvent::Blur);
        }
        log::log_event(&format!("focus {:?}", focus));
        self.focus = focus.map(|f| self.clamp_focus(f));
    }

    /// Chips disappear as values are removed; keep focus on something
    /// that still exists.
    fn clamp_focus(&self, focus: Focus) -> Focus {
        let Some(slot) = self.slots.get(focus.widget) else {
            return focus;
        };
        if slot.focus_targets().contains(&focus.target) {
            focus
        } else {
            Focus {
                widget: focus.widget,
                target: FocusTarget::Clear,
            }
        }
    }

    fn focus_ring(&self) -> Vec<Focus> {
        self.slots
            .iter()
            .enumerate()
            .flat_map(|(widget, slot)| {
                slot.focus_targets()
                    .into_iter()
                    .map(move |target| Focus { widget, target })
            })
            .collect()
    }

    fn cycle_focus(&mut self, forward: bool) {
        let ring = self.focus_ring();
        if ring.is_empty() {
            return;
        }
        let current = self
            .focus
            .and_then(|focus| ring.iter().position(|f| *f == focus));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => ring.len() - 1,
            (Some(i), true) => (i + 1) % ring.len(),
            (Some(i), false) => i.checked_sub(1).unwrap_or(ring.len() - 1),
        };
        self.set_focus(Some(ring[next]));
    }

    fn handle_key(&mut self, key: SelectKey) {
        let Some(focus) = self.focus else {
            return;
        };

        // Buttons inside the container activate on Enter/Space themselves;
        // the container handler sees the event as nested and ignores it.
        let activation = match (focus.target, key) {
            (FocusTarget::Chip(i), SelectKey::Enter | SelectKey::Space) => Some(SelectEvent::ChipClick(i)),
            (FocusTarget::Clear, SelectKey::Enter | SelectKey::Space) => Some(SelectEvent::ClearClick),
            _ => None,
        };

        let result = self.dispatch(
            focus.widget,
            SelectEvent::Key {
                key,
                target: focus.target.key_target(),
            },
        );

        if result == EventResult::Ignored
            && let Some(event) = activation
        {
            self.dispatch(focus.widget, event);
            self.focus = Some(self.clamp_focus(focus));
        }
    }

    fn handle_press(&mut self, widget: WidgetId, target: HitTarget) {
        // The container and its list rows hand focus to the container, even
        // from one of its own buttons. Buttons keep whatever focus they find
        // inside their widget.
        let to_container = matches!(target, HitTarget::Container | HitTarget::Option(_));
        if to_container || self.focus.map(|f| f.widget) != Some(widget) {
            self.set_focus(Some(Focus {
                widget,
                target: FocusTarget::Container,
            }));
        }

        let event = match target {
            HitTarget::Container => SelectEvent::ContainerClick,
            HitTarget::Chip(i) => SelectEvent::ChipClick(i),
            HitTarget::Clear => SelectEvent::ClearClick,
            HitTarget::Option(i) => SelectEvent::OptionClick(i),
        };
        self.dispatch(widget, event);

        if let Some(focus) = self.focus {
            self.focus = Some(self.clamp_focus(focus));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&Config::default().with_overrides(vec!["A".into(), "B".into(), "C".into()]))
    }

    fn multiple_value(app: &App) -> &[SelectOption] {
        match &app.slots[1].value {
            SlotValue::Multiple(value) => value,
            SlotValue::Single(_) => unreachable!(),
        }
    }

    #[test]
    fn test_owner_stores_reported_value() {
        let mut app = app();
        app.apply(Action::Key(SelectKey::ArrowDown));
        app.apply(Action::Key(SelectKey::ArrowDown));
        app.apply(Action::Key(SelectKey::Enter));

        assert_eq!(app.slots[0].value, SlotValue::Single(Some(app.options[1].clone())));
        assert!(!app.slots[0].select.is_open());
    }

    #[test]
    fn test_press_on_other_widget_blurs_previous() {
        let mut app = app();
        app.apply(Action::Press {
            widget: 0,
            target: HitTarget::Container,
        });
        assert!(app.slots[0].select.is_open());

        app.apply(Action::Press {
            widget: 1,
            target: HitTarget::Container,
        });
        assert!(!app.slots[0].select.is_open());
        assert!(app.slots[1].select.is_open());
        assert_eq!(app.focus_for(1), Some(FocusTarget::Container));
    }

    #[test]
    fn test_press_outside_blurs() {
        let mut app = app();
        app.apply(Action::Press {
            widget: 0,
            target: HitTarget::Container,
        });
        app.apply(Action::PressOutside);
        assert!(!app.slots[0].select.is_open());
        assert!(app.focus.is_none());
    }

    #[test]
    fn test_option_rows_toggle_multiple() {
        let mut app = app();
        for target in [HitTarget::Container, HitTarget::Option(2)] {
            app.apply(Action::Press { widget: 1, target });
        }
        for target in [HitTarget::Container, HitTarget::Option(0)] {
            app.apply(Action::Press { widget: 1, target });
        }
        assert_eq!(
            multiple_value(&app),
            &[app.options[2].clone(), app.options[0].clone()]
        );

        app.apply(Action::Press {
            widget: 1,
            target: HitTarget::Chip(0),
        });
        assert_eq!(multiple_value(&app), &[app.options[0].clone()]);

        app.apply(Action::Press {
            widget: 1,
            target: HitTarget::Clear,
        });
        assert!(multiple_value(&app).is_empty());
    }

    #[test]
    fn test_press_container_takes_focus_from_clear_button() {
        let mut app = app();
        app.apply(Action::FocusNext);
        assert_eq!(app.focus_for(0), Some(FocusTarget::Clear));

        app.apply(Action::Press {
            widget: 0,
            target: HitTarget::Container,
        });
        assert_eq!(app.focus_for(0), Some(FocusTarget::Container));
        assert!(app.slots[0].select.is_open());

        app.apply(Action::Key(SelectKey::ArrowDown));
        app.apply(Action::Key(SelectKey::Enter));
        assert_eq!(app.slots[0].value, SlotValue::Single(Some(app.options[1].clone())));
        assert!(!app.slots[0].select.is_open());
    }

    #[test]
    fn test_terminal_focus_loss_blurs_but_keeps_focus() {
        let mut app = app();
        app.apply(Action::Key(SelectKey::Space));
        assert!(app.slots[0].select.is_open());

        app.apply(Action::FocusLost);
        assert!(!app.slots[0].select.is_open());
        assert_eq!(app.focus_for(0), Some(FocusTarget::Container));

        app.apply(Action::Key(SelectKey::ArrowDown));
        assert!(app.slots[0].select.is_open());
    }

    #[test]
    fn test_tab_blurs_and_cycles_focus() {
        let mut app = app();
        app.apply(Action::Key(SelectKey::Space));
        assert!(app.slots[0].select.is_open());

        app.apply(Action::FocusNext);
        assert!(!app.slots[0].select.is_open());
        assert_eq!(app.focus_for(0), Some(FocusTarget::Clear));

        app.apply(Action::FocusNext);
        assert_eq!(app.focus_for(1), Some(FocusTarget::Container));

        app.apply(Action::FocusPrev);
        app.apply(Action::FocusPrev);
        assert_eq!(app.focus_for(0), Some(FocusTarget::Container));

        app.apply(Action::FocusPrev);
        assert_eq!(app.focus_for(1), Some(FocusTarget::Clear));
    }

    #[test]
    fn test_enter_on_clear_button_clears() {
        let mut app = app();
        app.apply(Action::Key(SelectKey::Enter));
        app.apply(Action::Key(SelectKey::Enter));
        assert_eq!(app.slots[0].value, SlotValue::Single(Some(app.options[0].clone())));

        app.apply(Action::FocusNext);
        app.apply(Action::Key(SelectKey::Enter));
        assert_eq!(app.slots[0].value, SlotValue::Single(None));
        // The container handler ignored the nested key, so the list stays shut
        assert!(!app.slots[0].select.is_open());
    }

    #[test]
    fn test_summary_serializes() {
        let mut app = app();
        for target in [HitTarget::Container, HitTarget::Option(1)] {
            app.apply(Action::Press { widget: 0, target });
        }
        let json = serde_json::to_string(&app.summary()).unwrap();
        assert_eq!(
            json,
            r#"{"single":{"label":"B","value":2.0},"multiple":[]}"#
        );
    }
}
