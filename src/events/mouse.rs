//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by the select widgets during each render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::interaction::{HitTarget, InteractionRegistry};

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(registry: &InteractionRegistry, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match registry.hit(x, y) {
            Some(region) => Action::Press {
                widget: region.widget,
                target: region.target,
            },
            None => Action::PressOutside,
        },
        MouseEventKind::Moved => match registry.hit(x, y) {
            Some(region) => match region.target {
                HitTarget::Option(index) => Action::Hover {
                    widget: region.widget,
                    index,
                },
                _ => Action::None,
            },
            None => Action::None,
        },
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::interaction::{ClickRegion, InteractiveRegion, OVERLAY_PRIORITY};
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn registry() -> InteractionRegistry {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractiveRegion::new(
            0,
            HitTarget::Container,
            ClickRegion::new(0, 0, 20, 3),
        ));
        registry.register(
            InteractiveRegion::new(0, HitTarget::Option(1), ClickRegion::new(1, 5, 18, 1))
                .with_priority(OVERLAY_PRIORITY),
        );
        registry
    }

    #[test]
    fn test_left_click_hits_region() {
        let registry = registry();
        let down = MouseEventKind::Down(MouseButton::Left);
        assert_eq!(
            handle_mouse_event(&registry, mouse(down, 2, 5)),
            Action::Press {
                widget: 0,
                target: HitTarget::Option(1)
            }
        );
        assert_eq!(
            handle_mouse_event(&registry, mouse(down, 40, 40)),
            Action::PressOutside
        );
    }

    #[test]
    fn test_move_only_hovers_option_rows() {
        let registry = registry();
        assert_eq!(
            handle_mouse_event(&registry, mouse(MouseEventKind::Moved, 2, 5)),
            Action::Hover {
                widget: 0,
                index: 1
            }
        );
        assert_eq!(
            handle_mouse_event(&registry, mouse(MouseEventKind::Moved, 2, 1)),
            Action::None
        );
        assert_eq!(
            handle_mouse_event(
                &registry,
                mouse(MouseEventKind::Down(MouseButton::Right), 2, 5)
            ),
            Action::None
        );
    }
}
