//! Pure selection rules.
//!
//! Nothing here touches widget state or invokes callbacks; these functions
//! only compute what a selection interaction would produce.

use super::option::SelectOption;

/// Whether `option` is a member of a multi-select value.
pub fn contains(value: &[SelectOption], option: &SelectOption) -> bool {
    value.iter().any(|selected| selected == option)
}

/// Toggle `option` in a multi-select value.
///
/// Members are removed (remaining order preserved), non-members are appended.
pub fn toggled(value: &[SelectOption], option: &SelectOption) -> Vec<SelectOption> {
    if contains(value, option) {
        value
            .iter()
            .filter(|selected| *selected != option)
            .cloned()
            .collect()
    } else {
        let mut next = Vec::with_capacity(value.len() + 1);
        next.extend_from_slice(value);
        next.push(option.clone());
        next
    }
}

/// The new single-select value for picking `option`, or `None` when
/// `option` is already the current value and nothing should change.
pub fn replaced(current: Option<&SelectOption>, option: &SelectOption) -> Option<SelectOption> {
    match current {
        Some(current) if current == option => None,
        _ => Some(option.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> (SelectOption, SelectOption, SelectOption) {
        (
            SelectOption::new("A", 1),
            SelectOption::new("B", 2),
            SelectOption::new("C", 3),
        )
    }

    #[test]
    fn test_toggled_appends_non_member() {
        let (a, b, c) = abc();
        let next = toggled(&[a.clone(), b.clone()], &c);
        assert_eq!(next, vec![a, b, c]);
    }

    #[test]
    fn test_toggled_removes_member_preserving_order() {
        let (a, b, c) = abc();
        let next = toggled(&[a.clone(), b.clone(), c.clone()], &b);
        assert_eq!(next, vec![a, c]);
    }

    #[test]
    fn test_toggled_on_empty() {
        let (a, _, _) = abc();
        assert_eq!(toggled(&[], &a), vec![a]);
    }

    #[test]
    fn test_replaced_same_option_is_noop() {
        let (a, b, _) = abc();
        assert_eq!(replaced(Some(&a), &a), None);
        assert_eq!(replaced(Some(&a), &b), Some(b.clone()));
        assert_eq!(replaced(None, &b), Some(b));
    }
}
