//! Transient UI state owned by a select instance.

/// Open/closed flag plus the keyboard/hover cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectState {
    is_open: bool,
    highlighted_index: usize,
}

impl SelectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted_index
    }

    /// Open the list. The cursor returns to the first row on every
    /// closed-to-open transition.
    pub fn open(&mut self) {
        if !self.is_open {
            self.is_open = true;
            self.highlighted_index = 0;
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Point the cursor at a row directly (pointer hover).
    pub fn highlight(&mut self, index: usize) {
        self.highlighted_index = index;
    }

    /// Move the cursor by one row. Moves that would leave `[0, len - 1]`
    /// are dropped; returns whether the cursor moved.
    pub fn step(&mut self, forward: bool, len: usize) -> bool {
        let next = if forward {
            self.highlighted_index.checked_add(1)
        } else {
            self.highlighted_index.checked_sub(1)
        };
        match next {
            Some(next) if next < len => {
                self.highlighted_index = next;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let state = SelectState::new();
        assert!(!state.is_open());
        assert_eq!(state.highlighted_index(), 0);
    }

    #[test]
    fn test_open_resets_cursor() {
        let mut state = SelectState::new();
        state.open();
        state.highlight(2);
        state.close();
        state.toggle();
        assert!(state.is_open());
        assert_eq!(state.highlighted_index(), 0);
    }

    #[test]
    fn test_open_while_open_keeps_cursor() {
        let mut state = SelectState::new();
        state.open();
        state.highlight(1);
        state.open();
        assert_eq!(state.highlighted_index(), 1);
    }

    #[test]
    fn test_step_is_clamped_without_wrap() {
        let mut state = SelectState::new();
        state.open();
        assert!(!state.step(false, 3));
        assert!(state.step(true, 3));
        assert!(state.step(true, 3));
        assert!(!state.step(true, 3));
        assert_eq!(state.highlighted_index(), 2);
    }

    #[test]
    fn test_step_on_empty_list() {
        let mut state = SelectState::new();
        state.open();
        assert!(!state.step(true, 0));
        assert_eq!(state.highlighted_index(), 0);
    }
}
