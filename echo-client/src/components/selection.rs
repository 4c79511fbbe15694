//! Index-based row selection state.

use std::collections::BTreeSet;

/// Selection mode for components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// No selection allowed
    #[default]
    None,
    /// Single row selection
    Single,
    /// Multiple rows can be selected (modifier click, shift range)
    Multiple,
}

impl SelectionMode {
    pub fn is_enabled(self) -> bool {
        self != SelectionMode::None
    }

    pub fn is_multiple(self) -> bool {
        self == SelectionMode::Multiple
    }
}

/// Selected rows plus the anchor for shift-extension.
///
/// The anchor is not itself a selection bit; it survives [`clear`](Self::clear)
/// so a later shift click still extends from it.
#[derive(Debug, Clone, Default)]
pub struct RowSelection {
    selected: BTreeSet<usize>,
    anchor: Option<usize>,
}

impl RowSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected rows in ascending order.
    pub fn selected(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.selected.contains(&row)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn set_anchor(&mut self, row: usize) {
        self.anchor = Some(row);
    }

    /// Set one row's state. Returns true when the state changed.
    pub fn set(&mut self, row: usize, selected: bool) -> bool {
        if selected {
            self.selected.insert(row)
        } else {
            self.selected.remove(&row)
        }
    }

    /// Clear all selection.
    /// Returns the rows that were deselected.
    pub fn clear(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.selected).into_iter().collect()
    }

    /// Select every row between the anchor and `target`, inclusive.
    /// Returns the rows that were newly selected.
    pub fn extend_to(&mut self, target: usize) -> Vec<usize> {
        let anchor = self.anchor.unwrap_or(target);
        let (start, end) = if anchor <= target {
            (anchor, target)
        } else {
            (target, anchor)
        };
        (start..=end).filter(|&row| self.selected.insert(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_both_directions() {
        let mut selection = RowSelection::new();
        selection.set_anchor(5);
        assert_eq!(selection.extend_to(2), vec![2, 3, 4, 5]);
        assert_eq!(selection.extend_to(6), vec![6]);
        assert_eq!(selection.selected(), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_clear_keeps_anchor() {
        let mut selection = RowSelection::new();
        selection.set_anchor(1);
        selection.set(1, true);
        selection.set(4, true);
        assert_eq!(selection.clear(), vec![1, 4]);
        assert!(selection.is_empty());
        assert_eq!(selection.anchor(), Some(1));
    }

    #[test]
    fn test_set_reports_change() {
        let mut selection = RowSelection::new();
        assert!(selection.set(0, true));
        assert!(!selection.set(0, true));
        assert!(selection.set(0, false));
        assert!(!selection.is_selected(0));
    }
}
