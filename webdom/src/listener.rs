use std::collections::HashMap;

use crate::event::EventKind;

/// Where a listener is attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Document,
    Element(String),
}

impl ListenerTarget {
    pub fn element(id: impl Into<String>) -> Self {
        Self::Element(id.into())
    }
}

/// One registered handler: the id of the component that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listener {
    pub kind: EventKind,
    pub owner: String,
}

/// Event listener registrations.
///
/// At most one listener per (target, kind); registering again replaces the
/// previous owner.
#[derive(Debug, Clone, Default)]
pub struct ListenerTable {
    listeners: HashMap<ListenerTarget, Vec<Listener>>,
}

impl ListenerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, target: ListenerTarget, kind: EventKind, owner: impl Into<String>) {
        let owner = owner.into();
        let entries = self.listeners.entry(target).or_default();
        match entries.iter_mut().find(|l| l.kind == kind) {
            Some(existing) => existing.owner = owner,
            None => entries.push(Listener { kind, owner }),
        }
    }

    /// Returns true if a listener was removed.
    pub fn remove(&mut self, target: &ListenerTarget, kind: EventKind) -> bool {
        let Some(entries) = self.listeners.get_mut(target) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|l| l.kind != kind);
        let removed = entries.len() != before;
        if entries.is_empty() {
            self.listeners.remove(target);
        }
        removed
    }

    pub fn remove_all(&mut self, target: &ListenerTarget) {
        self.listeners.remove(target);
    }

    pub fn owner(&self, target: &ListenerTarget, kind: EventKind) -> Option<&str> {
        self.listeners
            .get(target)?
            .iter()
            .find(|l| l.kind == kind)
            .map(|l| l.owner.as_str())
    }

    pub fn has(&self, target: &ListenerTarget, kind: EventKind) -> bool {
        self.owner(target, kind).is_some()
    }

    pub fn for_target(&self, target: &ListenerTarget) -> &[Listener] {
        self.listeners.get(target).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of registrations across all targets.
    pub fn len(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Number of registrations owned by `owner`.
    pub fn count_owned_by(&self, owner: &str) -> usize {
        self.listeners
            .values()
            .flatten()
            .filter(|l| l.owner == owner)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_replaces_same_kind() {
        let mut table = ListenerTable::new();
        let target = ListenerTarget::element("c_1");
        table.add(target.clone(), EventKind::Click, "a");
        table.add(target.clone(), EventKind::Click, "b");
        assert_eq!(table.len(), 1);
        assert_eq!(table.owner(&target, EventKind::Click), Some("b"));
    }

    #[test]
    fn test_remove_drops_empty_targets() {
        let mut table = ListenerTable::new();
        table.add(ListenerTarget::Document, EventKind::MouseMove, "split");
        assert!(table.remove(&ListenerTarget::Document, EventKind::MouseMove));
        assert!(!table.remove(&ListenerTarget::Document, EventKind::MouseMove));
        assert!(table.is_empty());
    }
}
