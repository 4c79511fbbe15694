//! Component registry.
//!
//! Maps element ids to the live controller bound to them. Event handlers
//! resolve their controller through the registry rather than through
//! properties stashed on DOM nodes.

use std::collections::HashMap;

use crate::components::Component;

#[derive(Default)]
pub struct ComponentRegistry {
    components: HashMap<String, Box<dyn Component>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a controller to its element id, returning any controller that
    /// was bound there before.
    pub fn register(&mut self, component: Box<dyn Component>) -> Option<Box<dyn Component>> {
        let id = component.element_id().to_string();
        log::debug!("registering {} {}", component.kind(), id);
        self.components.insert(id, component)
    }

    pub fn unregister(&mut self, id: &str) -> Option<Box<dyn Component>> {
        let removed = self.components.remove(id);
        if removed.is_some() {
            log::debug!("unregistered {}", id);
        }
        removed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.components.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&(dyn Component + 'static)> {
        self.components.get(id).map(|b| b.as_ref())
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut (dyn Component + 'static)> {
        self.components.get_mut(id).map(|b| b.as_mut())
    }

    /// Look up a controller by id and concrete type.
    pub fn lookup_as<T: Component>(&self, id: &str) -> Option<&T> {
        self.components.get(id)?.as_any().downcast_ref::<T>()
    }

    pub fn lookup_as_mut<T: Component>(&mut self, id: &str) -> Option<&mut T> {
        self.components.get_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    /// Remove the controller bound to `id` only if it has type `T`.
    pub fn unregister_as<T: Component>(&mut self, id: &str) -> Option<Box<dyn Component>> {
        self.lookup_as::<T>(id)?;
        self.unregister(id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use webdom::Document;

    use super::*;
    use crate::components::grid::Grid;
    use crate::components::selector::Selector;
    use crate::components::{ComponentContext, ComponentKind};
    use crate::input::DefaultInputGate;
    use crate::outgoing::ClientMessage;
    use crate::quirks::PlatformQuirks;

    #[test]
    fn test_register_replaces_by_element_id() {
        let mut registry = ComponentRegistry::new();
        assert!(registry.register(Box::new(Grid::new("t1"))).is_none());
        let previous = registry.register(Box::new(Selector::new("t1", "cell")));

        assert_eq!(previous.map(|c| c.kind()), Some(ComponentKind::Grid));
        assert_eq!(registry.len(), 1);
        assert!(registry.lookup_as::<Selector>("t1").is_some());
        assert!(registry.lookup_as::<Grid>("t1").is_none());
    }

    #[test]
    fn test_unregister_as_checks_type() {
        let mut registry = ComponentRegistry::new();
        registry.register(Box::new(Grid::new("t1")));
        assert!(registry.unregister_as::<Selector>("t1").is_none());
        assert!(registry.contains("t1"));
        assert!(registry.unregister_as::<Grid>("t1").is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get_mut_used_with_separate_context() {
        let mut registry = ComponentRegistry::new();
        registry.register(Box::new(Grid::new("t1")));
        let mut document = Document::new();
        let mut outgoing = ClientMessage::new();
        let quirks = PlatformQuirks::default();
        let input = DefaultInputGate::new();
        let mut cx = ComponentContext {
            document: &mut document,
            outgoing: &mut outgoing,
            quirks: &quirks,
            input: &input,
        };

        let component = registry.get_mut("t1").unwrap();
        component.dispose(&mut cx);
        assert_eq!(component.kind(), ComponentKind::Grid);
        assert_eq!(registry.get("t1").map(|c| c.element_id()), Some("t1"));
    }
}
