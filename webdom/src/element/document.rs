use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;

use super::node::{generate_id, Element};
use crate::error::DomError;
use crate::listener::{ListenerTable, ListenerTarget};
use crate::types::{Extent, Style};

/// Id of the element every document is created with.
pub const ROOT_ID: &str = "root";

/// A structural change recorded by the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    ChildAdded {
        parent: String,
        child: String,
        index: usize,
    },
    ChildRemoved {
        parent: String,
        child: String,
    },
}

/// Give every element in the subtree without an id a generated one.
fn assign_ids(element: &mut Element) {
    if element.id.is_empty() {
        element.id = generate_id(&element.tag);
    }
    for child in &mut element.pending {
        assign_ids(child);
    }
}

/// In-memory element store standing in for the browser document.
///
/// Elements are addressed by id. Detached elements stay in the store until
/// [`Document::remove`] drops them, so a node can be taken out and put back.
#[derive(Debug, Clone)]
pub struct Document {
    elements: HashMap<String, Element>,
    listeners: ListenerTable,
    mutations: Vec<Mutation>,
    layout_redraws: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut elements = HashMap::new();
        elements.insert(ROOT_ID.to_string(), Element::new("body").id(ROOT_ID));
        Self {
            elements,
            listeners: ListenerTable::new(),
            mutations: Vec::new(),
            layout_redraws: 0,
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// True if the element is reachable from the root.
    pub fn is_attached(&self, id: &str) -> bool {
        self.ancestors(id).last().map(String::as_str) == Some(ROOT_ID)
    }

    fn require(&self, id: &str) -> Result<&Element, DomError> {
        self.elements
            .get(id)
            .ok_or_else(|| DomError::NoSuchElement(id.to_string()))
    }

    fn require_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| DomError::NoSuchElement(id.to_string()))
    }

    pub fn parent(&self, id: &str) -> Option<&str> {
        self.elements.get(id)?.parent.as_deref()
    }

    pub fn children(&self, id: &str) -> &[String] {
        self.elements
            .get(id)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn child_at(&self, id: &str, index: usize) -> Option<&str> {
        self.children(id).get(index).map(String::as_str)
    }

    pub fn index_of(&self, parent: &str, child: &str) -> Option<usize> {
        self.children(parent).iter().position(|c| c == child)
    }

    /// The element itself followed by each ancestor up to the topmost one.
    pub fn ancestors(&self, id: &str) -> Vec<String> {
        let mut chain = Vec::new();
        let mut current = self.elements.get(id).map(|_| id.to_string());
        while let Some(node) = current {
            current = self.parent(&node).map(str::to_string);
            chain.push(node);
        }
        chain
    }

    // =========================================================================
    // Creation and tree mutation
    // =========================================================================

    /// Create a detached element. A generated id is used when `id` is `None`.
    pub fn create_element(&mut self, tag: &str, id: Option<&str>) -> Result<String, DomError> {
        let mut element = Element::new(tag);
        if let Some(id) = id {
            element.id = id.to_string();
        }
        self.insert(element)
    }

    /// Add an element (and any builder children) to the store, detached.
    ///
    /// Fails without touching the document if any id in the subtree is
    /// already taken.
    pub fn insert(&mut self, mut element: Element) -> Result<String, DomError> {
        assign_ids(&mut element);
        self.check_ids(&element, &mut HashSet::new())?;
        self.insert_checked(element)
    }

    fn check_ids<'a>(
        &self,
        element: &'a Element,
        seen: &mut HashSet<&'a str>,
    ) -> Result<(), DomError> {
        if self.elements.contains_key(&element.id) || !seen.insert(element.id.as_str()) {
            return Err(DomError::DuplicateId(element.id.clone()));
        }
        for child in &element.pending {
            self.check_ids(child, seen)?;
        }
        Ok(())
    }

    fn insert_checked(&mut self, mut element: Element) -> Result<String, DomError> {
        let id = element.id.clone();
        let pending = std::mem::take(&mut element.pending);
        element.parent = None;
        element.children.clear();
        self.elements.insert(id.clone(), element);
        for child in pending {
            let child_id = self.insert_checked(child)?;
            self.append_child(&id, &child_id)?;
        }
        Ok(id)
    }

    /// Insert `element` and append it under `parent`.
    pub fn append(&mut self, parent: &str, element: Element) -> Result<String, DomError> {
        self.require(parent)?;
        let id = self.insert(element)?;
        self.append_child(parent, &id)?;
        Ok(id)
    }

    pub fn append_child(&mut self, parent: &str, child: &str) -> Result<(), DomError> {
        let index = self.children(parent).len();
        self.insert_at(parent, child, index)
    }

    /// Insert `child` before `reference`, which must be a child of `parent`.
    pub fn insert_before(
        &mut self,
        parent: &str,
        child: &str,
        reference: &str,
    ) -> Result<(), DomError> {
        if self.parent(reference) != Some(parent) {
            return Err(DomError::NotAChild {
                parent: parent.to_string(),
                child: reference.to_string(),
            });
        }
        if child == reference {
            return Ok(());
        }
        self.detach(child)?;
        let index = self
            .index_of(parent, reference)
            .unwrap_or_else(|| self.children(parent).len());
        self.insert_at(parent, child, index)
    }

    /// Insert `child` at `index` under `parent`; an index past the end appends.
    pub fn insert_at(&mut self, parent: &str, child: &str, index: usize) -> Result<(), DomError> {
        self.require(parent)?;
        self.require(child)?;
        if self.ancestors(parent).iter().any(|a| a == child) {
            return Err(DomError::HierarchyCycle(child.to_string()));
        }
        self.detach(child)?;

        let parent_element = self.require_mut(parent)?;
        let index = index.min(parent_element.children.len());
        parent_element.children.insert(index, child.to_string());
        self.require_mut(child)?.parent = Some(parent.to_string());

        log::trace!("[dom] {child} added to {parent} at {index}");
        self.mutations.push(Mutation::ChildAdded {
            parent: parent.to_string(),
            child: child.to_string(),
            index,
        });
        Ok(())
    }

    /// Take an element out of its parent, keeping it (and its subtree) in the store.
    pub fn detach(&mut self, id: &str) -> Result<(), DomError> {
        let Some(parent) = self.require(id)?.parent.clone() else {
            return Ok(());
        };
        if let Some(parent_element) = self.elements.get_mut(&parent) {
            parent_element.children.retain(|c| c != id);
        }
        self.require_mut(id)?.parent = None;

        log::trace!("[dom] {id} removed from {parent}");
        self.mutations.push(Mutation::ChildRemoved {
            parent,
            child: id.to_string(),
        });
        Ok(())
    }

    /// Detach an element and drop it with its whole subtree and listeners.
    pub fn remove(&mut self, id: &str) -> Result<(), DomError> {
        self.detach(id)?;
        let mut stack = vec![id.to_string()];
        while let Some(node) = stack.pop() {
            if let Some(element) = self.elements.remove(&node) {
                stack.extend(element.children);
            }
            self.listeners.remove_all(&ListenerTarget::Element(node));
        }
        Ok(())
    }

    /// Remove (and drop) every child of `id`.
    pub fn clear_children(&mut self, id: &str) -> Result<(), DomError> {
        let children = self.require(id)?.children.clone();
        for child in children.iter().rev() {
            self.remove(child)?;
        }
        Ok(())
    }

    // =========================================================================
    // Attributes and text
    // =========================================================================

    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.elements.get(id)?.attribute(name)
    }

    pub fn set_attribute(
        &mut self,
        id: &str,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        self.require_mut(id)?
            .attributes
            .insert(name.to_string(), value.into());
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: &str, name: &str) -> Result<(), DomError> {
        self.require_mut(id)?.attributes.remove(name);
        Ok(())
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id)?.text.as_deref()
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> Result<(), DomError> {
        self.require_mut(id)?.text = Some(text.into());
        Ok(())
    }

    // =========================================================================
    // Style
    // =========================================================================

    pub fn style(&self, id: &str) -> Option<&Style> {
        self.elements.get(id).map(|e| &e.style)
    }

    /// Shorthand for reading one style property.
    pub fn style_property(&self, id: &str, name: &str) -> Option<&str> {
        self.style(id)?.get(name)
    }

    pub fn set_style_property(
        &mut self,
        id: &str,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        self.require_mut(id)?.style.set(name, value);
        Ok(())
    }

    pub fn set_css_text(&mut self, id: &str, css_text: &str) -> Result<(), DomError> {
        self.require_mut(id)?.style.set_css_text(css_text);
        Ok(())
    }

    pub fn apply_css_text(&mut self, id: &str, css_text: &str) -> Result<(), DomError> {
        self.require_mut(id)?.style.apply_css_text(css_text);
        Ok(())
    }

    /// Apply a style that [`Document::restore_original_style`] can undo.
    pub fn apply_temporary_style(&mut self, id: &str, css_text: &str) -> Result<(), DomError> {
        let element = self.require_mut(id)?;
        if element.original_style.is_none() {
            element.original_style = Some(element.style.clone());
        }
        element.style.apply_css_text(css_text);
        Ok(())
    }

    /// Undo every temporary style applied since the last restore.
    pub fn restore_original_style(&mut self, id: &str) -> Result<(), DomError> {
        let element = self.require_mut(id)?;
        if let Some(original) = element.original_style.take() {
            element.style = original;
        }
        Ok(())
    }

    // =========================================================================
    // Form state
    // =========================================================================

    /// Option children of a select element, in order.
    pub fn options(&self, select: &str) -> Vec<String> {
        self.children(select)
            .iter()
            .filter(|c| self.elements.get(*c).is_some_and(|e| e.tag == "option"))
            .cloned()
            .collect()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.selected)
    }

    pub fn set_selected(&mut self, id: &str, selected: bool) -> Result<(), DomError> {
        self.require_mut(id)?.selected = selected;
        Ok(())
    }

    /// Index of the first selected option, or -1.
    pub fn selected_index(&self, select: &str) -> i32 {
        self.options(select)
            .iter()
            .position(|o| self.is_selected(o))
            .map_or(-1, |i| i as i32)
    }

    /// Select exactly the option at `index`; -1 (or out of range) clears.
    pub fn set_selected_index(&mut self, select: &str, index: i32) -> Result<(), DomError> {
        self.require(select)?;
        for (i, option) in self.options(select).iter().enumerate() {
            self.set_selected(option, i as i32 == index)?;
        }
        Ok(())
    }

    /// What the browser does when the user picks an option.
    ///
    /// Single selects (and multi selects without `extend`) end up with only
    /// `index` selected; multi selects with `extend` toggle it.
    pub fn choose_option(&mut self, select: &str, index: usize, extend: bool) -> Result<(), DomError> {
        let options = self.options(select);
        let Some(option) = options.get(index) else {
            return Err(DomError::NoSuchElement(format!("{select}[{index}]")));
        };
        let multiple = self.attribute(select, "multiple").is_some();
        if multiple && extend {
            let selected = self.is_selected(option);
            self.set_selected(option, !selected)
        } else {
            self.set_selected_index(select, index as i32)
        }
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.disabled)
    }

    pub fn set_disabled(&mut self, id: &str, disabled: bool) -> Result<(), DomError> {
        self.require_mut(id)?.disabled = disabled;
        Ok(())
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    pub fn extent(&self, id: &str) -> Extent {
        self.elements.get(id).map(|e| e.extent).unwrap_or_default()
    }

    pub fn set_extent(&mut self, id: &str, width: i32, height: i32) -> Result<(), DomError> {
        self.require_mut(id)?.extent = Extent::new(width, height);
        Ok(())
    }

    /// Ask the host to re-run its virtual positioning pass.
    pub fn request_layout_redraw(&mut self) {
        self.layout_redraws += 1;
    }

    pub fn layout_redraws(&self) -> usize {
        self.layout_redraws
    }

    // =========================================================================
    // Listeners and journal
    // =========================================================================

    pub fn listeners(&self) -> &ListenerTable {
        &self.listeners
    }

    pub fn listeners_mut(&mut self) -> &mut ListenerTable {
        &mut self.listeners
    }

    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    pub fn take_mutations(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.mutations)
    }

    /// Indented outline of the subtree under `id`, for debugging.
    pub fn dump(&self, id: &str) -> String {
        let mut out = String::new();
        self.dump_into(id, 0, &mut out);
        out
    }

    fn dump_into(&self, id: &str, depth: usize, out: &mut String) {
        let Some(element) = self.elements.get(id) else {
            return;
        };
        let _ = write!(out, "{}<{} id=\"{}\"", "  ".repeat(depth), element.tag, element.id);
        for (name, value) in &element.attributes {
            let _ = write!(out, " {name}=\"{value}\"");
        }
        if !element.style.is_empty() {
            let _ = write!(out, " style=\"{}\"", element.style);
        }
        if element.selected {
            out.push_str(" selected");
        }
        out.push('>');
        if let Some(text) = &element.text {
            out.push_str(text);
        }
        out.push('\n');
        for child in &element.children {
            self.dump_into(child, depth + 1, out);
        }
    }
}
