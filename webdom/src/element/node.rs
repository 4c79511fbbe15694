use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{Extent, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

pub(crate) fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Markup
    pub attributes: BTreeMap<String, String>,
    pub text: Option<String>,

    // Visual
    pub style: Style,
    /// Style saved by the first temporary style application.
    pub(crate) original_style: Option<Style>,

    // Form state
    pub selected: bool,
    pub disabled: bool,

    // Geometry reported by the host
    pub extent: Extent,

    // Tree links, maintained by the document
    pub(crate) parent: Option<String>,
    pub(crate) children: Vec<String>,

    // Children declared through the builder, attached on insert
    pub(crate) pending: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into().to_ascii_lowercase();
        Self {
            id: generate_id(&tag),
            tag,
            attributes: BTreeMap::new(),
            text: None,
            style: Style::default(),
            original_style: None,
            selected: false,
            disabled: false,
            extent: Extent::default(),
            parent: None,
            children: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn css(mut self, css_text: &str) -> Self {
        self.style.set_css_text(css_text);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn extent(mut self, width: i32, height: i32) -> Self {
        self.extent = Extent::new(width, height);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.pending.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.pending.extend(children);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn child_ids(&self) -> &[String] {
        &self.children
    }

    pub fn has_original_style(&self) -> bool {
        self.original_style.is_some()
    }
}
