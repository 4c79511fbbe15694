//! List selection controller.
//!
//! Renders either a native `select` element or, when the engine cannot
//! update native list boxes through the DOM, a synthesized `div` list whose
//! selection is drawn with inline styles.

mod events;
pub mod processor;

use webdom::{Element, EventKind, ListenerTarget};

use crate::components::ComponentContext;
use crate::error::ClientError;
use crate::outgoing::PropertyValue;

pub use processor::{ListContent, SelectorOp};

/// Inline style painted on selected items of a synthesized list.
pub const DHTML_SELECTION_STYLE: &str = "background-color:#0a246a;color:#ffffff;";

const LIST_BOX_SIZE: &str = "5";
const DHTML_DEFAULT_HEIGHT: &str = "6em";
const DHTML_DEFAULT_BORDER: &str = "1px inset #cfcfcf";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Native,
    Dhtml,
}

#[derive(Debug, Clone, Default)]
pub struct Selector {
    element_id: String,
    container_id: String,

    // Configuration, set before create
    pub(crate) enabled: bool,
    pub(crate) server_notify: bool,
    pub(crate) style: Option<String>,
    pub(crate) tab_index: Option<String>,
    pub(crate) tool_tip: Option<String>,
    pub(crate) list_box: bool,
    pub(crate) multiple_selection: bool,
    pub(crate) rollover_style: Option<String>,

    // Content
    values: Vec<String>,
    styles: Option<Vec<Option<String>>>,
    selected_indices: Vec<usize>,

    // Render state
    mode: RenderMode,
    rollover_index: Option<usize>,
    null_option_active: bool,
    created: bool,
}

impl Selector {
    pub fn new(element_id: impl Into<String>, container_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            container_id: container_id.into(),
            enabled: true,
            ..Self::default()
        }
    }

    pub fn set_content(&mut self, values: Vec<String>, styles: Option<Vec<Option<String>>>) {
        self.values = values;
        self.styles = styles;
    }

    pub fn set_selected_indices(&mut self, indices: Vec<usize>) {
        self.selected_indices = indices;
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn selected_indices(&self) -> &[usize] {
        &self.selected_indices
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn is_list_box(&self) -> bool {
        self.list_box
    }

    pub fn is_multiple_selection(&self) -> bool {
        self.multiple_selection
    }

    pub fn rollover_index(&self) -> Option<usize> {
        self.rollover_index
    }

    pub fn null_option_active(&self) -> bool {
        self.null_option_active
    }

    pub fn item_id(&self, index: usize) -> String {
        format!("{}_item_{}", self.element_id, index)
    }

    fn null_option_id(&self) -> String {
        format!("{}_null", self.element_id)
    }

    fn item_style(&self, index: usize) -> &str {
        self.styles
            .as_ref()
            .and_then(|styles| styles.get(index))
            .and_then(|s| s.as_deref())
            .unwrap_or("")
    }

    /// Event kinds the rendered element listens for.
    fn listener_kinds(&self, cx: &ComponentContext<'_>) -> Vec<EventKind> {
        let mut kinds = Vec::new();
        match self.mode {
            RenderMode::Dhtml => {
                kinds.push(EventKind::Click);
                if cx.quirks.suppress_select_start {
                    kinds.push(EventKind::SelectStart);
                }
            }
            RenderMode::Native => kinds.push(EventKind::Change),
        }
        if self.rollover_style.is_some() {
            kinds.push(EventKind::MouseOver);
            kinds.push(EventKind::MouseOut);
        }
        kinds
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render into the container and paint the initial selection.
    pub fn create(&mut self, cx: &mut ComponentContext<'_>) -> Result<(), ClientError> {
        if !cx.document.contains(&self.container_id) {
            return Err(ClientError::ContainerNotFound(self.container_id.clone()));
        }
        self.mode = if self.list_box && cx.quirks.select_list_dom_update {
            RenderMode::Dhtml
        } else {
            RenderMode::Native
        };

        let element = match self.mode {
            RenderMode::Dhtml => self.build_dhtml(),
            RenderMode::Native => self.build_select(),
        };
        cx.document.append(&self.container_id, element)?;

        for kind in self.listener_kinds(cx) {
            cx.document.listeners_mut().add(
                ListenerTarget::element(&self.element_id),
                kind,
                &self.element_id,
            );
        }
        self.created = true;
        log::debug!(
            "created {:?} selector {} with {} items",
            self.mode,
            self.element_id,
            self.values.len()
        );

        self.load_selection(cx)
    }

    fn apply_common(&self, mut element: Element) -> Element {
        if let Some(style) = &self.style {
            element = element.css(style);
        }
        if let Some(tool_tip) = &self.tool_tip {
            element = element.attr("title", tool_tip);
        }
        if let Some(tab_index) = &self.tab_index {
            element = element.attr("tabindex", tab_index);
        }
        element
    }

    fn build_dhtml(&self) -> Element {
        let mut list = self.apply_common(Element::div().id(&self.element_id));
        list.style.set("cursor", "default");
        list.style.set("overflow", "auto");
        if list.style.get("height").is_none() {
            list.style.set("height", DHTML_DEFAULT_HEIGHT);
        }
        if list.style.get("border").is_none() {
            list.style.set("border", DHTML_DEFAULT_BORDER);
        }
        list.children(self.values.iter().enumerate().map(|(i, value)| {
            Element::div()
                .id(self.item_id(i))
                .text(value)
                .css(self.item_style(i))
        }))
    }

    fn build_select(&mut self) -> Element {
        let mut select = self.apply_common(Element::new("select").id(&self.element_id));
        if !self.enabled {
            select = select.disabled(true);
        }
        if self.list_box {
            select = select.attr("size", LIST_BOX_SIZE);
            if self.multiple_selection {
                select = select.attr("multiple", "multiple");
            }
        }

        self.selected_indices.sort_unstable();
        let options: Vec<Element> = self
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                Element::new("option")
                    .id(self.item_id(i))
                    .text(value)
                    .css(self.item_style(i))
                    .selected(self.selected_indices.binary_search(&i).is_ok())
            })
            .collect();
        select.children(options)
    }

    /// Detach listeners and drop content. The rendered element stays in the
    /// document; the server removes it.
    pub fn dispose(&mut self, cx: &mut ComponentContext<'_>) {
        if self.created {
            let target = ListenerTarget::element(&self.element_id);
            for kind in self.listener_kinds(cx) {
                cx.document.listeners_mut().remove(&target, kind);
            }
        }
        self.values.clear();
        self.styles = None;
        self.rollover_index = None;
        self.created = false;
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Make the rendered selection match `selected_indices`.
    ///
    /// Indices outside the current values are dropped first.
    pub fn load_selection(&mut self, cx: &mut ComponentContext<'_>) -> Result<(), ClientError> {
        let len = self.values.len();
        self.selected_indices.retain(|&i| i < len);
        match self.mode {
            RenderMode::Dhtml => self.load_selection_dhtml(cx),
            RenderMode::Native => self.load_selection_native(cx),
        }
    }

    fn load_selection_dhtml(&self, cx: &mut ComponentContext<'_>) -> Result<(), ClientError> {
        for i in 0..self.values.len() {
            cx.document.set_css_text(&self.item_id(i), self.item_style(i))?;
        }
        for &i in &self.selected_indices {
            cx.document.apply_css_text(&self.item_id(i), DHTML_SELECTION_STYLE)?;
        }
        Ok(())
    }

    fn load_selection_native(&mut self, cx: &mut ComponentContext<'_>) -> Result<(), ClientError> {
        cx.document.set_selected_index(&self.element_id, -1)?;
        if self.selected_indices.is_empty() {
            return self.add_null_option(cx);
        }

        self.remove_null_option(cx)?;
        let mut selection_set = false;
        for &i in &self.selected_indices {
            let option = self.item_id(i);
            if cx.document.contains(&option) {
                cx.document.set_selected(&option, true)?;
                selection_set = true;
            }
        }
        if !selection_set {
            self.add_null_option(cx)?;
        }
        Ok(())
    }

    /// Read the selection back from the native `select` element.
    fn store_selection(&mut self, cx: &ComponentContext<'_>) {
        let prefix = format!("{}_item_", self.element_id);
        self.selected_indices = cx
            .document
            .options(&self.element_id)
            .iter()
            .filter(|option| cx.document.is_selected(option))
            .filter_map(|option| option.strip_prefix(&prefix)?.parse().ok())
            .collect();
    }

    /// Show a blank placeholder on drop-downs that would otherwise display
    /// their first item when nothing is selected.
    fn add_null_option(&mut self, cx: &mut ComponentContext<'_>) -> Result<(), ClientError> {
        if !cx.quirks.select_requires_null_option || self.list_box || self.null_option_active {
            return Ok(());
        }
        let null_id = cx.document.insert(
            Element::new("option")
                .id(self.null_option_id())
                .selected(true),
        )?;
        let first = cx.document.options(&self.element_id).into_iter().next();
        match first {
            Some(first) => cx.document.insert_before(&self.element_id, &null_id, &first)?,
            None => cx.document.append_child(&self.element_id, &null_id)?,
        }
        self.null_option_active = true;
        log::trace!("null option added to {}", self.element_id);
        Ok(())
    }

    fn remove_null_option(&mut self, cx: &mut ComponentContext<'_>) -> Result<(), ClientError> {
        if !self.null_option_active {
            return Ok(());
        }
        cx.document.remove(&self.null_option_id())?;
        self.null_option_active = false;
        log::trace!("null option removed from {}", self.element_id);
        Ok(())
    }

    /// Write the selection to the outgoing message, notifying the server
    /// immediately when it listens for actions.
    fn update_client_message(&self, cx: &mut ComponentContext<'_>) {
        cx.outgoing.set_property(
            &self.element_id,
            "selection",
            PropertyValue::items(self.selected_indices.iter().copied()),
        );
        if self.server_notify {
            cx.outgoing.set_action(&self.element_id, "action");
            cx.outgoing.request_connection();
        }
    }

    // =========================================================================
    // Rollover
    // =========================================================================

    fn set_rollover_index(
        &mut self,
        cx: &mut ComponentContext<'_>,
        index: Option<usize>,
    ) -> Result<(), ClientError> {
        let Some(rollover_style) = self.rollover_style.clone() else {
            return Ok(());
        };
        if let Some(old) = self.rollover_index {
            let old_id = self.item_id(old);
            if cx.document.contains(&old_id) {
                cx.document.set_css_text(&old_id, self.item_style(old))?;
                if self.mode == RenderMode::Dhtml && self.selected_indices.contains(&old) {
                    cx.document.apply_css_text(&old_id, DHTML_SELECTION_STYLE)?;
                }
            }
        }
        self.rollover_index = index;
        if let Some(new) = index {
            let new_id = self.item_id(new);
            if cx.document.contains(&new_id) {
                cx.document.apply_css_text(&new_id, &rollover_style)?;
            }
        }
        Ok(())
    }

    /// Index of the item containing `node`, found by walking up to the list
    /// element.
    fn node_index(&self, cx: &ComponentContext<'_>, node: &str) -> Option<usize> {
        let prefix = format!("{}_item_", self.element_id);
        for id in cx.document.ancestors(node) {
            if id == self.element_id {
                return None;
            }
            if let Some(index) = id.strip_prefix(&prefix) {
                return index.parse().ok();
            }
        }
        None
    }
}
