//! Tabbed pane controller.
//!
//! Builds a header row of tab buttons above (or below) a content area with
//! one panel per tab. Exactly one panel is displayed: the active tab's.

mod events;
pub mod processor;
mod style;
mod tab;

use webdom::{Element, EventKind, ListenerTarget};

use crate::components::ComponentContext;
use crate::error::ClientError;

pub use processor::TabbedPaneOp;
pub use style::{BorderType, TabPosition, TabStateStyle, TabStyle};
pub use tab::Tab;

#[derive(Debug, Clone)]
pub struct TabbedPane {
    element_id: String,
    container_id: String,
    active_tab: Option<String>,
    pub(crate) enabled: bool,
    pub(crate) style: TabStyle,
    tabs: Vec<Tab>,
    created: bool,
}

impl TabbedPane {
    pub fn new(
        element_id: impl Into<String>,
        container_id: impl Into<String>,
        active_tab: Option<String>,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            container_id: container_id.into(),
            active_tab,
            enabled: true,
            style: TabStyle::default(),
            tabs: Vec::new(),
            created: false,
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn active_tab(&self) -> Option<&str> {
        self.active_tab.as_deref()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    pub fn tab_mut(&mut self, tab_id: &str) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == tab_id)
    }

    pub fn style(&self) -> &TabStyle {
        &self.style
    }

    fn header_container_id(&self) -> String {
        format!("{}_header", self.element_id)
    }

    fn header_row_id(&self) -> String {
        format!("{}_header_tr", self.element_id)
    }

    pub fn content_container_id(&self) -> String {
        format!("{}_content", self.element_id)
    }

    pub fn header_cell_id(&self, tab_id: &str) -> String {
        format!("{}_header_td_{}", self.element_id, tab_id)
    }

    pub fn header_div_id(&self, tab_id: &str) -> String {
        format!("{}_header_div_{}", self.element_id, tab_id)
    }

    pub fn content_id(&self, tab_id: &str) -> String {
        format!("{}_content_{}", self.element_id, tab_id)
    }

    /// Tab id encoded in a header div id of this pane.
    pub fn tab_id_of<'a>(&self, element_id: &'a str) -> Option<&'a str> {
        element_id.strip_prefix(&self.header_div_id(""))
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    pub fn create(&mut self, cx: &mut ComponentContext<'_>) -> Result<(), ClientError> {
        if !cx.document.contains(&self.container_id) {
            return Err(ClientError::ContainerNotFound(self.container_id.clone()));
        }
        let style = &self.style;
        let bottom = style.tab_position == TabPosition::Bottom;
        let insets = style.rendered_insets();
        let active_border = style.active.border();

        let mut pane = Element::div().id(&self.element_id);
        pane.style.set("position", "absolute");
        pane.style.set("overflow", "hidden");
        pane.style.set("top", format!("{}px", insets.top));
        pane.style.set("bottom", format!("{}px", insets.bottom));
        pane.style.set("left", format!("{}px", insets.left));
        pane.style.set("right", format!("{}px", insets.right));

        let mut header_container = Element::div().id(self.header_container_id());
        header_container.style.set("overflow", "hidden");
        header_container.style.set("z-index", "1");
        header_container.style.set("position", "absolute");
        header_container
            .style
            .set(if bottom { "bottom" } else { "top" }, "0px");
        header_container.style.set("left", format!("{}px", style.tab_inset));
        header_container.style.set("right", format!("{}px", style.tab_inset));
        header_container
            .style
            .set("height", format!("{}px", style.header_container_height()));

        let header_table = Element::new("table")
            .css("border-width:0px;border-collapse:collapse;padding:0px;")
            .child(Element::new("tbody").child(Element::new("tr").id(self.header_row_id())));
        let header_container = header_container.child(header_table);

        let mut content = Element::div().id(self.content_container_id());
        content.style.set("position", "absolute");
        content.style.set("overflow", "hidden");
        content.style.set("background-color", style.default_background.to_css());
        content.style.set("color", style.default_foreground.to_css());
        if let Some(font) = &style.default_font {
            content.style.apply_css_text(font);
        }
        let header_offset = format!("{}px", style.header_height);
        let header_offset = header_offset.as_str();
        content.style.set("top", if bottom { "0px" } else { header_offset });
        content.style.set("bottom", if bottom { header_offset } else { "0px" });
        content.style.set("left", "0px");
        content.style.set("right", "0px");
        match style.border_type {
            BorderType::None => content.style.set("border", "0px none"),
            BorderType::Surround => content.style.set("border", active_border.as_str()),
            BorderType::ParallelToTabs => {
                content.style.set("border-top", active_border.as_str());
                content.style.set("border-bottom", active_border.as_str());
            }
            BorderType::AdjacentToTabs => content.style.set(
                if bottom { "border-bottom" } else { "border-top" },
                active_border.as_str(),
            ),
        }

        let pane = pane.child(header_container).child(content);
        cx.document.append(&self.container_id, pane)?;
        cx.document.listeners_mut().add(
            ListenerTarget::element(self.header_container_id()),
            EventKind::Click,
            &self.element_id,
        );
        self.created = true;
        log::debug!("created tabbed pane {}", self.element_id);
        Ok(())
    }

    /// Insert a tab at `index` (clamped to the tab count), rendering its
    /// header and a hidden content panel. Selects it if it is the pane's
    /// active tab.
    pub fn add_tab(
        &mut self,
        cx: &mut ComponentContext<'_>,
        tab: Tab,
        index: usize,
    ) -> Result<(), ClientError> {
        let style = &self.style;
        let bottom = style.tab_position == TabPosition::Bottom;
        let inactive_border = style.inactive.border();

        let cell = Element::new("td")
            .id(self.header_cell_id(&tab.id))
            .css("border-width:0px;padding:0px;vertical-align:top;");

        let mut header = Element::div().id(self.header_div_id(&tab.id));
        header.style.set("overflow", "hidden");
        header.style.set("white-space", "nowrap");
        header
            .style
            .set("margin-top", format!("{}px", style.header_margin_top(false)));
        header.style.set("border-left", inactive_border.as_str());
        header.style.set("border-right", inactive_border.as_str());
        if bottom {
            header.style.set("border-top", "0px none");
            header.style.set("border-bottom", inactive_border.as_str());
        } else {
            header.style.set("border-top", inactive_border.as_str());
            header.style.set("border-bottom", "0px none");
        }
        if style.tab_spacing != 0 {
            header
                .style
                .set("margin-right", format!("{}px", style.tab_spacing));
        }
        header
            .style
            .set("height", format!("{}px", style.header_div_height(false)));
        header
            .style
            .set("background-color", style.inactive.background.to_css());
        header.style.set("color", style.inactive.foreground_css());
        let padding = style.header_padding;
        header.style.set("padding-top", format!("{}px", padding.top));
        header.style.set("padding-bottom", format!("{}px", padding.bottom));
        header.style.set("padding-left", format!("{}px", padding.left));
        header.style.set("padding-right", format!("{}px", padding.right));
        header.style.set("cursor", "pointer");
        if let Some(font) = &style.inactive.font {
            header.style.apply_css_text(font);
        }
        if let Some(image) = &style.inactive.background_image {
            header.style.apply_css_text(image);
        }
        let cell = cell.child(header.text(tab.display_title()));

        let mut content = Element::div().id(self.content_id(&tab.id));
        content.style.set("display", "none");
        content.style.set("position", "absolute");
        content.style.set("overflow", "auto");
        content.style.set("left", "0px");
        content.style.set("right", "0px");
        content.style.set("bottom", "0px");
        content.style.set("top", "0px");
        content
            .style
            .set("padding", style.content_insets(tab.pane).to_string());

        cx.document.append(&self.content_container_id(), content)?;
        let cell_id = cx.document.insert(cell)?;
        cx.document.insert_at(&self.header_row_id(), &cell_id, index)?;

        let index = index.min(self.tabs.len());
        let tab_id = tab.id.clone();
        self.tabs.insert(index, tab);
        log::debug!("tab {} added to {} at {}", tab_id, self.element_id, index);

        if self.active_tab.as_deref() == Some(tab_id.as_str()) {
            self.select_tab(cx, Some(&tab_id))?;
        }
        Ok(())
    }

    /// Remove a tab's header and panel. Removing the active tab leaves no
    /// tab active.
    pub fn remove_tab(&mut self, cx: &mut ComponentContext<'_>, tab_id: &str) -> Result<(), ClientError> {
        let Some(position) = self.tabs.iter().position(|t| t.id == tab_id) else {
            log::debug!("remove of unknown tab {} from {}", tab_id, self.element_id);
            return Ok(());
        };
        self.tabs.remove(position);

        for id in [self.header_cell_id(tab_id), self.content_id(tab_id)] {
            if cx.document.contains(&id) {
                cx.document.remove(&id)?;
            }
        }
        if self.active_tab.as_deref() == Some(tab_id) {
            self.select_tab(cx, None)?;
        }
        Ok(())
    }

    /// Make `tab_id` the active tab. Selecting the active tab again leaves
    /// the rendering unchanged.
    pub fn select_tab(
        &mut self,
        cx: &mut ComponentContext<'_>,
        tab_id: Option<&str>,
    ) -> Result<(), ClientError> {
        if let Some(previous) = self.active_tab.take() {
            self.update_tab_state(cx, &previous, false)?;
        }
        if let Some(tab_id) = tab_id {
            self.update_tab_state(cx, tab_id, true)?;
        }
        self.active_tab = tab_id.map(str::to_string);
        if tab_id.is_some_and(|id| self.tab(id).is_some()) {
            cx.document.request_layout_redraw();
        }
        Ok(())
    }

    fn update_tab_state(
        &self,
        cx: &mut ComponentContext<'_>,
        tab_id: &str,
        selected: bool,
    ) -> Result<(), ClientError> {
        let header = self.header_div_id(tab_id);
        if !cx.document.contains(&header) {
            return Ok(());
        }

        // Re-append the header so engines that cache its size re-measure it.
        if cx.quirks.reflow_tab_header_on_toggle {
            if let Some(parent) = cx.document.parent(&header).map(str::to_string) {
                cx.document.detach(&header)?;
                cx.document.append_child(&parent, &header)?;
            }
        }

        let style = &self.style;
        let state = style.state(selected);
        let border = state.border();
        let doc = &mut *cx.document;
        doc.set_style_property(&header, "background-color", state.background.to_css())?;
        doc.set_style_property(&header, "color", state.foreground_css())?;
        doc.set_style_property(&header, "cursor", if selected { "default" } else { "pointer" })?;
        doc.set_style_property(&header, "border-left", border.as_str())?;
        doc.set_style_property(&header, "border-right", border.as_str())?;
        doc.set_style_property(
            &header,
            "height",
            format!("{}px", style.header_div_height(selected)),
        )?;

        if style.active.background_image.is_some() || style.inactive.background_image.is_some() {
            for property in ["background-image", "background-position", "background-repeat"] {
                doc.set_style_property(&header, property, "")?;
            }
            if let Some(image) = &state.background_image {
                doc.apply_css_text(&header, image)?;
            }
        }
        if style.active.font.is_some() || style.inactive.font.is_some() {
            for property in ["font-family", "font-size", "font-style", "font-weight"] {
                doc.set_style_property(&header, property, "")?;
            }
            if let Some(font) = &state.font {
                doc.apply_css_text(&header, font)?;
            }
        }

        doc.set_style_property(
            &header,
            "margin-top",
            format!("{}px", style.header_margin_top(selected)),
        )?;
        let tab_side = match style.tab_position {
            TabPosition::Bottom => "border-bottom",
            TabPosition::Top => "border-top",
        };
        doc.set_style_property(&header, tab_side, border.as_str())?;

        let content = self.content_id(tab_id);
        if doc.contains(&content) {
            doc.set_style_property(&content, "display", if selected { "block" } else { "none" })?;
        }
        Ok(())
    }

    pub fn dispose(&mut self, cx: &mut ComponentContext<'_>) {
        if self.created {
            cx.document.listeners_mut().remove(
                &ListenerTarget::element(self.header_container_id()),
                EventKind::Click,
            );
        }
        self.tabs.clear();
        self.created = false;
    }
}
