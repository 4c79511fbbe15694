//! Server directives for tabbed panes.

use std::str::FromStr;

use serde::Deserialize;
use webdom::{Color, Insets};

use super::{BorderType, Tab, TabPosition, TabStateStyle, TabbedPane};
use crate::components::ComponentKind;
use crate::error::ClientError;
use crate::processor::ProcessContext;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum TabbedPaneOp {
    Init(Box<TabbedPaneInit>),
    AddTab(AddTab),
    RemoveTab {
        eid: String,
        #[serde(rename = "tab-id")]
        tab_id: String,
    },
    SetActiveTab {
        eid: String,
        #[serde(rename = "active-tab")]
        active_tab: String,
    },
    Dispose {
        eid: String,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TabbedPaneInit {
    pub eid: String,
    pub container_eid: String,
    pub active_tab: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub tab_position: Option<String>,
    pub header_height: Option<i32>,
    pub default_background: Option<String>,
    pub default_foreground: Option<String>,
    pub default_font: Option<String>,
    pub insets: Option<String>,
    pub default_content_insets: Option<String>,
    pub tab_inset: Option<i32>,
    pub tab_spacing: Option<i32>,
    pub border_type: Option<String>,
    #[serde(flatten)]
    pub tab_styles: TabStyleAttributes,
}

/// Per-state tab attributes (`tab-active-*`, `tab-inactive-*`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TabStyleAttributes {
    pub tab_active_background: Option<String>,
    pub tab_active_background_image: Option<String>,
    pub tab_active_border_style: Option<String>,
    pub tab_active_border_color: Option<String>,
    pub tab_active_border_size: Option<i32>,
    pub tab_active_font: Option<String>,
    pub tab_active_foreground: Option<String>,
    pub tab_inactive_background: Option<String>,
    pub tab_inactive_background_image: Option<String>,
    pub tab_inactive_border_style: Option<String>,
    pub tab_inactive_border_color: Option<String>,
    pub tab_inactive_border_size: Option<i32>,
    pub tab_inactive_font: Option<String>,
    pub tab_inactive_foreground: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AddTab {
    pub eid: String,
    pub tab_id: String,
    #[serde(default)]
    pub tab_index: usize,
    pub title: Option<String>,
    #[serde(default)]
    pub pane: bool,
    #[serde(default)]
    pub rendered: bool,
}

fn parse_color(name: &str, value: &str) -> Result<Color, ClientError> {
    Color::from_str(value).map_err(|_| {
        log::warn!("invalid colour for {}: {}", name, value);
        ClientError::invalid_attribute(name, value)
    })
}

fn parse_insets(name: &str, value: &str) -> Result<Insets, ClientError> {
    Insets::from_str(value).map_err(|_| {
        log::warn!("invalid insets for {}: {}", name, value);
        ClientError::invalid_attribute(name, value)
    })
}

/// Non-empty attribute values only; empty strings keep the default.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[allow(clippy::too_many_arguments)]
fn apply_state_style(
    state: &mut TabStateStyle,
    prefix: &str,
    background: &Option<String>,
    background_image: &Option<String>,
    border_style: &Option<String>,
    border_color: &Option<String>,
    border_size: Option<i32>,
    font: &Option<String>,
    foreground: &Option<String>,
) -> Result<(), ClientError> {
    if let Some(value) = present(background) {
        state.background = parse_color(&format!("{prefix}-background"), value)?;
    }
    if let Some(value) = present(background_image) {
        state.background_image = Some(value.to_string());
    }
    if let Some(value) = present(border_style) {
        state.border_style = value.to_string();
    }
    if let Some(value) = present(border_color) {
        state.border_color = parse_color(&format!("{prefix}-border-color"), value)?;
    }
    if let Some(size) = border_size {
        state.border_size = size;
    }
    if let Some(value) = present(font) {
        state.font = Some(value.to_string());
    }
    if let Some(value) = present(foreground) {
        state.foreground = Some(parse_color(&format!("{prefix}-foreground"), value)?);
    }
    Ok(())
}

/// Build an uncreated pane from `init` attributes.
pub fn configure(init: &TabbedPaneInit) -> Result<TabbedPane, ClientError> {
    let mut pane = TabbedPane::new(&init.eid, &init.container_eid, init.active_tab.clone());
    pane.enabled = init.enabled;

    let style = &mut pane.style;
    style.tab_position = match init.tab_position.as_deref() {
        Some("bottom") => TabPosition::Bottom,
        _ => TabPosition::Top,
    };
    if let Some(height) = init.header_height {
        style.header_height = height;
    }
    if let Some(value) = present(&init.default_background) {
        style.default_background = parse_color("default-background", value)?;
    }
    if let Some(value) = present(&init.default_foreground) {
        style.default_foreground = parse_color("default-foreground", value)?;
    }
    if let Some(value) = present(&init.default_font) {
        style.default_font = Some(value.to_string());
    }
    if let Some(value) = present(&init.insets) {
        style.insets = parse_insets("insets", value)?;
    }
    if let Some(value) = present(&init.default_content_insets) {
        style.default_content_insets = parse_insets("default-content-insets", value)?;
    }
    if let Some(inset) = init.tab_inset {
        style.tab_inset = inset;
    }
    if let Some(spacing) = init.tab_spacing {
        style.tab_spacing = spacing;
    }
    style.border_type = BorderType::from_attribute(init.border_type.as_deref());

    let attrs = &init.tab_styles;
    apply_state_style(
        &mut style.active,
        "tab-active",
        &attrs.tab_active_background,
        &attrs.tab_active_background_image,
        &attrs.tab_active_border_style,
        &attrs.tab_active_border_color,
        attrs.tab_active_border_size,
        &attrs.tab_active_font,
        &attrs.tab_active_foreground,
    )?;
    apply_state_style(
        &mut style.inactive,
        "tab-inactive",
        &attrs.tab_inactive_background,
        &attrs.tab_inactive_background_image,
        &attrs.tab_inactive_border_style,
        &attrs.tab_inactive_border_color,
        attrs.tab_inactive_border_size,
        &attrs.tab_inactive_font,
        &attrs.tab_inactive_foreground,
    )?;
    Ok(pane)
}

pub fn process(cx: &mut ProcessContext<'_>, ops: &[TabbedPaneOp]) -> Result<(), ClientError> {
    for op in ops {
        match op {
            TabbedPaneOp::Init(init) => process_init(cx, init)?,
            TabbedPaneOp::AddTab(add) => process_add_tab(cx, add)?,
            TabbedPaneOp::RemoveTab { eid, tab_id } => process_remove_tab(cx, eid, tab_id)?,
            TabbedPaneOp::SetActiveTab { eid, active_tab } => {
                process_set_active_tab(cx, eid, active_tab)?
            }
            TabbedPaneOp::Dispose { eid } => process_dispose(cx, eid),
        }
    }
    Ok(())
}

fn process_init(cx: &mut ProcessContext<'_>, init: &TabbedPaneInit) -> Result<(), ClientError> {
    let mut pane = configure(init)?;
    let (registry, mut component_cx) = cx.split();
    if let Some(mut previous) = registry.unregister(&init.eid) {
        log::warn!("tabbed pane {} replaces a live controller", init.eid);
        previous.dispose(&mut component_cx);
    }
    pane.create(&mut component_cx)?;
    registry.register(Box::new(pane));
    Ok(())
}

fn process_add_tab(cx: &mut ProcessContext<'_>, add: &AddTab) -> Result<(), ClientError> {
    let (registry, mut component_cx) = cx.split();
    let Some(pane) = registry.lookup_as_mut::<TabbedPane>(&add.eid) else {
        log::warn!("add-tab for unknown tabbed pane {}", add.eid);
        return Err(ClientError::ComponentNotFound {
            kind: ComponentKind::TabbedPane,
            id: add.eid.clone(),
        });
    };
    let mut tab = Tab::new(&add.tab_id).pane(add.pane).rendered(add.rendered);
    tab.title = add.title.clone();
    pane.add_tab(&mut component_cx, tab, add.tab_index)
}

fn process_remove_tab(cx: &mut ProcessContext<'_>, eid: &str, tab_id: &str) -> Result<(), ClientError> {
    let (registry, mut component_cx) = cx.split();
    match registry.lookup_as_mut::<TabbedPane>(eid) {
        Some(pane) => pane.remove_tab(&mut component_cx, tab_id),
        None => {
            log::debug!("remove-tab for unknown tabbed pane {}", eid);
            Ok(())
        }
    }
}

fn process_set_active_tab(
    cx: &mut ProcessContext<'_>,
    eid: &str,
    tab_id: &str,
) -> Result<(), ClientError> {
    let (registry, mut component_cx) = cx.split();
    let Some(pane) = registry.lookup_as_mut::<TabbedPane>(eid) else {
        log::debug!("set-active-tab for unknown tabbed pane {}", eid);
        return Ok(());
    };
    let Some(tab) = pane.tab_mut(tab_id) else {
        log::debug!("set-active-tab for unknown tab {} of {}", tab_id, eid);
        return Ok(());
    };
    tab.rendered = true;
    pane.select_tab(&mut component_cx, Some(tab_id))
}

fn process_dispose(cx: &mut ProcessContext<'_>, eid: &str) {
    let (registry, mut component_cx) = cx.split();
    match registry.unregister_as::<TabbedPane>(eid) {
        Some(mut pane) => pane.dispose(&mut component_cx),
        None => log::debug!("dispose of unknown tabbed pane {}", eid),
    }
}
