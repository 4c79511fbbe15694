//! Server directives for selectors.

use serde::Deserialize;

use super::Selector;
use crate::error::ClientError;
use crate::processor::ProcessContext;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum SelectorOp {
    Init(SelectorInit),
    Dispose { eid: String },
    LoadContent(LoadContent),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListType {
    #[default]
    DropDown,
    ListBox,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemRef {
    pub index: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SelectorInit {
    pub eid: String,
    pub container_eid: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub server_notify: bool,
    pub style: Option<String>,
    pub tab_index: Option<String>,
    pub tool_tip: Option<String>,
    pub content_id: Option<String>,
    #[serde(rename = "type", default)]
    pub list_type: ListType,
    #[serde(default)]
    pub multiple: bool,
    pub rollover_style: Option<String>,
    /// Selected items of a multiple-selection list.
    #[serde(default)]
    pub selection: Vec<ItemRef>,
    /// Selected item of a single-selection list.
    pub selection_index: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    pub value: String,
    pub style: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LoadContent {
    pub content_id: String,
    #[serde(default)]
    pub styled: bool,
    #[serde(default)]
    pub items: Vec<ContentItem>,
}

/// Values (and optional per-item styles) shared by every selector that
/// references the same content id within one server message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListContent {
    pub values: Vec<String>,
    pub styles: Option<Vec<Option<String>>>,
}

pub fn process(cx: &mut ProcessContext<'_>, ops: &[SelectorOp]) -> Result<(), ClientError> {
    for op in ops {
        match op {
            SelectorOp::LoadContent(content) => load_content(cx, content),
            SelectorOp::Init(init) => process_init(cx, init)?,
            SelectorOp::Dispose { eid } => process_dispose(cx, eid),
        }
    }
    Ok(())
}

fn load_content(cx: &mut ProcessContext<'_>, content: &LoadContent) {
    let values = content.items.iter().map(|item| item.value.clone()).collect();
    let styles = content
        .styled
        .then(|| content.items.iter().map(|item| item.style.clone()).collect());
    log::debug!(
        "staged list content {} ({} items)",
        content.content_id,
        content.items.len()
    );
    cx.list_content
        .insert(content.content_id.clone(), ListContent { values, styles });
}

fn process_init(cx: &mut ProcessContext<'_>, init: &SelectorInit) -> Result<(), ClientError> {
    let mut selector = Selector::new(&init.eid, &init.container_eid);
    selector.enabled = init.enabled;
    selector.server_notify = init.server_notify;
    selector.style = init.style.clone();
    selector.tab_index = init.tab_index.clone();
    selector.tool_tip = init.tool_tip.clone();
    // Multiple selection and rollover only apply to list boxes.
    selector.list_box = init.list_type == ListType::ListBox;
    if selector.list_box {
        selector.multiple_selection = init.multiple;
        selector.rollover_style = init.rollover_style.clone();
    }

    if let Some(content_id) = &init.content_id {
        match cx.list_content.get(content_id) {
            Some(content) => selector.set_content(content.values.clone(), content.styles.clone()),
            None => log::warn!(
                "selector {} references unknown content {}",
                init.eid,
                content_id
            ),
        }
    }

    let selection = if selector.multiple_selection {
        init.selection.iter().map(|item| item.index).collect()
    } else {
        init.selection_index.into_iter().collect()
    };
    selector.set_selected_indices(selection);

    let (registry, mut component_cx) = cx.split();
    if let Some(mut previous) = registry.unregister(&init.eid) {
        log::warn!("selector {} replaces a live controller", init.eid);
        previous.dispose(&mut component_cx);
    }
    selector.create(&mut component_cx)?;
    registry.register(Box::new(selector));
    Ok(())
}

fn process_dispose(cx: &mut ProcessContext<'_>, eid: &str) {
    let (registry, mut component_cx) = cx.split();
    match registry.unregister_as::<Selector>(eid) {
        Some(mut selector) => selector.dispose(&mut component_cx),
        None => log::debug!("dispose of unknown selector {}", eid),
    }
}
