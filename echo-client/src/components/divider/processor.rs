//! Server directives for dividers.

use std::str::FromStr;

use serde::Deserialize;
use webdom::{Color, Insets};

use super::{Divider, Orientation, PaneData};
use crate::error::ClientError;
use crate::processor::ProcessContext;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum DividerOp {
    Init(DividerInit),
    AddChild {
        eid: String,
        index: usize,
        #[serde(rename = "layout-data")]
        layout_data: Option<LayoutData>,
    },
    RemoveChild {
        eid: String,
        index: usize,
    },
    SetSeparatorPosition {
        eid: String,
        position: i32,
    },
    Dispose {
        eid: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DividerInit {
    pub eid: String,
    pub container_eid: String,
    pub orientation: String,
    #[serde(default)]
    pub position: i32,
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub font: Option<String>,
    pub separator_size: Option<i32>,
    pub separator_color: Option<String>,
    pub separator_image: Option<String>,
    pub resizable: Option<bool>,
    #[serde(default)]
    pub layout_data: Vec<LayoutData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LayoutData {
    #[serde(default)]
    pub index: usize,
    pub alignment: Option<String>,
    pub background: Option<String>,
    pub background_image: Option<String>,
    pub insets: Option<String>,
    pub overflow: Option<String>,
    pub min_size: Option<i32>,
    /// -1 means unbounded.
    pub max_size: Option<i32>,
}

fn parse_color(name: &str, value: &str) -> Result<Color, ClientError> {
    Color::from_str(value).map_err(|_| {
        log::warn!("invalid colour for {}: {}", name, value);
        ClientError::invalid_attribute(name, value)
    })
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl LayoutData {
    /// Overlay these attributes on existing pane data.
    pub fn apply_to(&self, pane: &mut PaneData) -> Result<(), ClientError> {
        if let Some(alignment) = present(&self.alignment) {
            pane.alignment = Some(alignment.to_string());
        }
        if let Some(background) = present(&self.background) {
            pane.background = Some(parse_color("background", background)?);
        }
        if let Some(image) = present(&self.background_image) {
            pane.background_image = Some(image.to_string());
        }
        if let Some(insets) = present(&self.insets) {
            pane.insets = Some(Insets::from_str(insets).map_err(|_| {
                log::warn!("invalid pane insets: {}", insets);
                ClientError::invalid_attribute("insets", insets)
            })?);
        }
        if let Some(overflow) = present(&self.overflow) {
            pane.overflow = Some(overflow.to_string());
        }
        if let Some(min) = self.min_size {
            pane.minimum_size = min;
        }
        if let Some(max) = self.max_size {
            pane.maximum_size = (max >= 0).then_some(max);
        }
        Ok(())
    }
}

/// Build an uncreated divider from `init` attributes.
pub fn configure(init: &DividerInit) -> Result<Divider, ClientError> {
    let orientation = Orientation::from_code(&init.orientation)?;
    let mut divider = Divider::new(&init.eid, &init.container_eid, orientation, init.position);
    if let Some(background) = present(&init.background) {
        divider.background = Some(parse_color("background", background)?);
    }
    if let Some(foreground) = present(&init.foreground) {
        divider.foreground = Some(parse_color("foreground", foreground)?);
    }
    if let Some(font) = present(&init.font) {
        divider.font = Some(font.to_string());
    }
    if let Some(size) = init.separator_size {
        divider.separator_size = size;
    }
    if let Some(color) = present(&init.separator_color) {
        divider.separator_color = parse_color("separator-color", color)?;
    }
    if let Some(image) = present(&init.separator_image) {
        divider.separator_image = Some(image.to_string());
    }
    if let Some(resizable) = init.resizable {
        divider.resizable = resizable;
    }
    for layout in &init.layout_data {
        let index = if layout.index == 0 { 0 } else { 1 };
        layout.apply_to(&mut divider.panes[index])?;
    }
    Ok(divider)
}

pub fn process(cx: &mut ProcessContext<'_>, ops: &[DividerOp]) -> Result<(), ClientError> {
    for op in ops {
        match op {
            DividerOp::Init(init) => process_init(cx, init)?,
            DividerOp::AddChild {
                eid,
                index,
                layout_data,
            } => process_add_child(cx, eid, *index, layout_data.as_ref())?,
            DividerOp::RemoveChild { eid, index } => {
                let (registry, mut component_cx) = cx.split();
                match registry.lookup_as_mut::<Divider>(eid) {
                    Some(divider) => divider.reset_pane(&mut component_cx, *index)?,
                    None => log::debug!("remove-child for unknown divider {}", eid),
                }
            }
            DividerOp::SetSeparatorPosition { eid, position } => {
                let (registry, mut component_cx) = cx.split();
                match registry.lookup_as_mut::<Divider>(eid) {
                    Some(divider) => {
                        divider.set_position(&component_cx, *position);
                        divider.update(&mut component_cx)?;
                    }
                    None => log::debug!("set-separator-position for unknown divider {}", eid),
                }
            }
            DividerOp::Dispose { eid } => {
                let (registry, mut component_cx) = cx.split();
                match registry.unregister_as::<Divider>(eid) {
                    Some(mut divider) => {
                        divider.dispose(&mut component_cx);
                        cx.input.enable(eid);
                    }
                    None => log::debug!("dispose of unknown divider {}", eid),
                }
            }
        }
    }
    Ok(())
}

fn process_init(cx: &mut ProcessContext<'_>, init: &DividerInit) -> Result<(), ClientError> {
    let mut divider = configure(init)?;
    // A controller previously bound to this id may have left it disabled.
    cx.input.enable(&init.eid);
    let (registry, mut component_cx) = cx.split();
    if let Some(mut previous) = registry.unregister(&init.eid) {
        log::warn!("divider {} replaces a live controller", init.eid);
        previous.dispose(&mut component_cx);
    }
    divider.create(&mut component_cx)?;
    registry.register(Box::new(divider));

    if !init.enabled {
        cx.input.disable(&init.eid);
    }
    Ok(())
}

fn process_add_child(
    cx: &mut ProcessContext<'_>,
    eid: &str,
    index: usize,
    layout_data: Option<&LayoutData>,
) -> Result<(), ClientError> {
    let (registry, mut component_cx) = cx.split();
    let Some(divider) = registry.lookup_as_mut::<Divider>(eid) else {
        log::debug!("add-child for unknown divider {}", eid);
        return Ok(());
    };
    let Some(layout) = layout_data else {
        return Ok(());
    };
    let Some(mut pane) = divider.pane_data(index).cloned() else {
        log::debug!("divider {} has no pane {}", eid, index);
        return Ok(());
    };
    layout.apply_to(&mut pane)?;
    divider.set_pane_data(&mut component_cx, index, pane)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_rejects_orientation() {
        let init: DividerInit = serde_json::from_str(
            r#"{"eid": "sp", "container-eid": "cell", "orientation": "x-y"}"#,
        )
        .unwrap();
        assert!(matches!(
            configure(&init),
            Err(ClientError::IllegalOrientation(_))
        ));
    }

    #[test]
    fn test_configure_layout_data() {
        let init: DividerInit = serde_json::from_str(
            r#"{"eid": "sp", "container-eid": "cell", "orientation": "l-r", "position": 120,
                "separator-size": 6, "resizable": false,
                "layout-data": [
                    {"index": 0, "min-size": 50, "insets": "2px"},
                    {"index": 1, "max-size": -1, "overflow": "hidden"}
                ]}"#,
        )
        .unwrap();
        let divider = configure(&init).unwrap();
        assert_eq!(divider.position(), 120);
        assert_eq!(divider.separator_size(), 6);
        assert!(!divider.is_resizable());
        let first = divider.pane_data(0).unwrap();
        assert_eq!(first.minimum_size, 50);
        assert_eq!(first.insets, Some(Insets::all(2)));
        let second = divider.pane_data(1).unwrap();
        assert_eq!(second.maximum_size, None);
        assert_eq!(second.overflow.as_deref(), Some("hidden"));
    }
}
