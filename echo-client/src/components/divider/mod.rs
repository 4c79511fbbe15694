//! Split pane controller.
//!
//! Two panes separated by a draggable bar. The separator position is the
//! extent of the first pane along the split axis, in pixels.

mod drag;
mod events;
mod pane;
pub mod processor;

use std::fmt;

use webdom::{Color, Element, EventKind, ListenerTarget};

use crate::components::ComponentContext;
use crate::error::ClientError;

pub use drag::DragSession;
pub use pane::PaneData;
pub use processor::DividerOp;

pub const DEFAULT_SEPARATOR_SIZE: i32 = 4;
pub const DEFAULT_SEPARATOR_COLOR: Color = Color::rgb(0x3f, 0x3f, 0x4f);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    VerticalTopBottom,
    VerticalBottomTop,
    HorizontalLeftRight,
    HorizontalRightLeft,
}

impl Orientation {
    /// Parse the wire code (`t-b`, `b-t`, `l-r`, `r-l`).
    pub fn from_code(code: &str) -> Result<Self, ClientError> {
        match code {
            "t-b" => Ok(Orientation::VerticalTopBottom),
            "b-t" => Ok(Orientation::VerticalBottomTop),
            "l-r" => Ok(Orientation::HorizontalLeftRight),
            "r-l" => Ok(Orientation::HorizontalRightLeft),
            other => {
                log::warn!("illegal divider orientation: {}", other);
                Err(ClientError::IllegalOrientation(other.to_string()))
            }
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Orientation::VerticalTopBottom => "t-b",
            Orientation::VerticalBottomTop => "b-t",
            Orientation::HorizontalLeftRight => "l-r",
            Orientation::HorizontalRightLeft => "r-l",
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(
            self,
            Orientation::VerticalTopBottom | Orientation::VerticalBottomTop
        )
    }

    /// Whether the first pane sits at the far edge (bottom or right).
    pub fn is_reversed(self) -> bool {
        matches!(
            self,
            Orientation::VerticalBottomTop | Orientation::HorizontalRightLeft
        )
    }

    pub fn cursor(self) -> &'static str {
        match self {
            Orientation::VerticalTopBottom => "n-resize",
            Orientation::VerticalBottomTop => "s-resize",
            Orientation::HorizontalLeftRight => "w-resize",
            Orientation::HorizontalRightLeft => "e-resize",
        }
    }

    /// Edge the first pane (and the separator offset) is measured from.
    fn near_edge(self) -> &'static str {
        match self {
            Orientation::VerticalTopBottom => "top",
            Orientation::VerticalBottomTop => "bottom",
            Orientation::HorizontalLeftRight => "left",
            Orientation::HorizontalRightLeft => "right",
        }
    }

    fn far_edge(self) -> &'static str {
        match self {
            Orientation::VerticalTopBottom => "bottom",
            Orientation::VerticalBottomTop => "top",
            Orientation::HorizontalLeftRight => "right",
            Orientation::HorizontalRightLeft => "left",
        }
    }

    /// The two edges spanning the cross axis.
    fn cross_edges(self) -> [&'static str; 2] {
        if self.is_vertical() {
            ["left", "right"]
        } else {
            ["top", "bottom"]
        }
    }

    fn size_property(self) -> &'static str {
        if self.is_vertical() { "height" } else { "width" }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone)]
pub struct Divider {
    element_id: String,
    container_id: String,
    orientation: Orientation,
    position: i32,
    pub(crate) background: Option<Color>,
    pub(crate) foreground: Option<Color>,
    pub(crate) font: Option<String>,
    pub(crate) separator_size: i32,
    pub(crate) separator_color: Color,
    pub(crate) separator_image: Option<String>,
    pub(crate) resizable: bool,
    pub(crate) panes: [PaneData; 2],
    created: bool,
}

/// Clamp a candidate separator position into the range allowed by the pane
/// size limits within `total`. Never negative.
pub fn clamp_position(
    candidate: i32,
    total: i32,
    separator_size: i32,
    first: &PaneData,
    second: &PaneData,
) -> i32 {
    let upper = total - second.minimum_size - separator_size;
    let clamped = if candidate < first.minimum_size {
        first.minimum_size
    } else if let Some(max) = first.maximum_size.filter(|&max| candidate > max) {
        max
    } else if candidate > upper {
        upper
    } else if let Some(lower) = second
        .maximum_size
        .map(|max| total - max - separator_size)
        .filter(|&lower| candidate < lower)
    {
        lower
    } else {
        candidate
    };
    clamped.max(0)
}

impl Divider {
    pub fn new(
        element_id: impl Into<String>,
        container_id: impl Into<String>,
        orientation: Orientation,
        position: i32,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            container_id: container_id.into(),
            orientation,
            position: position.max(0),
            background: None,
            foreground: None,
            font: None,
            separator_size: DEFAULT_SEPARATOR_SIZE,
            separator_color: DEFAULT_SEPARATOR_COLOR,
            separator_image: None,
            resizable: true,
            panes: [PaneData::default(), PaneData::default()],
            created: false,
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    pub fn separator_size(&self) -> i32 {
        self.separator_size
    }

    pub fn pane_data(&self, index: usize) -> Option<&PaneData> {
        self.panes.get(index)
    }

    /// A separator exists and may be dragged.
    pub fn is_resizable(&self) -> bool {
        self.separator_size > 0 && self.resizable
    }

    pub fn pane_id(&self, index: usize) -> String {
        format!("{}_pane{}", self.element_id, index)
    }

    pub fn separator_id(&self) -> String {
        format!("{}_separator", self.element_id)
    }

    pub fn create(&mut self, cx: &mut ComponentContext<'_>) -> Result<(), ClientError> {
        if !cx.document.contains(&self.container_id) {
            return Err(ClientError::ContainerNotFound(self.container_id.clone()));
        }
        let orientation = self.orientation;

        let mut split = Element::div()
            .id(&self.element_id)
            .css("position:absolute;overflow:hidden;top:0px;bottom:0px;left:0px;right:0px;");
        if let Some(background) = self.background {
            split.style.set("background", background.to_css());
        }
        if let Some(foreground) = self.foreground {
            split.style.set("color", foreground.to_css());
        }
        if let Some(font) = &self.font {
            split.style.apply_css_text(font);
        }
        let split_id = cx.document.append(&self.container_id, split)?;

        let mut pane_ids = Vec::with_capacity(2);
        for index in 0..2 {
            let mut pane = Element::div().id(self.pane_id(index));
            pane.style.set("position", "absolute");
            pane.style.set("overflow", "auto");
            let edges = if index == 0 {
                orientation.near_edge()
            } else {
                orientation.far_edge()
            };
            pane.style.set(edges, "0px");
            for edge in orientation.cross_edges() {
                pane.style.set(edge, "0px");
            }
            pane_ids.push(cx.document.insert(pane)?);
        }
        if orientation.is_reversed() {
            pane_ids.reverse();
        }
        for pane in &pane_ids {
            cx.document.append_child(&split_id, pane)?;
        }
        for (index, data) in self.panes.iter().enumerate() {
            data.apply_style(cx.document, &self.pane_id(index))?;
        }

        if self.separator_size > 0 {
            let mut separator = Element::div().id(self.separator_id());
            separator.style.set("position", "absolute");
            separator
                .style
                .set("background-color", self.separator_color.to_css());
            separator.style.set("font-size", "1px");
            separator.style.set("line-height", "0");
            if let Some(image) = &self.separator_image {
                separator.style.apply_css_text(image);
            }
            separator.style.set(
                orientation.size_property(),
                format!("{}px", self.separator_size),
            );
            for edge in orientation.cross_edges() {
                separator.style.set(edge, "0px");
            }
            if self.resizable {
                separator.style.set("cursor", orientation.cursor());
            }
            cx.document.append(&split_id, separator)?;
        }

        self.update(cx)?;

        if self.is_resizable() {
            cx.document.listeners_mut().add(
                ListenerTarget::element(self.separator_id()),
                EventKind::MouseDown,
                &self.element_id,
            );
        }
        self.created = true;
        log::debug!(
            "created divider {} ({}) at {}px",
            self.element_id,
            orientation,
            self.position
        );
        Ok(())
    }

    /// Clamp `candidate` against the measured size of the divider element.
    ///
    /// Until the host has measured the divider there is no total to clamp
    /// against, and only the lower bound of zero applies.
    pub fn set_position(&mut self, cx: &ComponentContext<'_>, candidate: i32) {
        let extent = cx.document.extent(&self.element_id);
        let total = if self.orientation.is_vertical() {
            extent.height
        } else {
            extent.width
        };
        if total <= 0 {
            self.position = candidate.max(0);
            return;
        }
        self.position = clamp_position(
            candidate,
            total,
            self.separator_size,
            &self.panes[0],
            &self.panes[1],
        );
    }

    /// Lay the panes and separator out for the current position.
    pub fn update(&self, cx: &mut ComponentContext<'_>) -> Result<(), ClientError> {
        let first = self.pane_id(0);
        let second = self.pane_id(1);
        for id in [&first, &second] {
            if !cx.document.contains(id) {
                return Err(ClientError::ElementNotFound(id.clone()));
            }
        }

        let orientation = self.orientation;
        let padding = if orientation.is_vertical() {
            self.panes[0].padding_height()
        } else {
            self.panes[0].padding_width()
        };
        let first_size = (self.position - padding).max(0);
        cx.document.set_style_property(
            &first,
            orientation.size_property(),
            format!("{first_size}px"),
        )?;
        cx.document.set_style_property(
            &second,
            orientation.near_edge(),
            format!("{}px", self.position + self.separator_size),
        )?;
        let separator = self.separator_id();
        if cx.document.contains(&separator) {
            cx.document.set_style_property(
                &separator,
                orientation.near_edge(),
                format!("{}px", self.position),
            )?;
        }
        Ok(())
    }

    /// Replace pane `index`'s layout data and repaint it.
    pub fn set_pane_data(
        &mut self,
        cx: &mut ComponentContext<'_>,
        index: usize,
        data: PaneData,
    ) -> Result<(), ClientError> {
        let Some(slot) = self.panes.get_mut(index) else {
            log::debug!("divider {} has no pane {}", self.element_id, index);
            return Ok(());
        };
        *slot = data;
        self.panes[index].apply_style(cx.document, &self.pane_id(index))?;
        Ok(())
    }

    /// Empty pane `index` and restore its default layout data.
    pub fn reset_pane(&mut self, cx: &mut ComponentContext<'_>, index: usize) -> Result<(), ClientError> {
        if index >= self.panes.len() {
            log::debug!("divider {} has no pane {}", self.element_id, index);
            return Ok(());
        }
        let pane = self.pane_id(index);
        if !cx.document.contains(&pane) {
            return Err(ClientError::ElementNotFound(pane));
        }
        cx.document.clear_children(&pane)?;
        self.panes[index] = PaneData::default();
        self.panes[index].apply_style(cx.document, &pane)?;
        Ok(())
    }

    pub fn dispose(&mut self, cx: &mut ComponentContext<'_>) {
        if self.created && self.is_resizable() {
            cx.document.listeners_mut().remove(
                &ListenerTarget::element(self.separator_id()),
                EventKind::MouseDown,
            );
            self.remove_drag_listeners(cx);
        }
        self.panes = [PaneData::default(), PaneData::default()];
        self.created = false;
    }
}
