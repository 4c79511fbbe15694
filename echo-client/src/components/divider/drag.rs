//! Separator dragging.
//!
//! A mousedown on the separator yields a [`DragSession`]; the engine owns it
//! and feeds document-level mousemove/mouseup back to the divider until the
//! drag ends. At most one session exists at a time.

use webdom::{DomEvent, EventKind, ListenerTarget};

use super::{Divider, Orientation};
use crate::components::ComponentContext;
use crate::outgoing::PropertyValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// Element id of the divider being dragged.
    pub owner: String,
    /// Pointer coordinate along the split axis at mousedown.
    pub initial_offset: i32,
    /// Separator position at mousedown.
    pub initial_position: i32,
}

impl DragSession {
    /// Candidate separator position for a pointer at (`x`, `y`).
    pub fn candidate(&self, orientation: Orientation, x: i32, y: i32) -> i32 {
        let start = self.initial_position;
        let origin = self.initial_offset;
        match orientation {
            Orientation::VerticalTopBottom => start + y - origin,
            Orientation::VerticalBottomTop => start - y + origin,
            Orientation::HorizontalLeftRight => start + x - origin,
            Orientation::HorizontalRightLeft => start - x + origin,
        }
    }
}

fn drag_listener_kinds(cx: &ComponentContext<'_>) -> Vec<EventKind> {
    let mut kinds = vec![EventKind::MouseMove, EventKind::MouseUp];
    if cx.quirks.suppress_select_start {
        kinds.push(EventKind::SelectStart);
    }
    kinds
}

impl Divider {
    /// Start dragging from a separator mousedown.
    pub(super) fn begin_drag(
        &mut self,
        cx: &mut ComponentContext<'_>,
        event: &DomEvent,
    ) -> Option<DragSession> {
        if !cx.accepts_input(true, &self.element_id) || !self.is_resizable() {
            return None;
        }
        let initial_offset = if self.orientation.is_vertical() {
            event.client_y
        } else {
            event.client_x
        };

        self.remove_drag_listeners(cx);
        for kind in drag_listener_kinds(cx) {
            cx.document
                .listeners_mut()
                .add(ListenerTarget::Document, kind, &self.element_id);
        }
        log::trace!("drag of {} started at {}", self.element_id, self.position);
        Some(DragSession {
            owner: self.element_id.clone(),
            initial_offset,
            initial_position: self.position,
        })
    }

    pub(super) fn drag_to(
        &mut self,
        cx: &mut ComponentContext<'_>,
        session: &DragSession,
        event: &DomEvent,
    ) {
        let candidate = session.candidate(self.orientation, event.client_x, event.client_y);
        self.set_position(cx, candidate);
        if let Err(e) = self.update(cx) {
            log::error!("failed to lay out divider {}: {}", self.element_id, e);
        }
    }

    /// Finish a drag: drop the document listeners, report the final
    /// position and have the host re-run positioning.
    pub(super) fn end_drag(&mut self, cx: &mut ComponentContext<'_>) {
        self.remove_drag_listeners(cx);
        cx.outgoing.set_property(
            &self.element_id,
            "separatorPosition",
            PropertyValue::text(format!("{}px", self.position)),
        );
        cx.document.request_layout_redraw();
        log::trace!("drag of {} ended at {}", self.element_id, self.position);
    }

    /// Remove the document-level listeners this divider installed.
    pub(super) fn remove_drag_listeners(&self, cx: &mut ComponentContext<'_>) {
        for kind in [EventKind::MouseMove, EventKind::MouseUp, EventKind::SelectStart] {
            let listeners = cx.document.listeners_mut();
            if listeners.owner(&ListenerTarget::Document, kind) == Some(self.element_id.as_str()) {
                listeners.remove(&ListenerTarget::Document, kind);
            }
        }
    }
}
