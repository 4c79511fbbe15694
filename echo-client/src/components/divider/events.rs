use std::any::Any;

use webdom::{DomEvent, EventKind};

use super::{Divider, DragSession};
use crate::components::{Component, ComponentContext, ComponentKind, EventResult};

impl Component for Divider {
    fn element_id(&self) -> &str {
        &self.element_id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Divider
    }

    fn handles(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::MouseDown | EventKind::MouseMove | EventKind::MouseUp => {
                self.is_resizable()
            }
            EventKind::SelectStart => true,
            _ => false,
        }
    }

    fn handle_event(
        &mut self,
        cx: &mut ComponentContext<'_>,
        event: &mut DomEvent,
    ) -> EventResult {
        match event.kind {
            EventKind::MouseDown => match self.begin_drag(cx, event) {
                Some(session) => EventResult::StartDrag(session),
                None => EventResult::Ignored,
            },
            EventKind::SelectStart => {
                event.prevent_default();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_drag(
        &mut self,
        cx: &mut ComponentContext<'_>,
        session: &DragSession,
        event: &DomEvent,
    ) -> EventResult {
        self.drag_to(cx, session, event);
        EventResult::Consumed
    }

    fn on_release(&mut self, cx: &mut ComponentContext<'_>, _session: &DragSession) -> EventResult {
        self.end_drag(cx);
        EventResult::Consumed
    }

    fn dispose(&mut self, cx: &mut ComponentContext<'_>) {
        Divider::dispose(self, cx);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
