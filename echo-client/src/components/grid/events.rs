use std::any::Any;

use webdom::{DomEvent, EventKind};

use super::{Grid, row_index_of};
use crate::components::{Component, ComponentContext, ComponentKind, EventResult};

impl Grid {
    fn process_click(&mut self, cx: &mut ComponentContext<'_>, event: &mut DomEvent) -> EventResult {
        if !cx.accepts_input(self.enabled, &self.element_id) || !self.selection_mode.is_enabled() {
            return EventResult::Ignored;
        }
        let Some(row) = event.current_target.as_deref().and_then(row_index_of) else {
            return EventResult::Ignored;
        };
        event.prevent_default();

        let modifiers = event.modifiers;
        let multiple = self.selection_mode.is_multiple();
        if !multiple || modifiers.none() {
            if let Err(e) = self.clear_selected(cx) {
                log::error!("failed to clear selection of {}: {}", self.element_id, e);
            }
        }

        let result = match self.selection.anchor() {
            Some(_) if multiple && modifiers.shift => {
                let added = self.selection.extend_to(row);
                added
                    .into_iter()
                    .try_for_each(|r| self.draw_row_style(cx, r))
            }
            _ => {
                self.selection.set_anchor(row);
                let selected = self.selection.is_selected(row);
                self.set_selected(cx, row, !selected)
            }
        };
        if let Err(e) = result {
            log::error!("failed to paint selection of {}: {}", self.element_id, e);
        }

        self.update_client_message(cx);
        if self.server_notify {
            cx.outgoing.set_action(&self.element_id, "action");
            cx.outgoing.request_connection();
        }
        EventResult::Consumed
    }

    fn process_rollover(
        &mut self,
        cx: &mut ComponentContext<'_>,
        event: &DomEvent,
        enter: bool,
    ) -> EventResult {
        if !cx.accepts_input(self.enabled, &self.element_id) {
            return EventResult::Ignored;
        }
        let Some(row_id) = event.current_target.as_deref() else {
            return EventResult::Ignored;
        };
        let Some(row) = row_index_of(row_id) else {
            return EventResult::Ignored;
        };
        let result = if enter {
            self.draw_rollover(cx, row_id)
        } else {
            self.draw_row_style(cx, row)
        };
        if let Err(e) = result {
            log::error!("failed to draw rollover of {}: {}", self.element_id, e);
        }
        EventResult::Consumed
    }
}

impl Component for Grid {
    fn element_id(&self) -> &str {
        &self.element_id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Grid
    }

    fn handles(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Click | EventKind::MouseDown => self.selection_mode.is_enabled(),
            EventKind::MouseOver
            | EventKind::MouseOut
            | EventKind::MouseEnter
            | EventKind::MouseLeave => self.rollover_enabled && self.rollover_kinds.contains(&kind),
            _ => false,
        }
    }

    fn handle_event(
        &mut self,
        cx: &mut ComponentContext<'_>,
        event: &mut DomEvent,
    ) -> EventResult {
        match event.kind {
            EventKind::Click => self.process_click(cx, event),
            EventKind::MouseDown => {
                event.prevent_default();
                EventResult::Consumed
            }
            EventKind::MouseOver | EventKind::MouseEnter => self.process_rollover(cx, event, true),
            EventKind::MouseOut | EventKind::MouseLeave => self.process_rollover(cx, event, false),
            _ => EventResult::Ignored,
        }
    }

    fn dispose(&mut self, cx: &mut ComponentContext<'_>) {
        Grid::dispose(self, cx);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
