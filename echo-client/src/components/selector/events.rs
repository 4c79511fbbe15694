use std::any::Any;

use webdom::{DomEvent, EventKind};

use super::{RenderMode, Selector};
use crate::components::{Component, ComponentContext, ComponentKind, EventResult};

impl Selector {
    /// Synthesized list click: replace the selection, or toggle the clicked
    /// item when multiple selection is on and a toggle modifier is held.
    fn process_click_dhtml(
        &mut self,
        cx: &mut ComponentContext<'_>,
        event: &mut DomEvent,
    ) -> EventResult {
        event.prevent_default();
        if !cx.accepts_input(self.enabled, &self.element_id) {
            return EventResult::Ignored;
        }
        let Some(index) = event.target.as_deref().and_then(|t| self.node_index(cx, t)) else {
            return EventResult::Ignored;
        };

        if self.multiple_selection && event.modifiers.toggles() && !self.selected_indices.is_empty()
        {
            match self.selected_indices.iter().position(|&i| i == index) {
                Some(position) => {
                    self.selected_indices.swap_remove(position);
                }
                None => self.selected_indices.push(index),
            }
        } else {
            self.selected_indices = vec![index];
        }

        if let Err(e) = self.load_selection(cx) {
            log::error!("failed to paint selection of {}: {}", self.element_id, e);
        }
        self.update_client_message(cx);
        EventResult::Consumed
    }

    /// Native `change`: the browser already updated the options, read them
    /// back. Rejected input is reverted to the stored selection.
    fn process_selection(&mut self, cx: &mut ComponentContext<'_>) -> EventResult {
        if !cx.accepts_input(self.enabled, &self.element_id) {
            if let Err(e) = self.load_selection(cx) {
                log::error!("failed to restore selection of {}: {}", self.element_id, e);
            }
            return EventResult::Ignored;
        }

        if let Err(e) = self.remove_null_option(cx) {
            log::error!("failed to remove null option of {}: {}", self.element_id, e);
        }
        self.store_selection(cx);
        self.update_client_message(cx);
        EventResult::Consumed
    }

    fn process_rollover(
        &mut self,
        cx: &mut ComponentContext<'_>,
        event: &mut DomEvent,
        enter: bool,
    ) -> EventResult {
        if !cx.accepts_input(self.enabled, &self.element_id) {
            return EventResult::Ignored;
        }
        let Some(index) = event.target.as_deref().and_then(|t| self.node_index(cx, t)) else {
            return EventResult::Ignored;
        };
        let result = if enter {
            self.set_rollover_index(cx, Some(index))
        } else {
            self.set_rollover_index(cx, None)
        };
        if let Err(e) = result {
            log::error!("failed to draw rollover of {}: {}", self.element_id, e);
        }
        EventResult::Consumed
    }
}

impl Component for Selector {
    fn element_id(&self) -> &str {
        &self.element_id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Selector
    }

    fn handles(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Click | EventKind::SelectStart => self.mode == RenderMode::Dhtml,
            EventKind::Change => self.mode == RenderMode::Native,
            EventKind::MouseOver | EventKind::MouseOut => self.rollover_style.is_some(),
            _ => false,
        }
    }

    fn handle_event(
        &mut self,
        cx: &mut ComponentContext<'_>,
        event: &mut DomEvent,
    ) -> EventResult {
        match event.kind {
            EventKind::Click => self.process_click_dhtml(cx, event),
            EventKind::Change => self.process_selection(cx),
            EventKind::MouseOver => self.process_rollover(cx, event, true),
            EventKind::MouseOut => self.process_rollover(cx, event, false),
            EventKind::SelectStart => {
                event.prevent_default();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn dispose(&mut self, cx: &mut ComponentContext<'_>) {
        Selector::dispose(self, cx);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
