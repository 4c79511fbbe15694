use std::any::Any;

use webdom::{DomEvent, EventKind};

use super::TabbedPane;
use crate::components::{Component, ComponentContext, ComponentKind, EventResult};
use crate::outgoing::PropertyValue;

impl TabbedPane {
    /// Header click: report the new active tab and switch locally when its
    /// content is already rendered, otherwise ask the server for it.
    fn process_click(&mut self, cx: &mut ComponentContext<'_>, event: &DomEvent) -> EventResult {
        if !cx.accepts_input(self.enabled, &self.element_id) {
            return EventResult::Ignored;
        }
        let Some(tab_id) = event
            .target
            .as_deref()
            .and_then(|target| self.tab_id_of(target))
            .map(str::to_string)
        else {
            return EventResult::Ignored;
        };
        let Some(rendered) = self.tab(&tab_id).map(|tab| tab.rendered) else {
            log::debug!("click on unknown tab {} of {}", tab_id, self.element_id);
            return EventResult::Ignored;
        };

        cx.outgoing
            .set_property(&self.element_id, "activeTab", PropertyValue::text(&tab_id));
        if rendered {
            if let Err(e) = self.select_tab(cx, Some(&tab_id)) {
                log::error!("failed to select tab {} of {}: {}", tab_id, self.element_id, e);
            }
        } else {
            cx.outgoing.request_connection();
        }
        EventResult::Consumed
    }
}

impl Component for TabbedPane {
    fn element_id(&self) -> &str {
        &self.element_id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::TabbedPane
    }

    fn handles(&self, kind: EventKind) -> bool {
        kind == EventKind::Click
    }

    fn handle_event(
        &mut self,
        cx: &mut ComponentContext<'_>,
        event: &mut DomEvent,
    ) -> EventResult {
        match event.kind {
            EventKind::Click => self.process_click(cx, event),
            _ => EventResult::Ignored,
        }
    }

    fn dispose(&mut self, cx: &mut ComponentContext<'_>) {
        TabbedPane::dispose(self, cx);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
