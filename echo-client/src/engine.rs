//! The client engine: applies server messages and routes DOM events.

use std::collections::HashMap;

use webdom::{Document, DomEvent, EventKind, ListenerTarget};

use crate::components::selector::ListContent;
use crate::components::{Component, ComponentContext, DragSession, EventResult};
use crate::components::{divider, grid, selector, tabbed_pane};
use crate::config::EngineConfig;
use crate::error::ClientError;
use crate::input::DefaultInputGate;
use crate::message::{MessagePart, ServerMessage};
use crate::outgoing::ClientMessage;
use crate::processor::ProcessContext;
use crate::registry::ComponentRegistry;

/// Borrow the engine's fields as a controller context, leaving `registry`
/// and `drag` free.
macro_rules! component_context {
    ($engine:expr) => {
        ComponentContext {
            document: &mut $engine.document,
            outgoing: &mut $engine.outgoing,
            quirks: &$engine.config.quirks,
            input: &$engine.input,
        }
    };
}

pub struct ClientEngine {
    document: Document,
    registry: ComponentRegistry,
    outgoing: ClientMessage,
    input: DefaultInputGate,
    config: EngineConfig,
    drag: Option<DragSession>,
    list_content: HashMap<String, ListContent>,
}

impl ClientEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_document(Document::new(), config)
    }

    pub fn with_document(document: Document, config: EngineConfig) -> Self {
        Self {
            document,
            registry: ComponentRegistry::new(),
            outgoing: ClientMessage::new(),
            input: DefaultInputGate::new(),
            config,
            drag: None,
            list_content: HashMap::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn lookup<T: Component>(&self, id: &str) -> Option<&T> {
        self.registry.lookup_as::<T>(id)
    }

    pub fn outgoing(&self) -> &ClientMessage {
        &self.outgoing
    }

    /// Drain the outgoing message for transmission.
    pub fn take_outgoing(&mut self) -> ClientMessage {
        self.outgoing.take()
    }

    pub fn input(&self) -> &DefaultInputGate {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut DefaultInputGate {
        &mut self.input
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    // =========================================================================
    // Server messages
    // =========================================================================

    /// Apply every part of `message` in order.
    ///
    /// Stops at the first fatal error; directives before it stay applied.
    /// Staged list content is discarded either way.
    pub fn process(&mut self, message: &ServerMessage) -> Result<(), ClientError> {
        let result = self.process_parts(message);
        if let Err(e) = &result {
            log::error!("server message aborted: {}", e);
        }
        self.list_content.clear();
        self.release_orphaned_drag();
        result
    }

    pub fn process_json(&mut self, json: &str) -> Result<(), ClientError> {
        let message = ServerMessage::from_json(json)?;
        self.process(&message)
    }

    fn process_parts(&mut self, message: &ServerMessage) -> Result<(), ClientError> {
        let mut cx = ProcessContext {
            document: &mut self.document,
            outgoing: &mut self.outgoing,
            quirks: &self.config.quirks,
            input: &mut self.input,
            registry: &mut self.registry,
            list_content: &mut self.list_content,
        };
        for part in &message.parts {
            log::debug!(
                "processing {} part ({} ops)",
                part.processor_name(),
                part.len()
            );
            match part {
                MessagePart::Selector(ops) => selector::processor::process(&mut cx, ops)?,
                MessagePart::Grid(ops) => grid::processor::process(&mut cx, ops)?,
                MessagePart::TabbedPane(ops) => tabbed_pane::processor::process(&mut cx, ops)?,
                MessagePart::Divider(ops) => divider::processor::process(&mut cx, ops)?,
            }
        }
        Ok(())
    }

    /// Drop a drag session whose divider has been disposed.
    fn release_orphaned_drag(&mut self) {
        if let Some(session) = &self.drag {
            if !self.registry.contains(&session.owner) {
                log::debug!("dropping drag of disposed divider {}", session.owner);
                self.drag = None;
            }
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Route a DOM event to the controller listening for it.
    pub fn dispatch(&mut self, mut event: DomEvent) -> EventResult {
        log::trace!("dispatch {:?} on {:?}", event.kind, event.target);
        match event.kind {
            EventKind::Blur => return self.dispatch_blur(),
            EventKind::MouseMove | EventKind::MouseUp | EventKind::SelectStart
                if self
                    .document
                    .listeners()
                    .has(&ListenerTarget::Document, event.kind) =>
            {
                return self.dispatch_document(&mut event);
            }
            _ => {}
        }
        self.dispatch_element(&mut event)
    }

    /// Bubble from the target up through its ancestors until a controller
    /// handles the event.
    fn dispatch_element(&mut self, event: &mut DomEvent) -> EventResult {
        let Some(target) = event.target.clone() else {
            return EventResult::Ignored;
        };
        for id in self.document.ancestors(&target) {
            let Some(owner) = self
                .document
                .listeners()
                .owner(&ListenerTarget::Element(id.clone()), event.kind)
                .map(str::to_string)
            else {
                continue;
            };
            let Some(component) = self.registry.get_mut(&owner) else {
                log::debug!("listener on {} owned by unregistered {}", id, owner);
                continue;
            };
            if !component.handles(event.kind) {
                continue;
            }

            event.current_target = Some(id);
            let mut cx = component_context!(self);
            match component.handle_event(&mut cx, event) {
                EventResult::Ignored => continue,
                EventResult::Consumed => return EventResult::Consumed,
                EventResult::StartDrag(session) => {
                    if let Some(stale) = self.drag.replace(session.clone()) {
                        log::debug!("drag of {} superseded", stale.owner);
                    }
                    return EventResult::StartDrag(session);
                }
            }
        }
        EventResult::Ignored
    }

    /// Document-level mousemove/mouseup/selectstart, installed by a drag.
    fn dispatch_document(&mut self, event: &mut DomEvent) -> EventResult {
        if event.kind == EventKind::SelectStart {
            event.prevent_default();
            return EventResult::Consumed;
        }
        let Some(session) = self.drag.as_ref() else {
            log::debug!("document {:?} without an active drag", event.kind);
            return EventResult::Ignored;
        };
        let Some(component) = self.registry.get_mut(&session.owner) else {
            self.drag = None;
            return EventResult::Ignored;
        };
        let mut cx = component_context!(self);
        match event.kind {
            EventKind::MouseMove => component.on_drag(&mut cx, session, event),
            EventKind::MouseUp => {
                let result = component.on_release(&mut cx, session);
                self.drag = None;
                result
            }
            _ => EventResult::Ignored,
        }
    }

    /// Window blur. Ends an active drag when configured to, since the
    /// matching mouseup may never arrive.
    fn dispatch_blur(&mut self) -> EventResult {
        if !self.config.cancel_drag_on_blur {
            return EventResult::Ignored;
        }
        let Some(session) = self.drag.take() else {
            return EventResult::Ignored;
        };
        log::debug!("window blur ends drag of {}", session.owner);
        let Some(component) = self.registry.get_mut(&session.owner) else {
            return EventResult::Ignored;
        };
        let mut cx = component_context!(self);
        component.on_release(&mut cx, &session)
    }
}

impl Default for ClientEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
