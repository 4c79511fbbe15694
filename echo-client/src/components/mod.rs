//! Component controllers and the trait the engine dispatches through.

pub mod divider;
pub mod grid;
pub mod selection;
pub mod selector;
pub mod tabbed_pane;

use std::any::Any;
use std::fmt;

use webdom::{Document, DomEvent, EventKind};

use crate::input::InputGate;
use crate::outgoing::ClientMessage;
use crate::quirks::PlatformQuirks;

pub use divider::DragSession;

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event started a drag; the engine holds the session until mouseup.
    StartDrag(DragSession),
}

impl EventResult {
    /// Check if the event was handled (consumed or started drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Selector,
    Grid,
    TabbedPane,
    Divider,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Selector => "selector",
            ComponentKind::Grid => "grid",
            ComponentKind::TabbedPane => "tabbed pane",
            ComponentKind::Divider => "divider",
        };
        f.write_str(name)
    }
}

/// Everything a controller may touch while handling an event or a server
/// directive.
pub struct ComponentContext<'a> {
    pub document: &'a mut Document,
    pub outgoing: &'a mut ClientMessage,
    pub quirks: &'a PlatformQuirks,
    pub input: &'a dyn InputGate,
}

impl ComponentContext<'_> {
    /// Input is accepted only when the controller is enabled and the gate
    /// lets it through.
    pub fn accepts_input(&self, enabled: bool, element_id: &str) -> bool {
        if !enabled {
            return false;
        }
        let verified = self.input.verify_input(element_id);
        if !verified {
            log::trace!("input rejected for {}", element_id);
        }
        verified
    }
}

/// A controller bound to one rendered component.
pub trait Component: Any {
    /// Id of the element the controller is registered under.
    fn element_id(&self) -> &str;

    fn kind(&self) -> ComponentKind;

    /// Whether this controller reacts to events of `kind`. Listeners the
    /// controller installs are only invoked for kinds it handles.
    fn handles(&self, kind: EventKind) -> bool;

    /// Handle an event routed to one of the controller's listeners.
    /// `event.current_target` is the element the listener is attached to.
    fn handle_event(&mut self, cx: &mut ComponentContext<'_>, event: &mut DomEvent)
        -> EventResult;

    /// Handle pointer movement during a drag this controller started.
    fn on_drag(
        &mut self,
        _cx: &mut ComponentContext<'_>,
        _session: &DragSession,
        _event: &DomEvent,
    ) -> EventResult {
        EventResult::Ignored
    }

    /// Handle the end of a drag this controller started. The controller
    /// should remove any document-level listeners it installed.
    fn on_release(&mut self, _cx: &mut ComponentContext<'_>, _session: &DragSession) -> EventResult {
        EventResult::Ignored
    }

    /// Detach listeners and drop references to DOM nodes.
    fn dispose(&mut self, cx: &mut ComponentContext<'_>);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
