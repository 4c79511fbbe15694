//! Client-side controllers for a server-driven web UI.
//!
//! The server owns component state and pushes [`ServerMessage`] batches; the
//! [`ClientEngine`] applies them to the [`webdom::Document`], routes user
//! events to the owning controller, and collects resulting state changes in
//! the outgoing [`ClientMessage`].

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod message;
pub mod outgoing;
pub mod processor;
pub mod quirks;
pub mod registry;

pub use components::{Component, ComponentContext, ComponentKind, EventResult};
pub use config::EngineConfig;
pub use engine::ClientEngine;
pub use error::ClientError;
pub use input::{DefaultInputGate, InputGate};
pub use message::{MessagePart, ServerMessage};
pub use outgoing::{ClientMessage, IndexEntry, PropertyUpdate, PropertyValue};
pub use processor::ProcessContext;
pub use quirks::PlatformQuirks;
pub use registry::ComponentRegistry;

pub mod prelude {
    pub use crate::components::divider::{Divider, DragSession, Orientation, PaneData};
    pub use crate::components::grid::Grid;
    pub use crate::components::selector::{RenderMode, Selector};
    pub use crate::components::tabbed_pane::{BorderType, Tab, TabPosition, TabbedPane};
    pub use crate::{
        ClientEngine, ClientError, ClientMessage, Component, ComponentKind, EngineConfig,
        EventResult, PlatformQuirks, PropertyValue, ServerMessage,
    };
    pub use webdom::{Document, DomEvent, Element, EventKind, Modifiers};
}
