//! Shared state for applying server directives.

use std::collections::HashMap;

use crate::components::ComponentContext;
use crate::components::selector::ListContent;
use crate::input::DefaultInputGate;
use crate::outgoing::ClientMessage;
use crate::quirks::PlatformQuirks;
use crate::registry::ComponentRegistry;
use webdom::Document;

/// Borrowed engine state handed to each message processor.
pub struct ProcessContext<'a> {
    pub document: &'a mut Document,
    pub outgoing: &'a mut ClientMessage,
    pub quirks: &'a PlatformQuirks,
    pub input: &'a mut DefaultInputGate,
    pub registry: &'a mut ComponentRegistry,
    /// List content staged by `load-content`, keyed by content id. Lives
    /// for one server message.
    pub list_content: &'a mut HashMap<String, ListContent>,
}

impl ProcessContext<'_> {
    /// Split into the registry and a controller context over the rest.
    pub fn split(&mut self) -> (&mut ComponentRegistry, ComponentContext<'_>) {
        (
            &mut *self.registry,
            ComponentContext {
                document: &mut *self.document,
                outgoing: &mut *self.outgoing,
                quirks: self.quirks,
                input: &*self.input,
            },
        )
    }

    /// Controller context without the registry.
    pub fn component(&mut self) -> ComponentContext<'_> {
        self.split().1
    }
}
