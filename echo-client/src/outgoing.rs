//! Outgoing client message buffer.
//!
//! Controllers record property changes here as the user interacts. The host
//! drains the buffer with [`ClientMessage::take`] whenever a connection is
//! made; [`ClientMessage::connection_requested`] tells it one is due now.

use serde::Serialize;

/// One selected index, serialized as `{"index": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyValue {
    /// `item` entries, one per selected list item.
    Items(Vec<IndexEntry>),
    /// `row` entries, one per selected table row.
    Rows(Vec<IndexEntry>),
    Text(String),
}

impl PropertyValue {
    pub fn items(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::Items(indices.into_iter().map(|index| IndexEntry { index }).collect())
    }

    pub fn rows(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::Rows(indices.into_iter().map(|index| IndexEntry { index }).collect())
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Indices carried by an `Items` or `Rows` value.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            Self::Items(entries) | Self::Rows(entries) => entries.iter().map(|e| e.index).collect(),
            Self::Text(_) => Vec::new(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyUpdate {
    pub eid: String,
    pub name: String,
    pub value: PropertyValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub eid: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientMessage {
    properties: Vec<PropertyUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<Action>,
    #[serde(skip)]
    connection_requested: bool,
}

impl ClientMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing an earlier value for the same element and
    /// name in place.
    pub fn set_property(&mut self, eid: &str, name: &str, value: PropertyValue) {
        log::trace!("outgoing property {}.{} = {:?}", eid, name, value);
        match self
            .properties
            .iter_mut()
            .find(|p| p.eid == eid && p.name == name)
        {
            Some(existing) => existing.value = value,
            None => self.properties.push(PropertyUpdate {
                eid: eid.to_string(),
                name: name.to_string(),
                value,
            }),
        }
    }

    pub fn property(&self, eid: &str, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|p| p.eid == eid && p.name == name)
            .map(|p| &p.value)
    }

    pub fn properties(&self) -> &[PropertyUpdate] {
        &self.properties
    }

    /// Record the action that triggers the next connection. Only one action
    /// is carried per message; the latest wins.
    pub fn set_action(&mut self, eid: &str, name: &str) {
        self.action = Some(Action {
            eid: eid.to_string(),
            name: name.to_string(),
        });
    }

    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    pub fn request_connection(&mut self) {
        log::debug!("server connection requested");
        self.connection_requested = true;
    }

    pub fn connection_requested(&self) -> bool {
        self.connection_requested
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.action.is_none()
    }

    /// Drain the buffer, leaving it empty.
    pub fn take(&mut self) -> ClientMessage {
        std::mem::take(self)
    }
}
