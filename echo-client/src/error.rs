//! Error types.

use thiserror::Error;
use webdom::DomError;

use crate::components::ComponentKind;

/// Fatal failures while applying server messages.
///
/// Lookup misses and rejected input are not errors; controllers log and
/// ignore them.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("illegal orientation: {0}")]
    IllegalOrientation(String),
    #[error("container element not found: {0}")]
    ContainerNotFound(String),
    #[error("element not found: {0}")]
    ElementNotFound(String),
    #[error("invalid value '{value}' for attribute '{name}'")]
    InvalidAttribute { name: String, value: String },
    #[error("{kind} not found with id: {id}")]
    ComponentNotFound { kind: ComponentKind, id: String },
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error("malformed server message: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ClientError {
    pub fn invalid_attribute(name: &str, value: &str) -> Self {
        Self::InvalidAttribute {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
