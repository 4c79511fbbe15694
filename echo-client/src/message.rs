//! Inbound server messages.
//!
//! A message is an ordered list of parts, each addressed to one widget
//! family's processor and carrying that family's directives in order.
//!
//! ```json
//! {"parts": [
//!   {"processor": "selector", "ops": [
//!     {"op": "load-content", "content-id": "l1", "items": [{"value": "a"}]},
//!     {"op": "init", "eid": "c_4", "container-eid": "c_4_cell", "content-id": "l1"}
//!   ]}
//! ]}
//! ```

use serde::Deserialize;

use crate::components::divider::DividerOp;
use crate::components::grid::GridOp;
use crate::components::selector::SelectorOp;
use crate::components::tabbed_pane::TabbedPaneOp;
use crate::error::ClientError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub parts: Vec<MessagePart>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "processor", content = "ops", rename_all = "kebab-case")]
pub enum MessagePart {
    Selector(Vec<SelectorOp>),
    Grid(Vec<GridOp>),
    TabbedPane(Vec<TabbedPaneOp>),
    Divider(Vec<DividerOp>),
}

impl MessagePart {
    pub fn processor_name(&self) -> &'static str {
        match self {
            MessagePart::Selector(_) => "selector",
            MessagePart::Grid(_) => "grid",
            MessagePart::TabbedPane(_) => "tabbed-pane",
            MessagePart::Divider(_) => "divider",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            MessagePart::Selector(ops) => ops.len(),
            MessagePart::Grid(ops) => ops.len(),
            MessagePart::TabbedPane(ops) => ops.len(),
            MessagePart::Divider(ops) => ops.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ServerMessage {
    pub fn from_json(json: &str) -> Result<Self, ClientError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_parts() {
        let message = ServerMessage::from_json(
            r#"{"parts": [
                {"processor": "grid", "ops": [{"op": "dispose", "tables": [{"eid": "t1"}]}]},
                {"processor": "tabbed-pane", "ops": [
                    {"op": "set-active-tab", "eid": "tp", "active-tab": "a"},
                    {"op": "remove-tab", "eid": "tp", "tab-id": "b"}
                ]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(message.parts.len(), 2);
        assert_eq!(message.parts[0].processor_name(), "grid");
        assert_eq!(message.parts[1].len(), 2);
    }

    #[test]
    fn test_unknown_processor_is_malformed() {
        let err = ServerMessage::from_json(r#"{"parts": [{"processor": "tree", "ops": []}]}"#)
            .unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));
    }
}
