//! Replay scripts: a page fixture plus an ordered list of steps.
//!
//! ```json
//! {
//!   "fixture": [{"tag": "div", "id": "c_1_cell"}],
//!   "steps": [
//!     {"server": {"parts": [...]}},
//!     {"extent": {"id": "c_2", "width": 400, "height": 300}},
//!     {"event": {"kind": "click", "target": "c_1_item_2"}},
//!     "flush"
//!   ]
//! }
//! ```

use echo_client::{EngineConfig, ServerMessage};
use serde::Deserialize;
use webdom::{DomEvent, Element};

#[derive(Debug, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub config: Option<EngineConfig>,
    /// Elements appended to the document root before the first step.
    #[serde(default)]
    pub fixture: Vec<FixtureNode>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
pub struct FixtureNode {
    #[serde(default = "default_tag")]
    pub tag: String,
    pub id: Option<String>,
    pub text: Option<String>,
    pub css: Option<String>,
    #[serde(default)]
    pub children: Vec<FixtureNode>,
}

fn default_tag() -> String {
    "div".to_string()
}

impl FixtureNode {
    pub fn to_element(&self) -> Element {
        let mut element = Element::new(&self.tag);
        if let Some(id) = &self.id {
            element = element.id(id);
        }
        if let Some(text) = &self.text {
            element = element.text(text);
        }
        if let Some(css) = &self.css {
            element = element.css(css);
        }
        element.children(self.children.iter().map(FixtureNode::to_element))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    /// Apply a server message.
    Server(ServerMessage),
    /// Dispatch a DOM event.
    Event(DomEvent),
    /// Set the measured size of an element.
    Extent { id: String, width: i32, height: i32 },
    /// Pick an option of a native select, as the browser would before
    /// firing `change`.
    Choose {
        select: String,
        index: usize,
        #[serde(default)]
        extend: bool,
    },
    /// Print and drain the outgoing message.
    Flush,
}
