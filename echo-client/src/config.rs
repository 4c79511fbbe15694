//! Engine configuration.

use serde::Deserialize;

use crate::quirks::PlatformQuirks;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EngineConfig {
    /// Engine workarounds handed to every controller.
    pub quirks: PlatformQuirks,

    /// End an active separator drag when the window loses focus, as if the
    /// mouse button had been released. When false a drag whose mouseup was
    /// lost keeps following the pointer until the next mouseup.
    pub cancel_drag_on_blur: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quirks: PlatformQuirks::default(),
            cancel_drag_on_blur: true,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quirks(mut self, quirks: PlatformQuirks) -> Self {
        self.quirks = quirks;
        self
    }

    pub fn cancel_drag_on_blur(mut self, value: bool) -> Self {
        self.cancel_drag_on_blur = value;
        self
    }
}
