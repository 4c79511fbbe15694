//! Rendering engine capability set.
//!
//! Every engine-specific branch in the controllers is keyed off one of these
//! flags. The host detects the engine once and passes the set in.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PlatformQuirks {
    /// Native list boxes cannot be updated through the DOM; render a
    /// synthesized list instead.
    pub select_list_dom_update: bool,
    /// Drop-downs select their first option when nothing is selected; a
    /// placeholder option has to be shown instead.
    pub select_requires_null_option: bool,
    /// Text selection starts while clicking or dragging and must be cancelled.
    pub suppress_select_start: bool,
    /// Proprietary `mouseenter`/`mouseleave` events are available.
    pub mouse_enter_leave: bool,
    /// Tab headers shrink after a style change unless they are removed and
    /// re-appended to force a reflow.
    pub reflow_tab_header_on_toggle: bool,
}

impl Default for PlatformQuirks {
    fn default() -> Self {
        Self::standard()
    }
}

impl PlatformQuirks {
    /// Baseline engine: drop-downs still need the placeholder option and the
    /// header reflow is harmless, so both stay on.
    pub const fn standard() -> Self {
        Self {
            select_list_dom_update: false,
            select_requires_null_option: true,
            suppress_select_start: false,
            mouse_enter_leave: false,
            reflow_tab_header_on_toggle: true,
        }
    }

    /// Gecko-family engines.
    pub const fn gecko() -> Self {
        Self::standard()
    }

    /// Trident-family engines.
    pub const fn trident() -> Self {
        Self {
            select_list_dom_update: true,
            select_requires_null_option: true,
            suppress_select_start: true,
            mouse_enter_leave: true,
            reflow_tab_header_on_toggle: false,
        }
    }

    /// Every workaround disabled.
    pub const fn none() -> Self {
        Self {
            select_list_dom_update: false,
            select_requires_null_option: false,
            suppress_select_start: false,
            mouse_enter_leave: false,
            reflow_tab_header_on_toggle: false,
        }
    }

    pub fn select_list_dom_update(mut self, value: bool) -> Self {
        self.select_list_dom_update = value;
        self
    }

    pub fn select_requires_null_option(mut self, value: bool) -> Self {
        self.select_requires_null_option = value;
        self
    }

    pub fn suppress_select_start(mut self, value: bool) -> Self {
        self.suppress_select_start = value;
        self
    }

    pub fn mouse_enter_leave(mut self, value: bool) -> Self {
        self.mouse_enter_leave = value;
        self
    }

    pub fn reflow_tab_header_on_toggle(mut self, value: bool) -> Self {
        self.reflow_tab_header_on_toggle = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let quirks: PlatformQuirks =
            serde_json::from_str(r#"{"select-list-dom-update": true}"#).unwrap();
        assert!(quirks.select_list_dom_update);
        assert!(quirks.select_requires_null_option);
        assert!(!quirks.suppress_select_start);
    }
}
