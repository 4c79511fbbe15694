//! Tabbed pane appearance: border placement, tab state styles and the
//! header geometry derived from them.

use webdom::{Color, Insets};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TabPosition {
    #[default]
    Top,
    Bottom,
}

/// Where the content area draws its border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderType {
    None,
    /// Only the edge touching the tab headers.
    #[default]
    AdjacentToTabs,
    /// The two edges parallel to the header row.
    ParallelToTabs,
    Surround,
}

impl BorderType {
    /// Parse the `border-type` attribute; anything unknown is adjacent.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("none") => BorderType::None,
            Some("surround") => BorderType::Surround,
            Some("parallel") => BorderType::ParallelToTabs,
            _ => BorderType::AdjacentToTabs,
        }
    }

    /// Offsets of the pane inside its container.
    ///
    /// Surround keeps every inset. Every other type, parallel included,
    /// keeps only the inset on the tab side.
    pub fn rendered_insets(self, insets: Insets, position: TabPosition) -> Insets {
        match (self, position) {
            (BorderType::Surround, _) => insets,
            (_, TabPosition::Bottom) => Insets::new(0, 0, insets.bottom, 0),
            (_, TabPosition::Top) => Insets::new(insets.top, 0, 0, 0),
        }
    }
}

/// Look of a tab header in one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStateStyle {
    pub background: Color,
    /// CSS text applied to the header for a background image.
    pub background_image: Option<String>,
    pub border_size: i32,
    pub border_style: String,
    pub border_color: Color,
    /// CSS text applied to the header for the tab font.
    pub font: Option<String>,
    /// Empty foreground inherits from the pane.
    pub foreground: Option<Color>,
}

impl TabStateStyle {
    pub fn active() -> Self {
        Self {
            background: Color::rgb(0xff, 0xff, 0xff),
            background_image: None,
            border_size: 1,
            border_style: "solid".to_string(),
            border_color: Color::rgb(0x00, 0x00, 0x4f),
            font: None,
            foreground: None,
        }
    }

    pub fn inactive() -> Self {
        Self {
            background: Color::rgb(0xaf, 0xaf, 0xcf),
            background_image: None,
            border_size: 1,
            border_style: "solid".to_string(),
            border_color: Color::rgb(0x7f, 0x7f, 0x7f),
            font: None,
            foreground: None,
        }
    }

    /// CSS border shorthand, e.g. `1px solid #00004f`.
    pub fn border(&self) -> String {
        format!("{}px {} {}", self.border_size, self.border_style, self.border_color)
    }

    pub fn foreground_css(&self) -> String {
        self.foreground.map(|c| c.to_css()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStyle {
    pub border_type: BorderType,
    pub tab_position: TabPosition,
    pub default_background: Color,
    pub default_foreground: Color,
    pub default_font: Option<String>,
    pub insets: Insets,
    pub default_content_insets: Insets,
    pub header_padding: Insets,
    pub tab_inset: i32,
    pub tab_spacing: i32,
    pub header_height: i32,
    pub active_header_height_increase: i32,
    pub active: TabStateStyle,
    pub inactive: TabStateStyle,
}

impl Default for TabStyle {
    fn default() -> Self {
        Self {
            border_type: BorderType::default(),
            tab_position: TabPosition::default(),
            default_background: Color::rgb(0xff, 0xff, 0xff),
            default_foreground: Color::rgb(0x00, 0x00, 0x00),
            default_font: None,
            insets: Insets::all(2),
            default_content_insets: Insets::all(0),
            header_padding: Insets::symmetric(3, 8),
            tab_inset: 10,
            tab_spacing: 0,
            header_height: 32,
            active_header_height_increase: 2,
            active: TabStateStyle::active(),
            inactive: TabStateStyle::inactive(),
        }
    }
}

impl TabStyle {
    pub fn state(&self, active: bool) -> &TabStateStyle {
        if active { &self.active } else { &self.inactive }
    }

    /// Inner height of a tab header div.
    pub fn header_div_height(&self, active: bool) -> i32 {
        let height = self.header_height - self.header_padding.vertical_total();
        if active {
            height
        } else {
            height - self.active_header_height_increase - self.inactive.border_size
        }
    }

    /// Top margin that lets inactive headers sit lower than the active one.
    pub fn header_margin_top(&self, active: bool) -> i32 {
        match (active, self.tab_position) {
            (true, _) => 0,
            (false, TabPosition::Bottom) => self.active.border_size,
            (false, TabPosition::Top) => self.active_header_height_increase,
        }
    }

    pub fn header_container_height(&self) -> i32 {
        self.header_height + self.active.border_size
    }

    pub fn rendered_insets(&self) -> Insets {
        self.border_type.rendered_insets(self.insets, self.tab_position)
    }

    /// Padding of a tab's content panel. Pane tabs lay out their own child
    /// and get none.
    pub fn content_insets(&self, pane: bool) -> Insets {
        if pane {
            Insets::default()
        } else {
            self.default_content_insets
        }
    }
}
