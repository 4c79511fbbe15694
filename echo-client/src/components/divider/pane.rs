use webdom::{Color, Document, DomError, Insets};

/// Layout data of one divider pane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaneData {
    /// CSS text for text and vertical alignment.
    pub alignment: Option<String>,
    pub background: Option<Color>,
    /// CSS text for a background image.
    pub background_image: Option<String>,
    pub insets: Option<Insets>,
    pub overflow: Option<String>,
    pub minimum_size: i32,
    /// `None` means unbounded.
    pub maximum_size: Option<i32>,
}

impl PaneData {
    pub fn padding_height(&self) -> i32 {
        self.insets.map_or(0, |i| i.vertical_total())
    }

    pub fn padding_width(&self) -> i32 {
        self.insets.map_or(0, |i| i.horizontal_total())
    }

    /// Paint this layout data onto a pane element, clearing whatever an
    /// earlier layout set.
    pub fn apply_style(&self, document: &mut Document, pane: &str) -> Result<(), DomError> {
        match &self.alignment {
            Some(alignment) => document.apply_css_text(pane, alignment)?,
            None => {
                document.set_style_property(pane, "text-align", "")?;
                document.set_style_property(pane, "vertical-align", "")?;
            }
        }
        let background = self.background.map(|c| c.to_css()).unwrap_or_default();
        document.set_style_property(pane, "background-color", background)?;
        match &self.background_image {
            Some(image) => document.apply_css_text(pane, image)?,
            None => document.set_style_property(pane, "background-image", "")?,
        }
        document.set_style_property(pane, "overflow", self.overflow.as_deref().unwrap_or("auto"))?;
        let padding = self.insets.map_or_else(|| "0".to_string(), |i| i.to_string());
        document.set_style_property(pane, "padding", padding)?;
        Ok(())
    }
}
