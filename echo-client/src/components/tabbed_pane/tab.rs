/// One tab of a tabbed pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    /// `None` renders as `*`.
    pub title: Option<String>,
    /// The tab content is a pane component laid out without insets.
    pub pane: bool,
    /// Content has been delivered by the server. Selecting an unrendered
    /// tab needs a server round trip.
    pub rendered: bool,
}

impl Tab {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            pane: false,
            rendered: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn pane(mut self, pane: bool) -> Self {
        self.pane = pane;
        self
    }

    pub fn rendered(mut self, rendered: bool) -> Self {
        self.rendered = rendered;
        self
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("*")
    }
}
