//! Table row selection and rollover controller.
//!
//! The table markup is rendered by the server; the controller attaches to
//! its rows and paints selection and rollover through temporary cell styles.

mod events;
pub mod processor;

use webdom::{Document, EventKind, ListenerTarget};

use crate::components::ComponentContext;
use crate::components::selection::{RowSelection, SelectionMode};
use crate::error::ClientError;
use crate::outgoing::PropertyValue;

pub use processor::GridOp;

#[derive(Debug, Clone, Default)]
pub struct Grid {
    element_id: String,
    pub(crate) enabled: bool,
    pub(crate) header_visible: bool,
    pub(crate) rollover_enabled: bool,
    pub(crate) rollover_style: Option<String>,
    pub(crate) selection_mode: SelectionMode,
    pub(crate) selection_style: Option<String>,
    pub(crate) server_notify: bool,

    /// Row element ids, header row included when visible.
    rows: Vec<String>,
    selection: RowSelection,
    rollover_kinds: Vec<EventKind>,
}

/// `tr` elements of a table in document order, skipping nested tables.
fn table_rows(document: &Document, table: &str) -> Vec<String> {
    let mut rows = Vec::new();
    let mut stack: Vec<&str> = document.children(table).iter().rev().map(String::as_str).collect();
    while let Some(id) = stack.pop() {
        let Some(element) = document.get(id) else {
            continue;
        };
        match element.tag.as_str() {
            "tr" => rows.push(id.to_string()),
            "table" => {}
            _ => stack.extend(element.child_ids().iter().rev().map(String::as_str)),
        }
    }
    rows
}

/// Row index encoded in a row element id (`..._tr_<n>`); the header row
/// (`..._tr_header`) has none.
pub fn row_index_of(row_id: &str) -> Option<usize> {
    let (_, suffix) = row_id.rsplit_once("_tr_")?;
    if suffix == "header" {
        return None;
    }
    suffix.parse().ok()
}

impl Grid {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            enabled: true,
            ..Self::default()
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len() - self.header_offset().min(self.rows.len())
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.selection.is_selected(row)
    }

    pub fn selected_rows(&self) -> Vec<usize> {
        self.selection.selected()
    }

    fn header_offset(&self) -> usize {
        usize::from(self.header_visible)
    }

    /// Element id of body row `row`.
    pub fn row_element(&self, row: usize) -> Option<&str> {
        if row >= self.row_count() {
            return None;
        }
        self.rows.get(row + self.header_offset()).map(String::as_str)
    }

    fn listener_kinds(&self) -> Vec<EventKind> {
        let mut kinds = Vec::new();
        if self.rollover_enabled {
            kinds.extend_from_slice(&self.rollover_kinds);
        }
        if self.selection_mode.is_enabled() {
            kinds.push(EventKind::Click);
            kinds.push(EventKind::MouseDown);
        }
        kinds
    }

    /// Bind to the rendered table and attach row listeners.
    pub fn init(&mut self, cx: &mut ComponentContext<'_>) -> Result<(), ClientError> {
        if !cx.document.contains(&self.element_id) {
            return Err(ClientError::ElementNotFound(self.element_id.clone()));
        }
        self.rows = table_rows(cx.document, &self.element_id);
        self.selection = RowSelection::new();
        self.rollover_kinds = if cx.quirks.mouse_enter_leave {
            vec![EventKind::MouseEnter, EventKind::MouseLeave]
        } else {
            vec![EventKind::MouseOver, EventKind::MouseOut]
        };

        let kinds = self.listener_kinds();
        for row in self.rows.iter().skip(self.header_offset()) {
            for &kind in &kinds {
                cx.document
                    .listeners_mut()
                    .add(ListenerTarget::element(row), kind, &self.element_id);
            }
        }
        log::debug!(
            "grid {} bound to {} rows ({:?})",
            self.element_id,
            self.row_count(),
            self.selection_mode
        );
        Ok(())
    }

    pub fn dispose(&mut self, cx: &mut ComponentContext<'_>) {
        let kinds = self.listener_kinds();
        for row in self.rows.iter().skip(self.header_offset()) {
            let target = ListenerTarget::element(row);
            for &kind in &kinds {
                cx.document.listeners_mut().remove(&target, kind);
            }
        }
        self.rows.clear();
    }

    /// Set one row's selection state and repaint it. Rows outside the table
    /// are ignored.
    pub fn set_selected(
        &mut self,
        cx: &mut ComponentContext<'_>,
        row: usize,
        selected: bool,
    ) -> Result<(), ClientError> {
        if row >= self.row_count() {
            log::debug!("grid {} has no row {}", self.element_id, row);
            return Ok(());
        }
        self.selection.set(row, selected);
        self.draw_row_style(cx, row)
    }

    fn clear_selected(&mut self, cx: &mut ComponentContext<'_>) -> Result<(), ClientError> {
        for row in self.selection.clear() {
            self.draw_row_style(cx, row)?;
        }
        Ok(())
    }

    fn cells(&self, cx: &ComponentContext<'_>, row_id: &str) -> Vec<String> {
        cx.document
            .children(row_id)
            .iter()
            .filter(|c| cx.document.get(c).is_some_and(|e| e.tag == "td" || e.tag == "th"))
            .cloned()
            .collect()
    }

    /// Paint a row from its selection state alone, discarding any rollover.
    fn draw_row_style(&self, cx: &mut ComponentContext<'_>, row: usize) -> Result<(), ClientError> {
        let Some(row_id) = self.row_element(row) else {
            return Ok(());
        };
        let selected = self.selection.is_selected(row);
        for cell in self.cells(cx, row_id) {
            cx.document.restore_original_style(&cell)?;
            if let (true, Some(style)) = (selected, &self.selection_style) {
                cx.document.apply_temporary_style(&cell, style)?;
            }
        }
        Ok(())
    }

    fn draw_rollover(&self, cx: &mut ComponentContext<'_>, row_id: &str) -> Result<(), ClientError> {
        let Some(style) = &self.rollover_style else {
            return Ok(());
        };
        for cell in self.cells(cx, row_id) {
            cx.document.apply_temporary_style(&cell, style)?;
        }
        Ok(())
    }

    fn update_client_message(&self, cx: &mut ComponentContext<'_>) {
        cx.outgoing.set_property(
            &self.element_id,
            "selection",
            PropertyValue::rows(self.selection.selected()),
        );
    }
}
