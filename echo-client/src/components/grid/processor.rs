//! Server directives for grids.
//!
//! One `init` may bind several tables sharing rollover and selection styles.

use serde::Deserialize;

use super::Grid;
use crate::components::selection::SelectionMode;
use crate::error::ClientError;
use crate::processor::ProcessContext;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum GridOp {
    Init(GridInit),
    Dispose { tables: Vec<TableRef> },
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableRef {
    pub eid: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WireSelectionMode {
    #[default]
    Single,
    Multiple,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RowRef {
    pub index: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GridInit {
    pub rollover_style: Option<String>,
    pub selection_style: Option<String>,
    #[serde(default)]
    pub tables: Vec<TableInit>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TableInit {
    pub eid: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub header_visible: bool,
    #[serde(default)]
    pub rollover_enabled: bool,
    #[serde(default)]
    pub selection_enabled: bool,
    #[serde(default)]
    pub selection_mode: WireSelectionMode,
    #[serde(default)]
    pub server_notify: bool,
    /// Rows selected when the table is rendered.
    #[serde(default)]
    pub rows: Vec<RowRef>,
}

pub fn process(cx: &mut ProcessContext<'_>, ops: &[GridOp]) -> Result<(), ClientError> {
    for op in ops {
        match op {
            GridOp::Init(init) => process_init(cx, init)?,
            GridOp::Dispose { tables } => {
                for table in tables {
                    process_dispose(cx, &table.eid);
                }
            }
        }
    }
    Ok(())
}

fn process_init(cx: &mut ProcessContext<'_>, init: &GridInit) -> Result<(), ClientError> {
    for table in &init.tables {
        let mut grid = Grid::new(&table.eid);
        grid.enabled = table.enabled;
        grid.header_visible = table.header_visible;
        grid.rollover_enabled = table.rollover_enabled;
        if table.rollover_enabled {
            grid.rollover_style = init.rollover_style.clone();
        }
        if table.selection_enabled {
            grid.selection_style = init.selection_style.clone();
            grid.selection_mode = match table.selection_mode {
                WireSelectionMode::Single => SelectionMode::Single,
                WireSelectionMode::Multiple => SelectionMode::Multiple,
            };
            grid.server_notify = table.server_notify;
        }

        let (registry, mut component_cx) = cx.split();
        if let Some(mut previous) = registry.unregister(&table.eid) {
            log::warn!("grid {} replaces a live controller", table.eid);
            previous.dispose(&mut component_cx);
        }
        grid.init(&mut component_cx)?;
        for row in &table.rows {
            grid.set_selected(&mut component_cx, row.index, true)?;
        }
        registry.register(Box::new(grid));
    }
    Ok(())
}

fn process_dispose(cx: &mut ProcessContext<'_>, eid: &str) {
    let (registry, mut component_cx) = cx.split();
    match registry.unregister_as::<Grid>(eid) {
        Some(mut grid) => grid.dispose(&mut component_cx),
        None => log::debug!("dispose of unknown grid {}", eid),
    }
}
