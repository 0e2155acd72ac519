//! Core document state: the committed sheet and its dependency graph.

use std::collections::HashMap;
use std::sync::Arc;

use gridcalc_engine::engine::{Cell, CellRef, DepGraph, Sheet};

/// A committed, immutable view of the sheet.
///
/// `apply_edit` never mutates a published snapshot: it clones the map, works
/// on the clone and swaps it in wholesale. A reader holding an older snapshot
/// keeps a fully consistent pre-edit state.
pub type Snapshot = Arc<Sheet>;

/// UI-agnostic document: committed cells plus dependency bookkeeping.
///
/// Execution is single-threaded and synchronous; one edit runs to completion
/// before the next. Callers sharing a document across threads must serialize
/// `apply_edit` themselves - snapshots keep readers safe either way.
#[derive(Debug)]
pub struct Document {
    /// Committed cell store, replaced wholesale on every edit.
    sheet: Snapshot,
    /// Bidirectional dependency index for all formula cells.
    pub(crate) graph: DepGraph,
}

impl Document {
    pub fn new() -> Self {
        Document {
            sheet: Arc::new(HashMap::new()),
            graph: DepGraph::new(),
        }
    }

    /// Current committed snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.sheet)
    }

    /// Read accessor for a cell by coordinates. Cells never written are None;
    /// cleared cells stay present as empty literals.
    pub fn get_cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.sheet.get(&CellRef::new(row, col))
    }

    /// Display value for a cell; empty for cells never written.
    pub fn get_display(&self, cell: &CellRef) -> String {
        self.sheet
            .get(cell)
            .map(|c| c.display.clone())
            .unwrap_or_default()
    }

    /// Cells whose formulas currently read `cell`.
    pub fn dependents_of(&self, cell: &CellRef) -> Vec<CellRef> {
        self.graph.dependents_of(cell).cloned().collect()
    }

    /// Cells `cell`'s formula currently reads.
    pub fn depends_on(&self, cell: &CellRef) -> Vec<CellRef> {
        self.graph.depends_on(cell).cloned().collect()
    }

    pub(crate) fn commit(&mut self, working: Sheet) -> Snapshot {
        self.sheet = Arc::new(working);
        Arc::clone(&self.sheet)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
