//! Bidirectional dependency tracking between cells.

use std::collections::{HashMap, HashSet};

use super::cell_ref::CellRef;

/// Dependency index over formula cells.
///
/// Maintains both edge directions for O(1) lookups:
/// - `depends_on[c]` = cells that c's formula currently reads
/// - `dependents[d]` = cells whose formulas read d
///
/// Invariants:
/// 1. Every edge appears in both maps or in neither; [`DepGraph::replace_edges`]
///    is the only mutator that touches both and restores this atomically.
/// 2. Empty sets are removed, not stored.
/// 3. The stored graph may legally contain cycles (A1=B1, B1=A1). Cycle
///    safety is the evaluator's transient visiting guard, never a structural
///    property of the index.
#[derive(Debug, Default, Clone)]
pub struct DepGraph {
    depends_on: HashMap<CellRef, HashSet<CellRef>>,
    dependents: HashMap<CellRef, HashSet<CellRef>>,
}

impl DepGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells the given formula cell currently reads.
    pub fn depends_on(&self, cell: &CellRef) -> impl Iterator<Item = &CellRef> + '_ {
        self.depends_on.get(cell).into_iter().flatten()
    }

    /// Cells whose formulas read the given cell.
    pub fn dependents_of(&self, cell: &CellRef) -> impl Iterator<Item = &CellRef> + '_ {
        self.dependents.get(cell).into_iter().flatten()
    }

    /// Replace all edges owned by a formula cell atomically: every old edge
    /// is removed from both directions before the new set is inserted.
    pub fn replace_edges(&mut self, cell: &CellRef, new_deps: HashSet<CellRef>) {
        if let Some(old_deps) = self.depends_on.remove(cell) {
            for dep in old_deps {
                if let Some(back) = self.dependents.get_mut(&dep) {
                    back.remove(cell);
                    if back.is_empty() {
                        self.dependents.remove(&dep);
                    }
                }
            }
        }

        if new_deps.is_empty() {
            return;
        }

        for dep in &new_deps {
            self.dependents
                .entry(dep.clone())
                .or_default()
                .insert(cell.clone());
        }
        self.depends_on.insert(cell.clone(), new_deps);
    }

    /// Remove every edge owned by a cell (its content is no longer a formula).
    pub fn clear_cell(&mut self, cell: &CellRef) {
        self.replace_edges(cell, HashSet::new());
    }
}
