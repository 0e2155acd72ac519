//! Edit transactions and incremental recalculation.

use std::collections::HashSet;

use gridcalc_engine::engine::{Cell, CellRef, evaluate};

use super::state::{Document, Snapshot};

impl Document {
    /// Apply one edit and recompute everything it affects.
    ///
    /// One synchronous transaction: clone the committed sheet into a working
    /// copy, evaluate entirely against it, commit it atomically. Every
    /// affected formula cell is fully re-evaluated (re-deriving its own
    /// references from scratch), so the result does not depend on the
    /// visitation order over the affected set.
    pub fn apply_edit(&mut self, target: CellRef, input: &str) -> Snapshot {
        let mut working = (*self.snapshot()).clone();

        let mut cell = Cell::from_input(input);
        if cell.is_formula() {
            // The evaluator must see the new formula when resolving the
            // edited cell itself, so insert before evaluating.
            working.insert(target.clone(), cell.clone());
            let mut visiting = HashSet::new();
            cell.display = evaluate(&target, &working, &mut self.graph, &mut visiting);
        } else if self
            .get_cell(target.row, target.col)
            .is_some_and(Cell::is_formula)
        {
            // Literal replacing a formula: the cell no longer reads anyone.
            self.graph.clear_cell(&target);
        }
        working.insert(target.clone(), cell);

        for affected in self.affected_by(&target) {
            let is_formula = working.get(&affected).is_some_and(Cell::is_formula);
            if !is_formula {
                continue;
            }
            let mut visiting = HashSet::new();
            let display = evaluate(&affected, &working, &mut self.graph, &mut visiting);
            if let Some(entry) = working.get_mut(&affected)
                && entry.display != display
            {
                entry.display = display;
            }
        }

        self.commit(working)
    }

    /// Coordinate-based convenience wrapper around [`Document::apply_edit`].
    pub fn apply_edit_at(&mut self, row: usize, col: usize, input: &str) -> Snapshot {
        self.apply_edit(CellRef::new(row, col), input)
    }

    /// Transitive closure of cells that may need recomputation after an edit
    /// to `changed`, the edited cell included. Stack-based walk over reverse
    /// edges, deduplicated with a visited set.
    fn affected_by(&self, changed: &CellRef) -> Vec<CellRef> {
        let mut to_process = vec![changed.clone()];
        let mut visited = HashSet::new();
        let mut affected = Vec::new();

        while let Some(cell) = to_process.pop() {
            if !visited.insert(cell.clone()) {
                continue;
            }
            for dependent in self.graph.dependents_of(&cell) {
                if !visited.contains(dependent) {
                    to_process.push(dependent.clone());
                }
            }
            affected.push(cell);
        }
        affected
    }
}
