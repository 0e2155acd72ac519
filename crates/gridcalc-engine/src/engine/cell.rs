//! Cell records and sheet storage.
//!
//! A [`Cell`] keeps the exact text the user committed, the formula body when
//! that text is a formula, and the cached display value last produced by
//! evaluation. The display value is always re-derivable from the raw input
//! plus the current values of referenced cells; it is a cache, never a second
//! source of truth.

use std::collections::HashMap;

use super::cell_ref::CellRef;

/// A cell in the sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The exact text last committed for this cell.
    pub raw: String,
    /// The expression body, present iff `raw` begins with `=` (marker stripped).
    pub formula: Option<String>,
    /// Cached display value: the literal `raw` for non-formula cells, a
    /// stringified numeric result, or an error sentinel.
    pub display: String,
}

impl Cell {
    /// Build a cell record from committed input.
    /// Input beginning with `=` is a formula; its display value is filled in
    /// by the evaluator. Anything else is a literal displayed verbatim.
    pub fn from_input(input: &str) -> Cell {
        match input.strip_prefix('=') {
            Some(expr) => Cell {
                raw: input.to_string(),
                formula: Some(expr.to_string()),
                display: String::new(),
            },
            None => Cell {
                raw: input.to_string(),
                formula: None,
                display: input.to_string(),
            },
        }
    }

    pub fn is_formula(&self) -> bool {
        self.formula.is_some()
    }

    /// Get the text to show while the cell is being edited.
    pub fn to_input_string(&self) -> String {
        match &self.formula {
            Some(expr) => format!("={}", expr),
            None => self.raw.clone(),
        }
    }
}

/// Sparse sheet storage. Committed sheets are never mutated in place: an edit
/// clones the map, works on the clone and publishes it wholesale.
pub type Sheet = HashMap<CellRef, Cell>;
