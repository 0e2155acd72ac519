//! gridcalc-core - UI-agnostic document model + storage.
//!
//! Owns the committed sheet snapshots, the edit transaction (incremental
//! recalculation over the dependency graph) and the plain-text sheet format.
//! Presentation layers call [`Document::apply_edit`] to write and
//! [`Document::get_cell`] / [`Document::snapshot`] to read; they never take
//! part in evaluation or dependency bookkeeping.

pub mod document;
pub mod error;
pub mod storage;

pub use document::{Document, Snapshot};
pub use error::{GridcalcError, Result};

pub use gridcalc_engine::engine::{Cell, CellRef};
