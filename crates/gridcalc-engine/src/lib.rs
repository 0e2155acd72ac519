//! gridcalc_engine - Spreadsheet formula engine.
//!
//! References, cell records, flat arithmetic evaluation, the bidirectional
//! dependency graph and the recursive cell evaluator. Storage and edit
//! transactions live in `gridcalc-core`.

pub mod engine;
