//! Sheet file storage.
//!
//! Plain-text format, one cell per line: `CELLREF: INPUT`. Blank lines and
//! lines starting with `#` are skipped. Formula cells store their editing
//! text (`=...`), so a written sheet replays into the same computed state.

use std::fs;
use std::path::Path;

use gridcalc_engine::engine::{Cell, CellRef};

use crate::document::Document;
use crate::error::{GridcalcError, Result};

/// Load a sheet file into a fresh document.
pub fn load_sheet(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)?;
    load_sheet_content(&content)
}

/// Parse sheet content from a string.
///
/// Each line is replayed through `apply_edit` in file order, so dependency
/// state is rebuilt exactly as if the cells had been typed in.
pub fn load_sheet_content(content: &str) -> Result<Document> {
    let mut document = Document::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((cell_ref_str, input)) = line.split_once(':') else {
            return Err(GridcalcError::Parse {
                line: line_num + 1,
                message: "Expected 'CELLREF: INPUT' format".to_string(),
            });
        };

        let cell_ref_str = cell_ref_str.trim();
        let input = input.trim();

        let cell_ref = CellRef::from_str(cell_ref_str).ok_or_else(|| GridcalcError::Parse {
            line: line_num + 1,
            message: format!("Invalid cell reference: {}", cell_ref_str),
        })?;

        document.apply_edit(cell_ref, input);
    }

    Ok(document)
}

/// Write the committed cells back out, sorted by (row, col).
/// Empty literals (cleared cells) are skipped.
pub fn write_sheet(path: &Path, document: &Document) -> Result<()> {
    fs::write(path, render_sheet(document))?;
    Ok(())
}

/// Render the committed cells to sheet-file text.
pub fn render_sheet(document: &Document) -> String {
    let snapshot = document.snapshot();
    let mut cells: Vec<(&CellRef, &Cell)> = snapshot
        .iter()
        .filter(|(_, cell)| !cell.raw.is_empty())
        .collect();
    cells.sort_by_key(|(cell_ref, _)| (cell_ref.row, cell_ref.col));

    let mut out = String::new();
    for (cell_ref, cell) in cells {
        out.push_str(&format!("{}: {}\n", cell_ref, cell.to_input_string()));
    }
    out
}
