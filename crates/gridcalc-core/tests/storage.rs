//! Integration tests for the sheet file format.

use gridcalc_core::storage::{load_sheet_content, render_sheet};
use gridcalc_core::{CellRef, GridcalcError};

#[test]
fn test_load_sheet_content() {
    let document = load_sheet_content(
        "# prices\n\
         A1: 5\n\
         \n\
         B1: =A1*2\n",
    )
    .unwrap();

    assert_eq!(document.get_display(&CellRef::from_str("A1").unwrap()), "5");
    assert_eq!(document.get_display(&CellRef::from_str("B1").unwrap()), "10");
}

#[test]
fn test_load_order_independent_of_reference_direction() {
    // A formula may appear before the cell it reads; the replay fills it in.
    let document = load_sheet_content("B1: =A1+1\nA1: 4\n").unwrap();
    assert_eq!(document.get_display(&CellRef::from_str("B1").unwrap()), "5");
}

#[test]
fn test_round_trip_preserves_formulas() {
    let document = load_sheet_content("A1: 5\nB1: =A1*2\nC1: hello\n").unwrap();
    let rendered = render_sheet(&document);
    assert_eq!(rendered, "A1: 5\nB1: =A1*2\nC1: hello\n");

    let reloaded = load_sheet_content(&rendered).unwrap();
    assert_eq!(reloaded.get_display(&CellRef::from_str("B1").unwrap()), "10");
}

#[test]
fn test_render_skips_cleared_cells() {
    let mut document = load_sheet_content("A1: 5\nB1: 6\n").unwrap();
    document.apply_edit(CellRef::from_str("A1").unwrap(), "");
    assert_eq!(render_sheet(&document), "B1: 6\n");
}

#[test]
fn test_render_sorts_by_row_then_column() {
    let document = load_sheet_content("B2: 4\nA1: 1\nB1: 2\nA2: 3\n").unwrap();
    assert_eq!(render_sheet(&document), "A1: 1\nB1: 2\nA2: 3\nB2: 4\n");
}

#[test]
fn test_parse_error_reports_line_number() {
    let err = load_sheet_content("A1: 5\nnot a cell line\n").unwrap_err();
    match err {
        GridcalcError::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_invalid_reference_reports_line_number() {
    let err = load_sheet_content("1A: 5\n").unwrap_err();
    match err {
        GridcalcError::Parse { line, message } => {
            assert_eq!(line, 1);
            assert!(message.contains("1A"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}
