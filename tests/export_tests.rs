use rslotboard::core::Board;
use rslotboard::errors::AppError;
use rslotboard::export::{ExportFormat, SlotExport, export_board};
use rslotboard::models::ColumnName;
use std::fs;

mod common;
use common::temp_path;

fn sample_board() -> Board {
    let mut board = Board::new();
    board.create("9", "0", "10", "0").unwrap();
    board.create("14", "0", "15", "30").unwrap();
    let first = board.store().column(ColumnName::Generator)[0].id;
    board.drop_on(first, ColumnName::Monday);
    board.drop_on(first, ColumnName::Sunday);
    board
}

#[test]
fn test_rows_follow_column_order() {
    let board = sample_board();
    let rows = SlotExport::from_store(board.store());

    let columns: Vec<&str> = rows.iter().map(|r| r.column.as_str()).collect();
    assert_eq!(columns, ["Generator", "Generator", "Monday", "Sunday"]);
    assert_eq!(rows[1].position, 2);
    assert_eq!(rows[1].label, "14:00-15:30");
    assert_eq!(rows[2].label, "09:00-10:00");
}

#[test]
fn test_export_json() {
    let path = temp_path("export_json", "json");
    let board = sample_board();

    let count = export_board(board.store(), ExportFormat::Json, &path, false, false).unwrap();
    assert_eq!(count, 4);

    let content = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3]["column"], "Sunday");
    assert_eq!(rows[3]["label"], "09:00-10:00");
}

#[test]
fn test_export_csv_has_header() {
    let path = temp_path("export_csv", "csv");
    let board = sample_board();

    export_board(board.store(), ExportFormat::Csv, &path, false, false).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("column,position,id,label"));
    assert_eq!(lines.count(), 4);
}

#[test]
fn test_export_refuses_existing_file_without_force() {
    let path = temp_path("export_existing", "json");
    fs::write(&path, "keep me").unwrap();
    let board = sample_board();

    let err = export_board(board.store(), ExportFormat::Json, &path, false, false).unwrap_err();
    assert!(matches!(err, AppError::Export(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");

    export_board(board.store(), ExportFormat::Json, &path, true, false).unwrap();
    assert_ne!(fs::read_to_string(&path).unwrap(), "keep me");
}
