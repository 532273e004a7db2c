//! Integration tests for the export loader.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use rms_ingest::{IngestError, load_raw_table};

fn create_temp_csv(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file
}

#[test]
fn loads_utf8_export() {
    let file = create_temp_csv(b"Site Id,Sub Region,Reason\nS1,North,Power\nS2,South,Network\n");
    let table = load_raw_table(file.path()).unwrap();

    assert_eq!(table.headers, vec!["Site Id", "Sub Region", "Reason"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["S1", "North", "Power"]);
    assert_eq!(table.skipped_rows, 0);
}

#[test]
fn windows_1252_export_decodes_via_fallback() {
    // 0x92 (right single quote) is invalid UTF-8, forcing the fallback chain.
    let file = create_temp_csv(b"Reason\nPower \x92loss\x92\n");
    let table = load_raw_table(file.path()).unwrap();

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][0], "Power \u{2019}loss\u{2019}");
}

#[test]
fn row_wider_than_header_is_skipped() {
    let file = create_temp_csv(b"A,B\n1,2\n1,2,3\n4,5\n");
    let table = load_raw_table(file.path()).unwrap();

    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["1", "2"]);
    assert_eq!(table.rows[1], vec!["4", "5"]);
    assert_eq!(table.skipped_rows, 1);
}

#[test]
fn short_row_is_padded_to_header_width() {
    let file = create_temp_csv(b"A,B,C\n1\n");
    let table = load_raw_table(file.path()).unwrap();

    assert_eq!(table.rows[0], vec!["1", "", ""]);
}

#[test]
fn blank_lines_are_dropped() {
    let file = create_temp_csv(b"A,B\n1,2\n,\n3,4\n");
    let table = load_raw_table(file.path()).unwrap();

    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.skipped_rows, 0);
}

#[test]
fn missing_file_is_a_typed_error() {
    let result = load_raw_table(Path::new("/nonexistent/DB.csv"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn empty_file_is_a_typed_error() {
    let file = create_temp_csv(b"");
    let result = load_raw_table(file.path());
    assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
}

#[test]
fn bom_is_stripped_from_the_header() {
    let file = create_temp_csv(b"\xEF\xBB\xBFSite Id,Reason\nS1,Power\n");
    let table = load_raw_table(file.path()).unwrap();

    assert_eq!(table.headers[0], "Site Id");
}

#[test]
fn values_are_kept_verbatim() {
    let file = create_temp_csv(b"Reason\n  Power  \n");
    let table = load_raw_table(file.path()).unwrap();

    assert_eq!(table.rows[0][0], "  Power  ");
}
