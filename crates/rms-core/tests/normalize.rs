//! Integration tests for schema normalization.

use chrono::NaiveDate;

use rms_core::normalize;
use rms_ingest::RawTable;

fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable {
        headers: headers.iter().map(|h| (*h).to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect(),
        skipped_rows: 0,
    }
}

#[test]
fn maps_all_source_columns() {
    let raw = table(
        &[
            "Site Id",
            "Region",
            "Sub Region",
            "Device Brand",
            "Reason",
            "Offline Date",
            "Days Passed",
            "Aging",
            "Domain",
        ],
        &[&[
            "S1",
            "Sindh",
            "North",
            "X",
            "Power",
            "2025-01-15",
            "120",
            "100+ Days",
            "Enfra",
        ]],
    );
    let records = normalize(&raw);
    let record = &records.records()[0];

    assert_eq!(record.site_id.as_deref(), Some("S1"));
    assert_eq!(record.region.as_deref(), Some("Sindh"));
    assert_eq!(record.sub_region.as_deref(), Some("North"));
    assert_eq!(record.device_brand.as_deref(), Some("X"));
    assert_eq!(record.reason, "Power");
    assert_eq!(
        record.offline_date,
        NaiveDate::from_ymd_opt(2025, 1, 15)
    );
    assert_eq!(record.days_passed, 120.0);
    assert_eq!(record.aging_category, "100+ Days");
    assert_eq!(record.domain.as_deref(), Some("Enfra"));
}

#[test]
fn empty_days_passed_defaults_to_zero() {
    let raw = table(&["Days Passed"], &[&[""], &["bogus"], &["42"]]);
    let records = normalize(&raw);

    assert_eq!(records.records()[0].days_passed, 0.0);
    assert_eq!(records.records()[1].days_passed, 0.0);
    assert_eq!(records.records()[2].days_passed, 42.0);
}

#[test]
fn missing_category_cells_become_unknown() {
    let raw = table(&["Reason", "Aging"], &[&["", "  "]]);
    let records = normalize(&raw);
    let record = &records.records()[0];

    assert_eq!(record.reason, "Unknown");
    assert_eq!(record.aging_category, "Unknown");
}

#[test]
fn unparsable_date_becomes_the_no_date_marker() {
    let raw = table(&["Offline Date"], &[&["yesterday-ish"]]);
    let records = normalize(&raw);

    assert_eq!(records.records()[0].offline_date, None);
}

#[test]
fn header_whitespace_is_ignored_for_column_lookup() {
    let raw = table(&["  Sub Region  ", " Days Passed"], &[&["North", "7"]]);
    let records = normalize(&raw);
    let record = &records.records()[0];

    assert_eq!(record.sub_region.as_deref(), Some("North"));
    assert_eq!(record.days_passed, 7.0);
}

#[test]
fn missing_columns_behave_as_all_absent() {
    let raw = table(&["Site Id"], &[&["S1"]]);
    let records = normalize(&raw);
    let record = &records.records()[0];

    assert_eq!(record.sub_region, None);
    assert_eq!(record.device_brand, None);
    assert_eq!(record.reason, "Unknown");
    assert_eq!(record.aging_category, "Unknown");
    assert_eq!(record.days_passed, 0.0);
    assert_eq!(record.offline_date, None);
}

#[test]
fn values_keep_their_whitespace() {
    let raw = table(&["Sub Region"], &[&[" North "]]);
    let records = normalize(&raw);

    assert_eq!(records.records()[0].sub_region.as_deref(), Some(" North "));
}
