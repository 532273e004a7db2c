//! Schema normalization: raw table to canonical record set.
//!
//! Column names are matched after trimming; cell values are kept verbatim
//! and only trimmed for parsing. Every coercion failure resolves to a
//! documented default, so normalization never fails for an individual row.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use rms_ingest::RawTable;
use rms_model::{OfflineRecord, RecordSet, UNKNOWN_CATEGORY};

const COL_SITE_ID: &str = "Site Id";
const COL_REGION: &str = "Region";
const COL_SUB_REGION: &str = "Sub Region";
const COL_DEVICE_BRAND: &str = "Device Brand";
const COL_REASON: &str = "Reason";
const COL_OFFLINE_DATE: &str = "Offline Date";
const COL_DAYS_PASSED: &str = "Days Passed";
const COL_AGING: &str = "Aging";
const COL_DOMAIN: &str = "Domain";

/// Date formats attempted for `Offline Date`, most common in exports first.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d-%b-%y",
    "%d-%b-%Y",
];

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Resolved column positions. A column missing from the export behaves as a
/// column of all-absent values, never a hard failure.
#[derive(Debug, Clone, Copy, Default)]
struct Columns {
    site_id: Option<usize>,
    region: Option<usize>,
    sub_region: Option<usize>,
    device_brand: Option<usize>,
    reason: Option<usize>,
    offline_date: Option<usize>,
    days_passed: Option<usize>,
    aging: Option<usize>,
    domain: Option<usize>,
}

impl Columns {
    fn resolve(headers: &[String]) -> Self {
        let position =
            |name: &str| headers.iter().position(|header| header.trim() == name);
        Self {
            site_id: position(COL_SITE_ID),
            region: position(COL_REGION),
            sub_region: position(COL_SUB_REGION),
            device_brand: position(COL_DEVICE_BRAND),
            reason: position(COL_REASON),
            offline_date: position(COL_OFFLINE_DATE),
            days_passed: position(COL_DAYS_PASSED),
            aging: position(COL_AGING),
            domain: position(COL_DOMAIN),
        }
    }
}

/// Normalizes a raw table into the canonical record set.
///
/// Total over any [`RawTable`]: malformed field values resolve to their
/// defaults (`None` for the optional strings and the date, `0.0` for
/// `days_passed`, [`UNKNOWN_CATEGORY`] for `reason` and `aging_category`).
pub fn normalize(table: &RawTable) -> RecordSet {
    let columns = Columns::resolve(&table.headers);
    let records: Vec<OfflineRecord> = table
        .rows
        .iter()
        .map(|row| OfflineRecord {
            site_id: non_empty(cell(row, columns.site_id)),
            region: non_empty(cell(row, columns.region)),
            sub_region: non_empty(cell(row, columns.sub_region)),
            device_brand: non_empty(cell(row, columns.device_brand)),
            reason: category_or_unknown(cell(row, columns.reason)),
            offline_date: parse_offline_date(cell(row, columns.offline_date)),
            days_passed: coerce_days(cell(row, columns.days_passed)),
            aging_category: category_or_unknown(cell(row, columns.aging)),
            domain: non_empty(cell(row, columns.domain)),
        })
        .collect();
    debug!(records = records.len(), "normalized record set");
    RecordSet::new(records)
}

fn cell<'a>(row: &'a [String], position: Option<usize>) -> &'a str {
    position
        .and_then(|idx| row.get(idx))
        .map(String::as_str)
        .unwrap_or("")
}

fn non_empty(cell: &str) -> Option<String> {
    if cell.trim().is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}

fn category_or_unknown(cell: &str) -> String {
    if cell.trim().is_empty() {
        UNKNOWN_CATEGORY.to_string()
    } else {
        cell.to_string()
    }
}

/// Numeric coercion of `Days Passed`: absence or parse failure is `0.0`.
pub fn coerce_days(cell: &str) -> f64 {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(0.0)
}

/// Parses an `Offline Date` cell; any failure is the `None` marker.
pub fn parse_offline_date(cell: &str) -> Option<NaiveDate> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}
