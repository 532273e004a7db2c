//! Aggregate statistics over record sets.
//!
//! Every function here is total: defined for a record set of any size,
//! including empty, and never panicking. "No data" is a value (`0`, `0.0`,
//! [`NO_DATA_PLACEHOLDER`], an empty table), not an error.

use std::collections::HashMap;

use rms_model::{
    CRITICAL_AGING_CATEGORY, CategoryCount, DOMAIN_ENFRA, DOMAIN_SMS_LD, Dimension,
    DomainBreakdown, NO_DATA_PLACEHOLDER, OfflineRecord, OfflineSummary, RecordSet,
    RegionDomainCount, UNKNOWN_CATEGORY,
};

pub fn count(records: &RecordSet) -> usize {
    records.len()
}

/// Arithmetic mean of `days_passed`, rounded to one decimal for display.
///
/// Defined as `0.0` for the empty set, not NaN.
pub fn mean_days(records: &RecordSet) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(|record| record.days_passed).sum();
    round_one_decimal(sum / records.len() as f64)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Records satisfying `predicate`.
pub fn threshold_count<F>(records: &RecordSet, predicate: F) -> usize
where
    F: Fn(&OfflineRecord) -> bool,
{
    records.iter().filter(|record| predicate(record)).count()
}

/// Records in the critical aging bucket.
pub fn critical_count(records: &RecordSet) -> usize {
    threshold_count(records, |record| {
        record.aging_category == CRITICAL_AGING_CATEGORY
    })
}

/// Frequency table ordered descending by count.
///
/// Ties keep the first-encountered category, in original record order; a
/// record with no value for the dimension tallies under
/// [`UNKNOWN_CATEGORY`].
pub fn group_counts(records: &RecordSet, dimension: Dimension) -> Vec<CategoryCount> {
    tally(records.iter().map(|record| {
        record
            .dimension_value(dimension)
            .unwrap_or(UNKNOWN_CATEGORY)
    }))
}

/// [`group_counts`] truncated to the `limit` most frequent categories.
pub fn top_categories(
    records: &RecordSet,
    dimension: Dimension,
    limit: usize,
) -> Vec<CategoryCount> {
    let mut counts = group_counts(records, dimension);
    counts.truncate(limit);
    counts
}

/// Frequency table of `reason`, descending by count.
pub fn reason_counts(records: &RecordSet) -> Vec<CategoryCount> {
    tally(records.iter().map(|record| record.reason.as_str()))
}

/// The `limit` most frequent reasons (the "top 10 reasons" chart).
pub fn top_reasons(records: &RecordSet, limit: usize) -> Vec<CategoryCount> {
    let mut counts = reason_counts(records);
    counts.truncate(limit);
    counts
}

/// Most frequent reason; [`NO_DATA_PLACEHOLDER`] for the empty set.
///
/// Tie-break: the first-encountered reason among those tied for maximum
/// frequency, in original record order.
pub fn most_common_reason(records: &RecordSet) -> String {
    reason_counts(records)
        .into_iter()
        .next()
        .map(|entry| entry.category)
        .unwrap_or_else(|| NO_DATA_PLACEHOLDER.to_string())
}

/// Mode of a filterable dimension with a caller-chosen empty-set default.
pub fn mode(records: &RecordSet, dimension: Dimension, default: &str) -> String {
    group_counts(records, dimension)
        .into_iter()
        .next()
        .map(|entry| entry.category)
        .unwrap_or_else(|| default.to_string())
}

/// Counts for the domain stat cards: the two named domains, everything
/// else, and the grand total.
pub fn domain_breakdown(records: &RecordSet) -> DomainBreakdown {
    let enfra = threshold_count(records, |record| {
        record.domain.as_deref() == Some(DOMAIN_ENFRA)
    });
    let sms_ld = threshold_count(records, |record| {
        record.domain.as_deref() == Some(DOMAIN_SMS_LD)
    });
    let total = records.len();
    DomainBreakdown {
        enfra,
        sms_ld,
        others: total - enfra - sms_ld,
        total,
    }
}

/// Counts grouped by (region, domain) pairs, in first-encountered pair
/// order. Absent values tally under [`UNKNOWN_CATEGORY`].
pub fn region_domain_counts(records: &RecordSet) -> Vec<RegionDomainCount> {
    let mut order: Vec<(&str, &str)> = Vec::new();
    let mut counts: HashMap<(&str, &str), usize> = HashMap::new();
    for record in records {
        let key = (
            record.region.as_deref().unwrap_or(UNKNOWN_CATEGORY),
            record.domain.as_deref().unwrap_or(UNKNOWN_CATEGORY),
        );
        if !counts.contains_key(&key) {
            order.push(key);
        }
        *counts.entry(key).or_insert(0) += 1;
    }
    order
        .into_iter()
        .map(|(region, domain)| RegionDomainCount {
            region: region.to_string(),
            domain: domain.to_string(),
            count: counts[&(region, domain)],
        })
        .collect()
}

/// Distinct values of a dimension in first-encountered order.
///
/// Records with no value for the dimension are skipped; this is what a
/// selection widget offers as its options.
pub fn distinct_values(records: &RecordSet, dimension: Dimension) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::new();
    for record in records {
        if let Some(value) = record.dimension_value(dimension)
            && !seen.contains(&value)
        {
            seen.push(value);
        }
    }
    seen.into_iter().map(String::from).collect()
}

/// Assembles the aggregate bundle the presentation layer renders.
///
/// `reason_limit` bounds the reason table (the dashboards show ten).
pub fn build_summary(records: &RecordSet, reason_limit: usize) -> OfflineSummary {
    OfflineSummary {
        total_count: count(records),
        avg_days: mean_days(records),
        most_common_reason: most_common_reason(records),
        critical_count: critical_count(records),
        brand_counts: group_counts(records, Dimension::DeviceBrand),
        region_counts: group_counts(records, Dimension::SubRegion),
        reason_counts: top_reasons(records, reason_limit),
        aging_counts: group_counts(records, Dimension::AgingCategory),
    }
}

/// Frequency-counts `values`, descending by count.
///
/// The sort is stable over first-seen insertion order, which is what makes
/// the tie-break (and the mode derived from it) deterministic.
fn tally<'a, I>(values: I) -> Vec<CategoryCount>
where
    I: Iterator<Item = &'a str>,
{
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        if !counts.contains_key(value) {
            order.push(value);
        }
        *counts.entry(value).or_insert(0) += 1;
    }
    let mut table: Vec<CategoryCount> = order
        .into_iter()
        .map(|value| CategoryCount::new(value, counts[value]))
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reasons(values: &[&str]) -> RecordSet {
        values
            .iter()
            .map(|reason| OfflineRecord {
                reason: (*reason).to_string(),
                ..OfflineRecord::default()
            })
            .collect()
    }

    #[test]
    fn tally_orders_descending_with_stable_ties() {
        let records = reasons(&["B", "A", "A", "C", "C"]);
        let counts = reason_counts(&records);
        assert_eq!(counts[0], CategoryCount::new("A", 2));
        assert_eq!(counts[1], CategoryCount::new("C", 2));
        assert_eq!(counts[2], CategoryCount::new("B", 1));
    }

    #[test]
    fn mode_tie_break_is_first_encountered() {
        let records = reasons(&["A", "B", "A", "B"]);
        assert_eq!(most_common_reason(&records), "A");
    }

    #[test]
    fn distinct_values_keep_first_seen_order_and_skip_absent() {
        let records = RecordSet::new(vec![
            OfflineRecord {
                device_brand: Some("Y".to_string()),
                ..OfflineRecord::default()
            },
            OfflineRecord {
                device_brand: Some("X".to_string()),
                ..OfflineRecord::default()
            },
            OfflineRecord::default(),
            OfflineRecord {
                device_brand: Some("Y".to_string()),
                ..OfflineRecord::default()
            },
        ]);
        assert_eq!(
            distinct_values(&records, Dimension::DeviceBrand),
            vec!["Y".to_string(), "X".to_string()]
        );
    }

    #[test]
    fn mean_rounds_to_one_decimal() {
        let records: RecordSet = [120.0, 10.0, 0.0]
            .iter()
            .map(|days| OfflineRecord {
                days_passed: *days,
                ..OfflineRecord::default()
            })
            .collect();
        assert_eq!(mean_days(&records), 43.3);
    }
}
