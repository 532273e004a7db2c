//! Command implementations: load an export, filter, aggregate.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use rms_core::filter::{self, FilterQuery};
use rms_core::{aggregate, normalize};
use rms_ingest::load_raw_table;
use rms_model::{CategoryCount, DOMAIN_ENFRA, DOMAIN_SMS_LD, Dimension, RecordSet};

use crate::types::{BreakdownResult, DimensionValues, DimensionsResult, SummaryResult};

/// Filter selections for the `summary` command, one list per dimension.
///
/// An empty list leaves the dimension unconstrained.
#[derive(Debug, Clone, Default)]
pub struct SummaryRequest {
    pub regions: Vec<String>,
    pub brands: Vec<String>,
    pub aging: Vec<String>,
    /// Bound for the reason table.
    pub reason_limit: usize,
}

/// Loads an export and computes the dashboard aggregates.
pub fn run_summary(csv: &Path, request: &SummaryRequest) -> Result<SummaryResult> {
    let span = info_span!("summary", export = %csv.display());
    let _guard = span.enter();
    let started = Instant::now();

    let table = load_raw_table(csv).context("load export")?;
    let records = normalize(&table);
    let query = FilterQuery::new()
        .with(Dimension::SubRegion, request.regions.iter().cloned())
        .with(Dimension::DeviceBrand, request.brands.iter().cloned())
        .with(Dimension::AgingCategory, request.aging.iter().cloned());
    let filtered = filter::apply(&records, &query);
    let summary = aggregate::build_summary(&filtered, request.reason_limit);

    info!(
        rows = records.len(),
        filtered = filtered.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "summary computed"
    );
    Ok(SummaryResult {
        source: csv.to_path_buf(),
        rows_loaded: records.len(),
        rows_skipped: table.skipped_rows,
        filtered_count: filtered.len(),
        summary,
    })
}

/// Loads an export and computes the domain cross-tabulation.
pub fn run_breakdown(csv: &Path) -> Result<BreakdownResult> {
    let span = info_span!("breakdown", export = %csv.display());
    let _guard = span.enter();

    let table = load_raw_table(csv).context("load export")?;
    let records = normalize(&table);

    Ok(BreakdownResult {
        source: csv.to_path_buf(),
        breakdown: aggregate::domain_breakdown(&records),
        region_domain: aggregate::region_domain_counts(&records),
        enfra_aging: domain_aging(&records, DOMAIN_ENFRA),
        sms_ld_aging: domain_aging(&records, DOMAIN_SMS_LD),
        top_reasons: aggregate::top_reasons(&records, 10),
    })
}

fn domain_aging(records: &RecordSet, domain: &str) -> Vec<CategoryCount> {
    let query = FilterQuery::new().with(Dimension::Domain, [domain]);
    aggregate::group_counts(&filter::apply(records, &query), Dimension::AgingCategory)
}

/// Loads an export and lists the distinct values per filter dimension,
/// in first-encountered order.
pub fn run_dimensions(csv: &Path) -> Result<DimensionsResult> {
    let table = load_raw_table(csv).context("load export")?;
    let records = normalize(&table);

    let dimensions = Dimension::ALL
        .iter()
        .map(|dimension| DimensionValues {
            dimension: dimension.to_string(),
            values: aggregate::distinct_values(&records, *dimension),
        })
        .collect();
    Ok(DimensionsResult {
        source: csv.to_path_buf(),
        dimensions,
    })
}
