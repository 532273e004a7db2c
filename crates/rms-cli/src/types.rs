use std::path::PathBuf;

use serde::Serialize;

use rms_model::{CategoryCount, DomainBreakdown, OfflineSummary, RegionDomainCount};

/// Result of the `summary` command.
#[derive(Debug, Serialize)]
pub struct SummaryResult {
    pub source: PathBuf,
    /// Rows in the canonical record set.
    pub rows_loaded: usize,
    /// Rows the loader skipped as unparsable.
    pub rows_skipped: usize,
    /// Rows remaining after the active filters.
    pub filtered_count: usize,
    pub summary: OfflineSummary,
}

/// Result of the `breakdown` command.
#[derive(Debug, Serialize)]
pub struct BreakdownResult {
    pub source: PathBuf,
    pub breakdown: DomainBreakdown,
    pub region_domain: Vec<RegionDomainCount>,
    pub enfra_aging: Vec<CategoryCount>,
    pub sms_ld_aging: Vec<CategoryCount>,
    pub top_reasons: Vec<CategoryCount>,
}

/// Distinct values of one filterable dimension.
#[derive(Debug, Serialize)]
pub struct DimensionValues {
    pub dimension: String,
    pub values: Vec<String>,
}

/// Result of the `dimensions` command.
#[derive(Debug, Serialize)]
pub struct DimensionsResult {
    pub source: PathBuf,
    pub dimensions: Vec<DimensionValues>,
}
