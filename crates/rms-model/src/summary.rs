use serde::{Deserialize, Serialize};

/// Aging bucket counted as critical by the dashboard KPI.
pub const CRITICAL_AGING_CATEGORY: &str = "100+ Days";

/// Domain values broken out individually by the cross-tabulation view.
pub const DOMAIN_ENFRA: &str = "Enfra";
pub const DOMAIN_SMS_LD: &str = "SMS LD";

/// Placeholder reported for scalar KPIs over an empty record set.
pub const NO_DATA_PLACEHOLDER: &str = "N/A";

/// One entry of a frequency table: a category and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn new(category: impl Into<String>, count: usize) -> Self {
        Self {
            category: category.into(),
            count,
        }
    }
}

/// The aggregate bundle the presentation layer renders: scalar KPIs plus the
/// grouped tallies backing the brand, region, reason, and aging widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfflineSummary {
    pub total_count: usize,
    /// Mean of `days_passed`, rounded to one decimal; 0.0 over an empty set.
    pub avg_days: f64,
    /// Mode of `reason`; [`NO_DATA_PLACEHOLDER`] over an empty set.
    pub most_common_reason: String,
    /// Records in the [`CRITICAL_AGING_CATEGORY`] bucket.
    pub critical_count: usize,
    pub brand_counts: Vec<CategoryCount>,
    pub region_counts: Vec<CategoryCount>,
    pub reason_counts: Vec<CategoryCount>,
    pub aging_counts: Vec<CategoryCount>,
}

/// Stat cards of the domain cross-tabulation view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainBreakdown {
    pub enfra: usize,
    pub sms_ld: usize,
    pub others: usize,
    pub total: usize,
}

impl DomainBreakdown {
    /// Combined offline count across the two named domains.
    pub fn named_total(&self) -> usize {
        self.enfra + self.sms_ld
    }
}

/// One cell of the region x domain tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDomainCount {
    pub region: String,
    pub domain: String,
    pub count: usize,
}
