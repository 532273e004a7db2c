use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

/// Category assigned when a source cell is empty or missing.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One device-offline observation from the monitoring export.
///
/// Optional fields keep `None` as the explicit "absent" marker; `reason` and
/// `aging_category` are always populated (the normalizer fills
/// [`UNKNOWN_CATEGORY`]), and `days_passed` is always a number (0.0 when the
/// source cell was empty or unparsable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfflineRecord {
    pub site_id: Option<String>,
    pub region: Option<String>,
    pub sub_region: Option<String>,
    pub device_brand: Option<String>,
    pub reason: String,
    pub offline_date: Option<NaiveDate>,
    pub days_passed: f64,
    pub aging_category: String,
    pub domain: Option<String>,
}

impl Default for OfflineRecord {
    fn default() -> Self {
        Self {
            site_id: None,
            region: None,
            sub_region: None,
            device_brand: None,
            reason: UNKNOWN_CATEGORY.to_string(),
            offline_date: None,
            days_passed: 0.0,
            aging_category: UNKNOWN_CATEGORY.to_string(),
            domain: None,
        }
    }
}

impl OfflineRecord {
    /// Returns the record's value for a filterable dimension.
    ///
    /// `aging_category` is always present; the other dimensions report `None`
    /// when the source cell was absent.
    pub fn dimension_value(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Region => self.region.as_deref(),
            Dimension::SubRegion => self.sub_region.as_deref(),
            Dimension::DeviceBrand => self.device_brand.as_deref(),
            Dimension::AgingCategory => Some(&self.aging_category),
            Dimension::Domain => self.domain.as_deref(),
        }
    }
}

/// An ordered sequence of offline records.
///
/// Insertion order is the source file's row order and is preserved by every
/// consumer; filtering produces a new set and never re-sorts or mutates the
/// source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    records: Vec<OfflineRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<OfflineRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[OfflineRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OfflineRecord> {
        self.records.iter()
    }
}

impl From<Vec<OfflineRecord>> for RecordSet {
    fn from(records: Vec<OfflineRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<OfflineRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = OfflineRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a OfflineRecord;
    type IntoIter = std::slice::Iter<'a, OfflineRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
