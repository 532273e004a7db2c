use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A categorical field usable as a filter axis.
///
/// The snake_case string form is the one the query interface speaks; it is
/// what `as_str`/`Display` produce and what `FromStr` accepts (tolerating
/// spaces, hyphens, and mixed case as found in source column headers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Region,
    SubRegion,
    DeviceBrand,
    AgingCategory,
    Domain,
}

impl Dimension {
    /// Every filterable dimension, in a fixed display order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Region,
        Dimension::SubRegion,
        Dimension::DeviceBrand,
        Dimension::AgingCategory,
        Dimension::Domain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Region => "region",
            Dimension::SubRegion => "sub_region",
            Dimension::DeviceBrand => "device_brand",
            Dimension::AgingCategory => "aging_category",
            Dimension::Domain => "domain",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "region" => Ok(Dimension::Region),
            "sub_region" => Ok(Dimension::SubRegion),
            "device_brand" | "brand" => Ok(Dimension::DeviceBrand),
            "aging_category" | "aging" => Ok(Dimension::AgingCategory),
            "domain" => Ok(Dimension::Domain),
            _ => Err(format!("unknown dimension: {s}")),
        }
    }
}
