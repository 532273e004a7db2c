pub mod dimension;
pub mod record;
pub mod summary;

pub use dimension::Dimension;
pub use record::{OfflineRecord, RecordSet, UNKNOWN_CATEGORY};
pub use summary::{
    CRITICAL_AGING_CATEGORY, CategoryCount, DOMAIN_ENFRA, DOMAIN_SMS_LD, DomainBreakdown,
    NO_DATA_PLACEHOLDER, OfflineSummary, RegionDomainCount,
};
