//! RMS core pipeline: normalization, filtering, aggregation, and caching.
//!
//! The pipeline is load → normalize once (cached for the process lifetime),
//! then filter → aggregate per interaction. Everything below the whole-file
//! load boundary is total: per-row and per-field problems resolve to
//! documented defaults instead of errors.

pub mod aggregate;
pub mod cache;
pub mod filter;
pub mod normalize;

pub use aggregate::build_summary;
pub use cache::{DatasetCache, load_dataset};
pub use filter::FilterQuery;
pub use normalize::normalize;
