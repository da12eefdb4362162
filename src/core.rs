//! Report aggregation: pure transforms from the report rows into chart-ready series.

pub mod bucket;
pub mod entity;
pub mod granularity;
pub mod peak;
pub mod period;
pub mod summary;
pub mod timeline;
pub mod usage;
