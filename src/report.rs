//! Report rows as returned by the admin backend.
//!
//! The rows are tolerant: missing, `null` or malformed numbers turn into zero,
//! and identifiers may come either as strings or as numbers.

mod connector;
mod peak_hour;
mod revenue;
mod station;
mod usage;

use serde::{Deserialize, Deserializer};

pub use self::{
    connector::ConnectorRevenueRow,
    peak_hour::PeakHourRow,
    revenue::RevenueRow,
    station::StationPerformanceRow,
    usage::UsageRow,
};

/// Deserialize an identifier which the backend sends either as a number or as a string.
fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Option::<Id>::deserialize(deserializer)? {
        Some(Id::Text(text)) => text,
        Some(Id::Integer(integer)) => integer.to_string(),
        Some(Id::Float(float)) => float.to_string(),
        None => String::new(),
    })
}

/// Pick the first present and non-blank value.
fn first_non_blank<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> Option<&'a str> {
    values.into_iter().flatten().map(str::trim).find(|value| !value.is_empty())
}
