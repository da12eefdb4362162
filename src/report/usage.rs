use bon::Builder;
use serde::Deserialize;
use serde_with::{DefaultOnError, serde_as};

use crate::{
    quantity::percent::Percent,
    report::{deserialize_id, first_non_blank},
};

#[must_use]
#[serde_as]
#[derive(Clone, Debug, Default, Builder, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRow {
    #[serde(default, deserialize_with = "deserialize_id")]
    #[builder(default, into)]
    pub station_id: String,

    #[serde(default)]
    #[builder(into)]
    pub station_name: Option<String>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub year: Option<i32>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub month: Option<u32>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[builder(default)]
    pub completed_sessions: u64,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[builder(default)]
    pub total_bookings: u64,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[builder(default)]
    pub utilization_rate_percent: Percent,
}

impl UsageRow {
    #[must_use]
    pub fn station_label(&self) -> &str {
        first_non_blank([self.station_name.as_deref()]).unwrap_or(&self.station_id)
    }
}
