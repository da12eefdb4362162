use bon::Builder;
use serde::Deserialize;
use serde_with::{DefaultOnError, DefaultOnNull, serde_as};

use crate::{
    quantity::{currency::Dong, energy::KilowattHours, percent::Percent},
    report::deserialize_id,
};

#[must_use]
#[serde_as]
#[derive(Clone, Debug, Default, Builder, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationPerformanceRow {
    #[serde(default, deserialize_with = "deserialize_id")]
    #[builder(default, into)]
    pub station_id: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default, into)]
    pub station_name: String,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[builder(default)]
    pub total_revenue: Dong,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[builder(default)]
    pub total_energy_delivered: KilowattHours,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[builder(default)]
    pub completed_sessions: u64,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[builder(default)]
    pub utilization_rate: Percent,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default, into)]
    pub status: String,
}

impl StationPerformanceRow {
    #[must_use]
    pub fn station_label(&self) -> &str {
        let name = self.station_name.trim();
        if name.is_empty() { &self.station_id } else { name }
    }
}
