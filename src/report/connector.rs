use bon::Builder;
use serde::Deserialize;
use serde_with::{DefaultOnError, DefaultOnNull, serde_as};

use crate::quantity::{currency::Dong, energy::KilowattHours};

/// Revenue bucketed by the charging connector category, for example `CCS2` or `Type 2`.
#[must_use]
#[serde_as]
#[derive(Clone, Debug, Default, Builder, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorRevenueRow {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default, into)]
    pub connector_type: String,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[builder(default)]
    pub total_revenue: Dong,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[builder(default)]
    pub total_energy_sold_kwh: KilowattHours,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[builder(default)]
    pub total_transactions: u64,
}
