use bon::Builder;
use serde::Deserialize;
use serde_with::{DefaultOnError, VecSkipError, serde_as};

use crate::{
    quantity::{currency::Dong, energy::KilowattHours},
    report::{deserialize_id, first_non_blank},
};

#[must_use]
#[serde_as]
#[derive(Clone, Debug, Default, Builder, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueRow {
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

    /// Explicit ISO date for the daily reports.
    #[serde(default)]
    #[builder(into)]
    pub date: Option<String>,

    #[serde(default)]
    #[builder(into)]
    pub date_iso: Option<String>,

    #[serde(default)]
    #[builder(into)]
    pub date_label_iso: Option<String>,

    /// Pre-computed display label, used when no date is available.
    #[serde(default)]
    #[builder(into)]
    pub date_label: Option<String>,

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

    #[serde_as(as = "DefaultOnError<VecSkipError<_>>")]
    #[serde(default)]
    #[builder(default)]
    pub connector_types: Vec<String>,
}

impl RevenueRow {
    /// Explicit date in the order of precedence: `date`, `dateIso`, `dateLabelIso`.
    #[must_use]
    pub fn explicit_date(&self) -> Option<&str> {
        first_non_blank([
            self.date.as_deref(),
            self.date_iso.as_deref(),
            self.date_label_iso.as_deref(),
        ])
    }

    #[must_use]
    pub fn station_label(&self) -> &str {
        first_non_blank([self.station_name.as_deref()]).unwrap_or(&self.station_id)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_deserialize_monthly_row_ok() -> Result {
        // language=JSON
        const ROW: &str = r#"
            {
                "stationId": 17,
                "stationName": "Vincom Đồng Khởi",
                "year": 2024,
                "month": 3,
                "totalRevenue": 1250000,
                "totalEnergySoldKwh": 312.5,
                "totalTransactions": 9,
                "connectorTypes": ["CCS2", "Type 2", 42]
            }
        "#;
        let row = serde_json::from_str::<RevenueRow>(ROW)?;
        assert_eq!(row.station_id, "17");
        assert_eq!(row.station_label(), "Vincom Đồng Khởi");
        assert_eq!(row.year, Some(2024));
        assert_eq!(row.month, Some(3));
        assert_eq!(row.total_revenue, Dong(1_250_000.0));
        assert_abs_diff_eq!(row.total_energy_sold_kwh.0, 312.5);
        assert_eq!(row.total_transactions, 9);
        assert_eq!(row.connector_types, ["CCS2", "Type 2"]);
        assert_eq!(row.explicit_date(), None);
        Ok(())
    }

    #[test]
    fn test_deserialize_sparse_row_ok() -> Result {
        // language=JSON
        const ROW: &str = r#"
            {
                "stationId": "st-1",
                "dateIso": "2024-03-05",
                "totalRevenue": null,
                "totalTransactions": "n/a"
            }
        "#;
        let row = serde_json::from_str::<RevenueRow>(ROW)?;
        assert_eq!(row.total_revenue, Dong::ZERO);
        assert_eq!(row.total_energy_sold_kwh, KilowattHours::ZERO);
        assert_eq!(row.total_transactions, 0);
        assert_eq!(row.explicit_date(), Some("2024-03-05"));
        assert_eq!(row.station_label(), "st-1");
        Ok(())
    }

    #[test]
    fn test_explicit_date_precedence() {
        let row = RevenueRow::builder()
            .date(" ")
            .date_iso("2024-03-05")
            .date_label_iso("2024-03-06")
            .build();
        assert_eq!(row.explicit_date(), Some("2024-03-05"));
    }
}
