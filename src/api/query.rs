use bon::Builder;
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;

/// Report filters, passed to the backend as the query string.
#[must_use]
#[derive(Clone, Debug, Default, Builder, Parser, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    /// First day of the report period, inclusive.
    #[clap(long = "from", env = "CHARGEBOARD_FROM")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,

    /// Last day of the report period, inclusive.
    #[clap(long = "to", env = "CHARGEBOARD_TO")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,

    #[clap(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[clap(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,

    /// Limit the report to a single station.
    #[clap(long = "station")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub station_id: Option<String>,
}

impl ReportQuery {
    pub fn to_query_string(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_empty_query_string() -> Result {
        assert_eq!(ReportQuery::default().to_query_string()?, "");
        Ok(())
    }

    #[test]
    fn test_query_string() -> Result {
        let query = ReportQuery::builder()
            .from_date(NaiveDate::from_ymd_opt(2024, 1, 1).context("invalid date")?)
            .to_date(NaiveDate::from_ymd_opt(2024, 1, 31).context("invalid date")?)
            .station_id("st-7")
            .build();
        assert_eq!(
            query.to_query_string()?,
            "fromDate=2024-01-01&toDate=2024-01-31&stationId=st-7"
        );
        Ok(())
    }
}
