mod client;
mod fixtures;
mod query;
mod response;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use self::{client::Client, fixtures::Directory, query::ReportQuery};
use self::response::Response;
use crate::{
    prelude::*,
    report::{ConnectorRevenueRow, PeakHourRow, RevenueRow, StationPerformanceRow, UsageRow},
};

/// Report exposed by the admin backend.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Report {
    #[display("revenue")]
    Revenue,

    #[display("usage")]
    Usage,

    #[display("station-performance")]
    StationPerformance,

    #[display("peak-hours")]
    PeakHours,

    #[display("connector-revenue")]
    ConnectorRevenue,
}

impl Report {
    /// URL path segments relative to the API base URL.
    pub fn path_segments(self) -> [String; 2] {
        ["reports".to_string(), self.to_string()]
    }

    /// File name of the saved report.
    pub fn file_name(self) -> String {
        format!("{self}.json")
    }
}

/// Anything that serves the raw report JSON.
#[async_trait]
pub trait ReportSource: Sync {
    /// Fetch the raw report JSON.
    async fn fetch(&self, report: Report, query: &ReportQuery) -> Result<Value>;

    async fn get_revenue(&self, query: &ReportQuery) -> Result<Vec<RevenueRow>> {
        parse_rows(Report::Revenue, self.fetch(Report::Revenue, query).await?)
    }

    async fn get_usage(&self, query: &ReportQuery) -> Result<Vec<UsageRow>> {
        parse_rows(Report::Usage, self.fetch(Report::Usage, query).await?)
    }

    async fn get_station_performance(
        &self,
        query: &ReportQuery,
    ) -> Result<Vec<StationPerformanceRow>> {
        parse_rows(Report::StationPerformance, self.fetch(Report::StationPerformance, query).await?)
    }

    async fn get_peak_hours(&self, query: &ReportQuery) -> Result<Vec<PeakHourRow>> {
        parse_rows(Report::PeakHours, self.fetch(Report::PeakHours, query).await?)
    }

    async fn get_connector_revenue(&self, query: &ReportQuery) -> Result<Vec<ConnectorRevenueRow>> {
        parse_rows(Report::ConnectorRevenue, self.fetch(Report::ConnectorRevenue, query).await?)
    }
}

fn parse_rows<R: DeserializeOwned>(report: Report, value: Value) -> Result<Vec<R>> {
    let rows: Result<Vec<R>> = serde_json::from_value::<Response<R>>(value)
        .with_context(|| format!("failed to deserialize the `{report}` report"))?
        .into();
    let rows = rows.with_context(|| format!("the backend rejected the `{report}` report"))?;
    info!(%report, n_rows = rows.len(), "fetched");
    Ok(rows)
}
