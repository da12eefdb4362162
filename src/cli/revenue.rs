use clap::Parser;
use serde::Serialize;

use crate::{
    api::{ReportQuery, ReportSource},
    cli::Output,
    core::{
        bucket::Bucket,
        granularity::Granularity,
        summary::Summary,
        timeline::Timeline,
    },
    prelude::*,
    tables::{build_summary_table, build_timeline_table},
};

#[derive(Parser)]
pub struct RevenueArgs {
    /// Re-group the reported periods.
    #[clap(long, value_enum, default_value = "auto", env = "CHARGEBOARD_BUCKET")]
    bucket: Bucket,

    #[clap(flatten)]
    query: ReportQuery,
}

#[derive(Serialize)]
struct Document<'a> {
    granularity: Granularity,
    timeline: &'a Timeline,
    summary: &'a Summary,
}

impl RevenueArgs {
    #[instrument(skip_all)]
    pub async fn run(self, source: &dyn ReportSource, output: Output) -> Result {
        let rows = source.get_revenue(&self.query).await?;
        let timeline = rows.iter().collect::<Timeline>().rebucket(self.bucket);
        let granularity = timeline.granularity();
        info!(n_points = timeline.len(), %granularity, "aggregated");

        let summary = Summary::from(&timeline);
        let document = Document { granularity, timeline: &timeline, summary: &summary };
        output.emit(&document, || {
            // Explicit buckets carry their own labels.
            let axis_granularity = (self.bucket == Bucket::Auto).then_some(granularity);
            vec![build_timeline_table(&timeline, axis_granularity), build_summary_table(&summary)]
        })
    }
}
