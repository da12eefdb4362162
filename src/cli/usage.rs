use clap::Parser;
use serde::Serialize;

use crate::{
    api::{ReportQuery, ReportSource},
    cli::Output,
    core::{granularity::Granularity, usage::UsageTimeline},
    prelude::*,
    tables::build_usage_table,
};

#[derive(Parser)]
pub struct UsageArgs {
    #[clap(flatten)]
    query: ReportQuery,
}

#[derive(Serialize)]
struct Document<'a> {
    granularity: Granularity,
    timeline: &'a UsageTimeline,
}

impl UsageArgs {
    #[instrument(skip_all)]
    pub async fn run(self, source: &dyn ReportSource, output: Output) -> Result {
        let rows = source.get_usage(&self.query).await?;
        let timeline = rows.iter().collect::<UsageTimeline>();
        let granularity = Granularity::detect(timeline.as_slice());
        info!(n_points = timeline.len(), %granularity, "aggregated");
        output.emit(&Document { granularity, timeline: &timeline }, || {
            vec![build_usage_table(&timeline, granularity)]
        })
    }
}
