use clap::Parser;
use serde::Serialize;

use crate::{
    api::{ReportQuery, ReportSource},
    cli::Output,
    core::peak::{HourPoint, HourlyProfile},
    prelude::*,
    tables::build_hourly_profile_table,
};

#[derive(Parser)]
pub struct PeakHoursArgs {
    #[clap(flatten)]
    query: ReportQuery,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    profile: HourlyProfile,
    peak: Option<HourPoint>,
    total_sessions: u64,
}

impl PeakHoursArgs {
    #[instrument(skip_all)]
    pub async fn run(self, source: &dyn ReportSource, output: Output) -> Result {
        let profile =
            source.get_peak_hours(&self.query).await?.into_iter().collect::<HourlyProfile>();
        let peak = profile.peak();
        info!(?peak, total_sessions = profile.total(), "folded");
        let document = Document { profile, peak, total_sessions: profile.total() };
        output.emit(&document, || vec![build_hourly_profile_table(&profile)])
    }
}
