use clap::Parser;

use crate::{
    api::{ReportQuery, ReportSource},
    cli::Output,
    core::entity::{DEFAULT_LIMIT, EntityAggregator},
    prelude::*,
    tables::build_entity_table,
};

#[derive(Parser)]
pub struct StationsArgs {
    /// Number of the top stations to show.
    #[clap(long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    #[clap(flatten)]
    query: ReportQuery,
}

impl StationsArgs {
    #[instrument(skip_all)]
    pub async fn run(self, source: &dyn ReportSource, output: Output) -> Result {
        let (revenue, usage, performance) = tokio::try_join!(
            source.get_revenue(&self.query),
            source.get_usage(&self.query),
            source.get_station_performance(&self.query),
        )?;
        let ranking =
            EntityAggregator::by_station(&revenue, &usage, &performance).rank(self.limit);
        info!(n_stations = ranking.len(), "ranked");
        output.emit(&ranking, || vec![build_entity_table("Station", &ranking)])
    }
}
