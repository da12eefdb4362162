use clap::Parser;

use crate::{
    api::{ReportQuery, ReportSource},
    cli::Output,
    core::entity::{DEFAULT_LIMIT, EntityAggregator},
    prelude::*,
    tables::build_entity_table,
};

#[derive(Parser)]
pub struct ConnectorsArgs {
    /// Number of the top connector types to show.
    #[clap(long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    #[clap(flatten)]
    query: ReportQuery,
}

impl ConnectorsArgs {
    #[instrument(skip_all)]
    pub async fn run(self, source: &dyn ReportSource, output: Output) -> Result {
        let rows = source.get_connector_revenue(&self.query).await?;
        let ranking = EntityAggregator::by_connector(&rows).rank(self.limit);
        info!(n_connector_types = ranking.len(), "ranked");
        output.emit(&ranking, || vec![build_entity_table("Connector", &ranking)])
    }
}
