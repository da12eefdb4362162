mod connectors;
mod peak_hours;
mod revenue;
mod source;
mod stations;
mod usage;

use clap::{Parser, Subcommand};
use comfy_table::Table;
use serde::Serialize;

use crate::{
    cli::{
        connectors::ConnectorsArgs,
        peak_hours::PeakHoursArgs,
        revenue::RevenueArgs,
        source::SourceArgs,
        stations::StationsArgs,
        usage::UsageArgs,
    },
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    source: SourceArgs,

    /// Print the series as JSON instead of the tables.
    #[clap(long, global = true, env = "CHARGEBOARD_JSON")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub async fn run(self) -> Result {
        let source = self.source.connect()?;
        let output = Output { json: self.json };
        match self.command {
            Command::Revenue(args) => args.run(&*source, output).await,
            Command::Usage(args) => args.run(&*source, output).await,
            Command::Stations(args) => args.run(&*source, output).await,
            Command::Connectors(args) => args.run(&*source, output).await,
            Command::PeakHours(args) => args.run(&*source, output).await,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Revenue, sessions and energy over time.
    Revenue(RevenueArgs),

    /// Bookings, completion and utilization over time.
    Usage(UsageArgs),

    /// Stations ranked by the delivered energy.
    Stations(StationsArgs),

    /// Connector types ranked by the delivered energy.
    Connectors(ConnectorsArgs),

    /// Sessions per hour of the day.
    #[clap(name = "peak-hours")]
    PeakHours(PeakHoursArgs),
}

/// Where and how to print the results.
#[derive(Copy, Clone)]
pub struct Output {
    json: bool,
}

impl Output {
    /// Print either the JSON document or the tables built lazily.
    pub fn emit<T: Serialize>(
        self,
        document: &T,
        build_tables: impl FnOnce() -> Vec<Table>,
    ) -> Result {
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(document).context("failed to serialize the output")?
            );
        } else {
            for table in build_tables() {
                println!("{table}");
            }
        }
        Ok(())
    }
}
