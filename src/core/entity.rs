//! Per-entity aggregation: stations or connector types ranked by the delivered energy.

use std::{cmp::Reverse, collections::HashMap};

use average::{Estimate, Mean};
use itertools::Itertools;
use serde::Serialize;

use crate::{
    core::period::UNKNOWN_LABEL,
    prelude::*,
    quantity::{energy::KilowattHours, percent::Percent},
    report::{ConnectorRevenueRow, RevenueRow, StationPerformanceRow, UsageRow},
};

/// Number of the entities shown on the ranking charts.
pub const DEFAULT_LIMIT: usize = 12;

/// Where a utilization sample came from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UtilizationSource {
    /// Usage report, preferred whenever it has a sample for the entity.
    UsageReport,

    StationPerformance,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntityPoint {
    pub label: String,
    pub energy: KilowattHours,
    pub utilization: Percent,
}

struct Accumulator {
    label: String,
    energy: KilowattHours,
    usage_samples: Mean,
    performance_samples: Mean,
}

impl Accumulator {
    fn utilization(&self) -> Percent {
        [&self.usage_samples, &self.performance_samples]
            .into_iter()
            .find(|samples| !samples.is_empty())
            .map_or(Percent::ZERO, |samples| Percent(samples.mean()))
    }
}

#[must_use]
#[derive(Default)]
pub struct EntityAggregator {
    accumulators: HashMap<String, Accumulator>,
}

impl EntityAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate stations from all the three reports.
    pub fn by_station(
        revenue: &[RevenueRow],
        usage: &[UsageRow],
        performance: &[StationPerformanceRow],
    ) -> Self {
        let mut this = Self::new();
        for row in revenue {
            this.add_energy(&row.station_id, row.station_label(), row.total_energy_sold_kwh);
        }
        for row in performance {
            this.add_energy(&row.station_id, row.station_label(), row.total_energy_delivered);
            this.add_utilization(
                &row.station_id,
                row.station_label(),
                row.utilization_rate,
                UtilizationSource::StationPerformance,
            );
        }
        for row in usage {
            this.add_utilization(
                &row.station_id,
                row.station_label(),
                row.utilization_rate_percent,
                UtilizationSource::UsageReport,
            );
        }
        debug!(n_entities = this.accumulators.len(), "aggregated stations");
        this
    }

    /// Aggregate connector types from the connector revenue report.
    pub fn by_connector(rows: &[ConnectorRevenueRow]) -> Self {
        let mut this = Self::new();
        for row in rows {
            let connector_type = row.connector_type.trim();
            let label = if connector_type.is_empty() { UNKNOWN_LABEL } else { connector_type };
            this.add_energy(label, label, row.total_energy_sold_kwh);
        }
        debug!(n_entities = this.accumulators.len(), "aggregated connector types");
        this
    }

    pub fn add_energy(&mut self, key: &str, label: &str, energy: KilowattHours) {
        self.entry(key, label).energy += energy;
    }

    pub fn add_utilization(
        &mut self,
        key: &str,
        label: &str,
        utilization: Percent,
        source: UtilizationSource,
    ) {
        let accumulator = self.entry(key, label);
        let samples = match source {
            UtilizationSource::UsageReport => &mut accumulator.usage_samples,
            UtilizationSource::StationPerformance => &mut accumulator.performance_samples,
        };
        samples.add(utilization.clamp_nominal().0);
    }

    /// Rank the entities by energy, keeping only the ones with positive energy or utilization.
    #[must_use]
    pub fn rank(self, limit: usize) -> Vec<EntityPoint> {
        self.accumulators
            .into_values()
            .map(|accumulator| EntityPoint {
                utilization: accumulator.utilization(),
                label: accumulator.label,
                energy: accumulator.energy,
            })
            .filter(|point| point.energy > KilowattHours::ZERO || point.utilization > Percent::ZERO)
            .sorted_unstable_by(|lhs, rhs| {
                (Reverse(lhs.energy), &lhs.label).cmp(&(Reverse(rhs.energy), &rhs.label))
            })
            .take(limit)
            .collect()
    }

    /// Look up the accumulator, keying on the label when the identifier is blank.
    ///
    /// A human-readable label replaces the bare identifier once it shows up.
    fn entry(&mut self, key: &str, label: &str) -> &mut Accumulator {
        let key = if key.trim().is_empty() { label } else { key };
        let accumulator =
            self.accumulators.entry(key.to_string()).or_insert_with(|| Accumulator {
                label: label.to_string(),
                energy: KilowattHours::ZERO,
                usage_samples: Mean::new(),
                performance_samples: Mean::new(),
            });
        if accumulator.label == key && label != key {
            accumulator.label = label.to_string();
        }
        accumulator
    }
}
