use std::collections::BTreeMap;

use average::{Estimate, Mean};
use serde::Serialize;

use crate::{
    core::{granularity::SeriesPoint, period::Period},
    quantity::percent::Percent,
    report::UsageRow,
};

/// Chart-ready point of the usage time series.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsagePoint {
    #[serde(skip)]
    pub sort_key: String,

    pub date_label: String,

    #[serde(rename = "dateISO")]
    pub date_iso: Option<String>,

    pub bookings: u64,

    pub completed_sessions: u64,

    /// Mean of the reported utilization rates within the period.
    pub utilization: Percent,

    /// Completed sessions over bookings.
    pub completion_rate: Percent,
}

impl SeriesPoint for UsagePoint {
    fn date_iso(&self) -> Option<&str> {
        self.date_iso.as_deref()
    }

    fn date_label(&self) -> &str {
        &self.date_label
    }
}

struct Accumulator {
    period: Period,
    bookings: u64,
    completed_sessions: u64,
    utilization: Mean,
}

impl From<Accumulator> for UsagePoint {
    fn from(accumulator: Accumulator) -> Self {
        let utilization = if accumulator.utilization.is_empty() {
            Percent::ZERO
        } else {
            Percent(accumulator.utilization.mean())
        };
        Self {
            sort_key: accumulator.period.sort_key,
            date_label: accumulator.period.label,
            date_iso: accumulator.period.date_iso,
            bookings: accumulator.bookings,
            completed_sessions: accumulator.completed_sessions,
            utilization,
            completion_rate: Percent::of_counts(
                accumulator.completed_sessions,
                accumulator.bookings,
            ),
        }
    }
}

/// Usage time series: one point per distinct period, ascending by the sort key.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize, derive_more::Deref, derive_more::IntoIterator)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct UsageTimeline(Vec<UsagePoint>);

impl<'a> FromIterator<&'a UsageRow> for UsageTimeline {
    fn from_iter<T: IntoIterator<Item = &'a UsageRow>>(rows: T) -> Self {
        let mut accumulators = BTreeMap::<String, Accumulator>::new();
        for row in rows {
            let period = Period::of(row);
            let accumulator =
                accumulators.entry(period.sort_key.clone()).or_insert_with(|| Accumulator {
                    period,
                    bookings: 0,
                    completed_sessions: 0,
                    utilization: Mean::new(),
                });
            accumulator.bookings += row.total_bookings;
            accumulator.completed_sessions += row.completed_sessions;
            accumulator.utilization.add(row.utilization_rate_percent.clamp_nominal().0);
        }
        Self(accumulators.into_values().map(UsagePoint::from).collect())
    }
}
