use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    core::{
        granularity::{Granularity, SeriesPoint},
        period::Period,
    },
    quantity::{currency::Dong, energy::KilowattHours},
    report::RevenueRow,
};

/// Chart-ready point of the revenue time series.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    #[serde(skip)]
    pub sort_key: String,

    pub date_label: String,

    #[serde(rename = "dateISO")]
    pub date_iso: Option<String>,

    pub revenue: Dong,

    pub sessions: u64,

    pub energy: KilowattHours,
}

impl TimelinePoint {
    fn absorb(&mut self, other: &Self) {
        self.revenue += other.revenue;
        self.sessions += other.sessions;
        self.energy += other.energy;
    }
}

impl From<&RevenueRow> for TimelinePoint {
    fn from(row: &RevenueRow) -> Self {
        let period = Period::of(row);
        Self {
            sort_key: period.sort_key,
            date_label: period.label,
            date_iso: period.date_iso,
            revenue: row.total_revenue,
            sessions: row.total_transactions,
            energy: row.total_energy_sold_kwh,
        }
    }
}

impl SeriesPoint for TimelinePoint {
    fn date_iso(&self) -> Option<&str> {
        self.date_iso.as_deref()
    }

    fn date_label(&self) -> &str {
        &self.date_label
    }
}

/// Revenue time series: one point per distinct period, ascending by the sort key.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize, derive_more::Deref, derive_more::IntoIterator)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct Timeline(Vec<TimelinePoint>);

impl Timeline {
    /// Merge the points sharing a sort key.
    ///
    /// The first point of a key decides its label and date.
    pub fn merge(points: impl IntoIterator<Item = TimelinePoint>) -> Self {
        let mut merged = BTreeMap::<String, TimelinePoint>::new();
        for point in points {
            if let Some(existing) = merged.get_mut(&point.sort_key) {
                existing.absorb(&point);
            } else {
                merged.insert(point.sort_key.clone(), point);
            }
        }
        Self(merged.into_values().collect())
    }

    pub fn granularity(&self) -> Granularity {
        Granularity::detect(self.0.as_slice())
    }
}

impl<'a> FromIterator<&'a RevenueRow> for Timeline {
    fn from_iter<T: IntoIterator<Item = &'a RevenueRow>>(rows: T) -> Self {
        Self::merge(rows.into_iter().map(TimelinePoint::from))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn monthly(year: i32, month: u32, revenue: f64, transactions: u64) -> RevenueRow {
        RevenueRow::builder()
            .year(year)
            .month(month)
            .total_revenue(Dong(revenue))
            .total_transactions(transactions)
            .build()
    }

    #[test]
    fn test_empty() {
        let timeline = Timeline::from_iter(&[] as &[RevenueRow]);
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_same_month_is_summed() {
        let rows = [monthly(2024, 1, 1_000_000.0, 5), monthly(2024, 1, 500_000.0, 2)];
        let timeline = rows.iter().collect::<Timeline>();
        assert_eq!(timeline.len(), 1);
        let point = &timeline[0];
        assert_eq!(point.date_label, "2024-01");
        assert_eq!(point.date_iso.as_deref(), Some("2024-01-01"));
        assert_eq!(point.revenue, Dong(1_500_000.0));
        assert_eq!(point.sessions, 7);
        assert_eq!(point.energy, KilowattHours::ZERO);
    }

    #[test]
    fn test_sorted_by_key() {
        let rows = [
            monthly(2024, 11, 1.0, 1),
            monthly(2023, 12, 2.0, 1),
            monthly(2024, 2, 3.0, 1),
            monthly(2024, 11, 4.0, 1),
        ];
        let timeline = rows.iter().collect::<Timeline>();
        let labels = timeline.iter().map(|point| point.date_label.as_str()).collect_vec();
        assert_eq!(labels, ["2023-12", "2024-02", "2024-11"]);
        assert_eq!(timeline[2].revenue, Dong(5.0));
    }

    #[test]
    fn test_permutation_keeps_totals() {
        let rows = [
            monthly(2024, 1, 1_250_000.0, 3),
            monthly(2024, 2, 700_000.0, 1),
            monthly(2024, 1, 90_000.0, 2),
            monthly(2024, 3, 15_000.0, 8),
            monthly(2024, 2, 330_000.0, 4),
        ];
        let expected = rows.iter().collect::<Timeline>();
        for permutation in rows.iter().permutations(rows.len()) {
            assert_eq!(permutation.into_iter().collect::<Timeline>(), expected);
        }
    }

    #[test]
    fn test_revenue_sum_is_exact() {
        let rows = (1..=500_u32)
            .map(|index| monthly(2024, 1 + index % 12, f64::from(index) * 1_000.0, 1))
            .collect_vec();
        let timeline = rows.iter().collect::<Timeline>();
        for point in &timeline {
            let expected: f64 = rows
                .iter()
                .filter(|row| Period::of(*row).sort_key == point.sort_key)
                .map(|row| row.total_revenue.0)
                .sum();
            assert_eq!(point.revenue.0, expected);
        }
        assert_eq!(timeline.iter().map(|point| point.sessions).sum::<u64>(), 500);
    }

    #[test]
    fn test_serialize() -> crate::prelude::Result {
        let rows = [monthly(2024, 1, 1_000_000.0, 5)];
        let json = serde_json::to_value(rows.iter().collect::<Timeline>())?;
        assert_eq!(
            json,
            serde_json::json!([{
                "dateLabel": "2024-01",
                "dateISO": "2024-01-01",
                "revenue": 1_000_000.0,
                "sessions": 5,
                "energy": 0.0,
            }])
        );
        Ok(())
    }
}
