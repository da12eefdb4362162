use serde::Serialize;

use crate::{
    core::timeline::Timeline,
    quantity::{currency::Dong, energy::KilowattHours},
};

/// Key figures of a revenue timeline.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub revenue: Dong,
    pub sessions: u64,
    pub energy: KilowattHours,

    /// `None` when there were no sessions.
    pub revenue_per_session: Option<Dong>,

    /// Label of the period with the highest revenue.
    pub best_period: Option<String>,
}

impl From<&Timeline> for Summary {
    fn from(timeline: &Timeline) -> Self {
        let revenue = timeline.iter().map(|point| point.revenue).sum::<Dong>();
        let sessions = timeline.iter().map(|point| point.sessions).sum::<u64>();
        let energy = timeline.iter().map(|point| point.energy).sum::<KilowattHours>();
        let best_period = timeline
            .iter()
            .filter(|point| point.revenue > Dong::ZERO)
            .max_by_key(|point| point.revenue)
            .map(|point| point.date_label.clone());
        Self { revenue, sessions, energy, revenue_per_session: revenue.per(sessions), best_period }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RevenueRow;

    #[test]
    fn test_empty() {
        let summary = Summary::from(&Timeline::default());
        assert_eq!(summary.revenue, Dong::ZERO);
        assert_eq!(summary.sessions, 0);
        assert_eq!(summary.revenue_per_session, None);
        assert_eq!(summary.best_period, None);
    }

    #[test]
    fn test_totals() {
        let rows = [
            RevenueRow::builder()
                .year(2024)
                .month(1)
                .total_revenue(Dong(1_000_000.0))
                .total_transactions(4)
                .total_energy_sold_kwh(KilowattHours(100.0))
                .build(),
            RevenueRow::builder()
                .year(2024)
                .month(2)
                .total_revenue(Dong(2_000_000.0))
                .total_transactions(1)
                .total_energy_sold_kwh(KilowattHours(50.0))
                .build(),
        ];
        let summary = Summary::from(&rows.iter().collect::<Timeline>());
        assert_eq!(summary.revenue, Dong(3_000_000.0));
        assert_eq!(summary.sessions, 5);
        assert_eq!(summary.energy, KilowattHours(150.0));
        assert_eq!(summary.revenue_per_session, Some(Dong(600_000.0)));
        assert_eq!(summary.best_period.as_deref(), Some("2024-02"));
    }
}
