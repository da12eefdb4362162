use std::{
    fmt::{Display, Formatter},
    sync::LazyLock,
};

use chrono::NaiveDate;
use itertools::Itertools;
use regex::Regex;
use serde::Serialize;

use crate::core::period::parse_iso_date;

/// Mean gap between the consecutive points above which a series is considered monthly.
pub const MONTHLY_MEAN_GAP_DAYS: f64 = 25.0;

static MONTHLY_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}").unwrap());

/// Point of a time series.
pub trait SeriesPoint {
    fn date_iso(&self) -> Option<&str>;

    fn date_label(&self) -> &str;
}

/// Bucketing of a time series.
///
/// The detection is a best-effort heuristic, only used to format the axis labels.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Monthly,
}

impl Display for Granularity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

impl Granularity {
    pub fn detect<P: SeriesPoint>(points: &[P]) -> Self {
        let dates = points
            .iter()
            .filter_map(SeriesPoint::date_iso)
            .filter_map(parse_iso_date)
            .sorted_unstable()
            .collect_vec();

        if dates.len() < 2 {
            let is_monthly = points
                .iter()
                .map(SeriesPoint::date_label)
                .find(|label| !label.is_empty())
                .is_some_and(|label| MONTHLY_LABEL.is_match(label));
            return if is_monthly { Self::Monthly } else { Self::Daily };
        }

        #[expect(clippy::cast_precision_loss)]
        let mean_gap_days = dates
            .iter()
            .tuple_windows()
            .map(|(left, right)| (*right - *left).num_days().abs() as f64)
            .sum::<f64>()
            / (dates.len() - 1) as f64;

        if mean_gap_days > MONTHLY_MEAN_GAP_DAYS { Self::Monthly } else { Self::Daily }
    }

    #[must_use]
    pub fn format_axis_label(self, date: NaiveDate) -> String {
        match self {
            Self::Daily => date.format("%d/%m").to_string(),
            Self::Monthly => date.format("%m/%Y").to_string(),
        }
    }
}
