use chrono::{Datelike, Days, NaiveDate};

use crate::core::{
    period::{format_locale_date, parse_iso_date},
    timeline::{Timeline, TimelinePoint},
};

/// Time bucket to re-group a timeline into.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Bucket {
    /// Keep the periods as reported.
    #[default]
    Auto,

    Day,

    /// ISO week, starting on Monday.
    Week,

    Month,
}

impl Bucket {
    /// Sort key and label of the bucket containing the date.
    fn locate(self, date: NaiveDate) -> Option<(String, String)> {
        match self {
            Self::Auto => None,
            Self::Day => Some((date.format("%Y-%m-%d").to_string(), format_locale_date(date))),
            Self::Week => {
                let monday = date - Days::new(u64::from(date.weekday().num_days_from_monday()));
                Some((monday.format("%Y-%m-%d").to_string(), date.format("%G-W%V").to_string()))
            }
            Self::Month => {
                Some((date.format("%Y-%m-01").to_string(), date.format("%Y-%m").to_string()))
            }
        }
    }
}

impl Timeline {
    /// Re-group the points into the bucket.
    ///
    /// Points without a parseable date keep their own period.
    pub fn rebucket(self, bucket: Bucket) -> Self {
        if bucket == Bucket::Auto {
            return self;
        }
        Self::merge(self.into_iter().map(|point| {
            let located =
                point.date_iso.as_deref().and_then(parse_iso_date).and_then(|date| bucket.locate(date));
            match located {
                Some((sort_key, date_label)) => {
                    TimelinePoint { date_iso: Some(sort_key.clone()), sort_key, date_label, ..point }
                }
                None => point,
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::{quantity::currency::Dong, report::RevenueRow};

    fn daily(date: &str, revenue: f64) -> RevenueRow {
        RevenueRow::builder().date(date).total_revenue(Dong(revenue)).total_transactions(1).build()
    }

    fn timeline() -> Timeline {
        [
            daily("2024-01-29", 1.0),
            daily("2024-01-31", 2.0),
            daily("2024-02-01", 4.0),
            daily("2024-02-05", 8.0),
            RevenueRow::builder().date_label("Chưa rõ").total_revenue(Dong(16.0)).build(),
        ]
        .iter()
        .collect()
    }

    #[test]
    fn test_auto_is_identity() {
        let timeline = timeline();
        assert_eq!(timeline.clone().rebucket(Bucket::Auto), timeline);
    }

    #[test]
    fn test_day() {
        let rebucketed = timeline().rebucket(Bucket::Day);
        assert_eq!(rebucketed.len(), 5);
        assert_eq!(rebucketed[0].date_label, "29/1/2024");
        assert_eq!(rebucketed[4].date_label, "Chưa rõ");
    }

    #[test]
    fn test_week() {
        let rebucketed = timeline().rebucket(Bucket::Week);
        let points = rebucketed
            .iter()
            .map(|point| (point.date_label.as_str(), point.revenue, point.sessions))
            .collect_vec();
        assert_eq!(
            points,
            [("2024-W05", Dong(7.0), 3), ("2024-W06", Dong(8.0), 1), ("Chưa rõ", Dong(16.0), 0)]
        );
        assert_eq!(rebucketed[0].date_iso.as_deref(), Some("2024-01-29"));
    }

    #[test]
    fn test_month() {
        let rebucketed = timeline().rebucket(Bucket::Month);
        let points = rebucketed
            .iter()
            .map(|point| (point.sort_key.as_str(), point.date_label.as_str(), point.revenue))
            .collect_vec();
        assert_eq!(
            points,
            [
                ("2024-01-01", "2024-01", Dong(3.0)),
                ("2024-02-01", "2024-02", Dong(12.0)),
                ("Chưa rõ", "Chưa rõ", Dong(16.0)),
            ]
        );
    }
}
