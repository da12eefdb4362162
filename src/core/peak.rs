use serde::{Serialize, Serializer, ser::SerializeSeq};

use crate::{prelude::*, report::PeakHourRow};

/// Sessions within an hour of the day.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourPoint {
    pub hour: usize,
    pub session_count: u64,
}

/// Session counts per hour of the day.
#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct HourlyProfile(pub [u64; 24]);

impl FromIterator<PeakHourRow> for HourlyProfile {
    fn from_iter<T: IntoIterator<Item = PeakHourRow>>(rows: T) -> Self {
        let mut session_counts = [0_u64; 24];
        for row in rows {
            if let Some(hour) = row.hour_index() {
                session_counts[hour] = session_counts[hour].saturating_add(row.session_count);
            } else {
                warn!(row.hour, row.session_count, "skipped the out-of-range hour");
            }
        }
        Self(session_counts)
    }
}

impl HourlyProfile {
    /// Busiest hour, the earliest one on ties.
    #[must_use]
    pub fn peak(&self) -> Option<HourPoint> {
        self.0
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, session_count)| *session_count != 0)
            .max_by(|(lhs_hour, lhs_count), (rhs_hour, rhs_count)| {
                lhs_count.cmp(rhs_count).then(rhs_hour.cmp(lhs_hour))
            })
            .map(|(hour, session_count)| HourPoint { hour, session_count })
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().fold(0, |total, count| total.saturating_add(*count))
    }
}

impl Serialize for HourlyProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut sequence = serializer.serialize_seq(Some(self.0.len()))?;
        for (hour, session_count) in self.0.iter().copied().enumerate() {
            sequence.serialize_element(&HourPoint { hour, session_count })?;
        }
        sequence.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let profile = HourlyProfile::from_iter(Vec::<PeakHourRow>::new());
        assert_eq!(profile.total(), 0);
        assert_eq!(profile.peak(), None);
    }

    #[test]
    fn test_folds_rows() {
        let profile = [
            PeakHourRow::new(8, 3),
            PeakHourRow::new(18, 7),
            PeakHourRow::new(8, 4),
            PeakHourRow::new(24, 100),
            PeakHourRow::new(-3, 100),
        ]
        .into_iter()
        .collect::<HourlyProfile>();
        assert_eq!(profile.0[8], 7);
        assert_eq!(profile.0[18], 7);
        assert_eq!(profile.total(), 14);
        assert_eq!(profile.peak(), Some(HourPoint { hour: 8, session_count: 7 }));
    }

    #[test]
    fn test_serialize() -> Result {
        let profile = [PeakHourRow::new(1, 2)].into_iter().collect::<HourlyProfile>();
        let json = serde_json::to_value(profile)?;
        assert_eq!(json[1], serde_json::json!({ "hour": 1, "sessionCount": 2 }));
        assert_eq!(json.as_array().map(Vec::len), Some(24));
        Ok(())
    }

    #[test]
    fn test_huge_counts_saturate() {
        let profile = [PeakHourRow::new(18, u64::MAX), PeakHourRow::new(18, 1), PeakHourRow::new(7, 5)]
            .into_iter()
            .collect::<HourlyProfile>();
        assert_eq!(profile.0[18], u64::MAX);
        assert_eq!(profile.total(), u64::MAX);
        assert_eq!(profile.peak(), Some(HourPoint { hour: 18, session_count: u64::MAX }));
    }
}
