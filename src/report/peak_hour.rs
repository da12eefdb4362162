use serde::Deserialize;
use serde_with::{DefaultOnError, serde_as};

#[must_use]
#[serde_as]
#[derive(Copy, Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakHourRow {
    /// Hour of the day, valid rows are within `0..=23`.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub hour: i64,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub session_count: u64,
}

impl PeakHourRow {
    pub const fn new(hour: i64, session_count: u64) -> Self {
        Self { hour, session_count }
    }

    /// Bucket index, `None` when the hour is out of range.
    #[must_use]
    pub fn hour_index(self) -> Option<usize> {
        usize::try_from(self.hour).ok().filter(|hour| *hour < 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_index() {
        assert_eq!(PeakHourRow::new(0, 1).hour_index(), Some(0));
        assert_eq!(PeakHourRow::new(23, 1).hour_index(), Some(23));
        assert_eq!(PeakHourRow::new(24, 1).hour_index(), None);
        assert_eq!(PeakHourRow::new(-1, 1).hour_index(), None);
    }
}
