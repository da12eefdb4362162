use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::report::{RevenueRow, UsageRow};

/// Display label for the rows without any usable date information.
pub const UNKNOWN_LABEL: &str = "Không xác định";

/// Row which carries a period in any of the shapes the backend emits.
pub trait Dated {
    /// Explicit ISO date, if any.
    fn explicit_date(&self) -> Option<&str> {
        None
    }

    fn year(&self) -> Option<i32>;

    fn month(&self) -> Option<u32>;

    /// Pre-computed display label.
    fn date_label(&self) -> Option<&str> {
        None
    }
}

impl Dated for RevenueRow {
    fn explicit_date(&self) -> Option<&str> {
        Self::explicit_date(self)
    }

    fn year(&self) -> Option<i32> {
        self.year
    }

    fn month(&self) -> Option<u32> {
        self.month
    }

    fn date_label(&self) -> Option<&str> {
        self.date_label.as_deref()
    }
}

impl Dated for UsageRow {
    fn year(&self) -> Option<i32> {
        self.year
    }

    fn month(&self) -> Option<u32> {
        self.month
    }
}

/// Normalized period of a report row.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Period {
    /// Lexicographically sortable key, zero-padded ISO-like.
    pub sort_key: String,

    /// Human-readable label.
    pub label: String,

    /// ISO date when the period maps onto one.
    pub date_iso: Option<String>,
}

impl Period {
    /// Normalize the row period.
    ///
    /// Explicit ISO date wins, then the year-month pair, then the pre-computed label.
    pub fn of<R: Dated + ?Sized>(row: &R) -> Self {
        if let Some(date) = row.explicit_date()
            && let Some(parsed) = parse_iso_date(date)
        {
            return Self {
                sort_key: date.to_string(),
                label: format_locale_date(parsed),
                date_iso: Some(date.to_string()),
            };
        }

        if let Some(year) = row.year() {
            let month = row.month().unwrap_or(1);
            let sort_key = format!("{year}-{month:02}-01");
            let date_iso = parse_iso_date(&sort_key).is_some().then(|| sort_key.clone());
            return Self { label: format!("{year}-{month:02}"), sort_key, date_iso };
        }

        let date_label = row.date_label().map(str::trim).filter(|label| !label.is_empty());
        Self {
            sort_key: date_label.unwrap_or_default().to_string(),
            label: date_label.unwrap_or(UNKNOWN_LABEL).to_string(),
            date_iso: None,
        }
    }
}

/// Parse a date the way the backend emits them: plain dates, RFC 3339 or offset-less timestamps.
#[must_use]
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|timestamp| timestamp.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|timestamp| timestamp.date())
        })
}

/// Format the date as `vi-VN` does: day and month without zero padding.
#[must_use]
pub fn format_locale_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}
