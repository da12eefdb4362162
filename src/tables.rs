use average::Mean;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        entity::EntityPoint,
        granularity::Granularity,
        peak::HourlyProfile,
        period::parse_iso_date,
        summary::Summary,
        timeline::{Timeline, TimelinePoint},
        usage::UsageTimeline,
    },
    quantity::{currency::Dong, percent::Percent},
};

/// Width of the longest bar in the hourly profile.
const BAR_WIDTH: u64 = 40;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

/// Label the point the way the chart axis would, or keep the period label as is.
fn axis_label(point: &TimelinePoint, granularity: Option<Granularity>) -> String {
    granularity
        .zip(point.date_iso.as_deref().and_then(parse_iso_date))
        .map_or_else(|| point.date_label.clone(), |(granularity, date)| {
            granularity.format_axis_label(date)
        })
}

fn utilization_color(utilization: Percent) -> Color {
    if utilization >= Percent(70.0) {
        Color::Red
    } else if utilization >= Percent(30.0) {
        Color::DarkYellow
    } else {
        Color::Green
    }
}

/// Build the revenue timeline table.
///
/// With the granularity given, the periods are labelled as on the chart axis.
pub fn build_timeline_table(timeline: &Timeline, granularity: Option<Granularity>) -> Table {
    let mean_revenue: Mean = timeline.iter().map(|point| point.revenue.0).collect();
    let mean_revenue =
        if mean_revenue.is_empty() { Dong::ZERO } else { Dong(mean_revenue.mean()) };

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Period"),
        Cell::new("Revenue").set_alignment(CellAlignment::Right),
        Cell::new("Sessions").set_alignment(CellAlignment::Right),
        Cell::new("Energy").set_alignment(CellAlignment::Right),
    ]);
    for point in timeline {
        table.add_row(vec![
            Cell::new(axis_label(point, granularity)),
            Cell::new(point.revenue).set_alignment(CellAlignment::Right).fg(
                if point.revenue >= mean_revenue { Color::Green } else { Color::Reset },
            ),
            Cell::new(point.sessions).set_alignment(CellAlignment::Right),
            Cell::new(point.energy).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_summary_table(summary: &Summary) -> Table {
    let mut table = new_table();
    table.add_row(vec![Cell::new("Revenue"), Cell::new(summary.revenue).fg(Color::Green)]);
    table.add_row(vec![Cell::new("Sessions"), Cell::new(summary.sessions)]);
    table.add_row(vec![Cell::new("Energy"), Cell::new(summary.energy)]);
    table.add_row(vec![
        Cell::new("Revenue per session"),
        summary
            .revenue_per_session
            .map_or_else(|| Cell::new("–").add_attribute(Attribute::Dim), Cell::new),
    ]);
    table.add_row(vec![
        Cell::new("Best period"),
        summary
            .best_period
            .as_deref()
            .map_or_else(|| Cell::new("–").add_attribute(Attribute::Dim), Cell::new),
    ]);
    table
}

pub fn build_usage_table(timeline: &UsageTimeline, granularity: Granularity) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(format!("Period ({granularity})")),
        Cell::new("Bookings").set_alignment(CellAlignment::Right),
        Cell::new("Completed").set_alignment(CellAlignment::Right),
        Cell::new("Completion").set_alignment(CellAlignment::Right),
        Cell::new("Utilization").set_alignment(CellAlignment::Right),
    ]);
    for point in timeline {
        let label = point
            .date_iso
            .as_deref()
            .and_then(parse_iso_date)
            .map_or_else(|| point.date_label.clone(), |date| granularity.format_axis_label(date));
        table.add_row(vec![
            Cell::new(label),
            Cell::new(point.bookings).set_alignment(CellAlignment::Right),
            Cell::new(point.completed_sessions).set_alignment(CellAlignment::Right),
            Cell::new(point.completion_rate).set_alignment(CellAlignment::Right),
            Cell::new(point.utilization)
                .set_alignment(CellAlignment::Right)
                .fg(utilization_color(point.utilization)),
        ]);
    }
    table
}

pub fn build_entity_table(title: &str, points: &[EntityPoint]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#").set_alignment(CellAlignment::Right),
        Cell::new(title),
        Cell::new("Energy").set_alignment(CellAlignment::Right),
        Cell::new("Utilization").set_alignment(CellAlignment::Right),
    ]);
    for (rank, point) in points.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(&point.label),
            Cell::new(point.energy).set_alignment(CellAlignment::Right),
            Cell::new(point.utilization)
                .set_alignment(CellAlignment::Right)
                .fg(utilization_color(point.utilization)),
        ]);
    }
    table
}

pub fn build_hourly_profile_table(profile: &HourlyProfile) -> Table {
    let peak = profile.peak();
    let max_count = peak.map_or(0, |peak| peak.session_count);

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Hour").set_alignment(CellAlignment::Right),
        Cell::new("Sessions").set_alignment(CellAlignment::Right),
        Cell::new(""),
    ]);
    for (hour, session_count) in profile.0.iter().copied().enumerate() {
        let is_peak = peak.is_some_and(|peak| peak.hour == hour);
        let bar = bar_length(session_count, max_count);
        let color = if is_peak { Color::Red } else { Color::Reset };
        table.add_row(vec![
            Cell::new(format!("{hour:02}:00")).set_alignment(CellAlignment::Right),
            Cell::new(session_count).set_alignment(CellAlignment::Right).fg(color),
            Cell::new("█".repeat(bar)).fg(color),
        ]);
    }
    table
}

/// Bar length scaled so that the busiest hour spans [`BAR_WIDTH`].
fn bar_length(session_count: u64, max_count: u64) -> usize {
    if max_count == 0 {
        return 0;
    }
    let length = u128::from(session_count) * u128::from(BAR_WIDTH) / u128::from(max_count);
    usize::try_from(length).unwrap_or_default()
}
