//! Types and constants for the planetary-hours calculation.

use chrono::{DateTime, Duration, Utc, Weekday};
use serde::Serialize;

use astra_chart::ChartBody;

/// The Chaldean order of the seven classical planets, from slowest to
/// fastest. Hour rulers cycle through this sequence.
pub const CHALDEAN_ORDER: [ChartBody; 7] = [
    ChartBody::Saturn,
    ChartBody::Jupiter,
    ChartBody::Mars,
    ChartBody::Sun,
    ChartBody::Venus,
    ChartBody::Mercury,
    ChartBody::Moon,
];

/// Fixed offset applied when formatting slot boundaries for display.
pub const DISPLAY_UTC_OFFSET_HOURS: i64 = 3;

/// Ruler of the first daylight hour for each weekday.
pub const fn weekday_ruler(weekday: Weekday) -> ChartBody {
    match weekday {
        Weekday::Mon => ChartBody::Moon,
        Weekday::Tue => ChartBody::Mars,
        Weekday::Wed => ChartBody::Mercury,
        Weekday::Thu => ChartBody::Jupiter,
        Weekday::Fri => ChartBody::Venus,
        Weekday::Sat => ChartBody::Saturn,
        Weekday::Sun => ChartBody::Sun,
    }
}

/// Whether a slot falls between sunrise and sunset or after sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HourKind {
    Day,
    Night,
}

/// One of the 24 unequal planetary hours of a date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetaryHourSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub ruler: ChartBody,
    pub kind: HourKind,
}

impl PlanetaryHourSlot {
    /// Start time formatted `HH:MM` in the fixed display offset.
    pub fn display_start(&self) -> String {
        format_display(self.start)
    }

    /// End time formatted `HH:MM` in the fixed display offset.
    pub fn display_end(&self) -> String {
        format_display(self.end)
    }
}

fn format_display(t: DateTime<Utc>) -> String {
    (t + Duration::hours(DISPLAY_UTC_OFFSET_HOURS))
        .format("%H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn weekday_rulers_match_day_names() {
        assert_eq!(weekday_ruler(Weekday::Sun), ChartBody::Sun);
        assert_eq!(weekday_ruler(Weekday::Mon), ChartBody::Moon);
        assert_eq!(weekday_ruler(Weekday::Sat), ChartBody::Saturn);
    }

    #[test]
    fn chaldean_order_starts_at_saturn() {
        assert_eq!(CHALDEAN_ORDER[0], ChartBody::Saturn);
        assert_eq!(CHALDEAN_ORDER[6], ChartBody::Moon);
    }

    #[test]
    fn display_applies_fixed_offset() {
        let slot = PlanetaryHourSlot {
            start: Utc.with_ymd_and_hms(2024, 3, 20, 6, 17, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 3, 20, 7, 19, 0).unwrap(),
            ruler: ChartBody::Mercury,
            kind: HourKind::Day,
        };
        assert_eq!(slot.display_start(), "09:17");
        assert_eq!(slot.display_end(), "10:19");
    }
}
