//! Planetary hours of a calendar date.
//!
//! The daylight span (sunrise to sunset) and the night span (sunset to the
//! next sunrise) are each divided into twelve equal unequal-hours. The
//! first daylight hour is ruled by the weekday's planet; subsequent hours
//! follow the Chaldean order continuously across the day/night boundary.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

use astra_ephem::{EphemerisAdapter, GeoPosition};
use astra_time::TimeError;

use crate::error::ForecastError;
use crate::hours_types::{CHALDEAN_ORDER, HourKind, PlanetaryHourSlot, weekday_ruler};

/// Sunrise, sunset, next sunrise bracketing one planetary day.
struct DayFrame {
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    next_sunrise: DateTime<Utc>,
}

/// Compute the 24 planetary hours of a date at a location.
///
/// The date is a calendar day in `YYYY-MM-DD` form (a `/` separator is
/// also accepted). If the solar event search fails or returns an
/// incomplete event set (polar day/night, adapter limits), a nominal
/// 06:00/18:00/30:00 UTC frame is substituted.
pub fn planetary_hours(
    adapter: &dyn EphemerisAdapter,
    date_str: &str,
    position: GeoPosition,
) -> Result<Vec<PlanetaryHourSlot>, ForecastError> {
    let normalized = date_str.replace('/', "-");
    let date = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").map_err(|source| {
        TimeError::Parse {
            field: "date",
            value: date_str.to_string(),
            source,
        }
    })?;

    let day_start = date.and_time(NaiveTime::MIN).and_utc();
    let frame = find_day_frame(adapter, day_start, position);
    let start_ruler = weekday_ruler(date.weekday());
    let start_idx = CHALDEAN_ORDER
        .iter()
        .position(|&b| b == start_ruler)
        .unwrap_or(0);

    let mut slots = Vec::with_capacity(24);
    tile_span(
        &mut slots,
        frame.sunrise,
        frame.sunset,
        HourKind::Day,
        start_idx,
    );
    tile_span(
        &mut slots,
        frame.sunset,
        frame.next_sunrise,
        HourKind::Night,
        start_idx + 12,
    );
    Ok(slots)
}

/// Locate sunrise, sunset, and the following sunrise around a UTC day.
///
/// The search window opens a few hours into the day so that a sunrise
/// belonging to the previous civil day (far-east longitudes) is skipped,
/// and extends into the next day to capture the following sunrise.
fn find_day_frame(
    adapter: &dyn EphemerisAdapter,
    day_start: DateTime<Utc>,
    position: GeoPosition,
) -> DayFrame {
    let window_start = day_start + Duration::hours(3);
    let window_end = day_start + Duration::days(1) + Duration::hours(12);

    let events = match adapter.find_sunrise_sunset(window_start, window_end, position) {
        Ok(events) => events,
        Err(err) => {
            log::warn!("solar event search failed, using nominal hours: {err}");
            return nominal_frame(day_start);
        }
    };

    let mut sunrise = None;
    let mut sunset = None;
    let mut next_sunrise = None;
    for event in &events {
        if event.is_rise {
            if sunrise.is_none() {
                sunrise = Some(event.instant);
            } else if sunset.is_some() {
                next_sunrise = Some(event.instant);
                break;
            }
        } else if sunrise.is_some() && sunset.is_none() {
            sunset = Some(event.instant);
        }
    }

    match (sunrise, sunset, next_sunrise) {
        (Some(sunrise), Some(sunset), Some(next_sunrise)) => DayFrame {
            sunrise,
            sunset,
            next_sunrise,
        },
        _ => {
            log::warn!(
                "incomplete solar event set ({} events), using nominal hours",
                events.len()
            );
            nominal_frame(day_start)
        }
    }
}

/// Nominal frame: 06:00 sunrise, 18:00 sunset, 06:00 next-day sunrise.
fn nominal_frame(day_start: DateTime<Utc>) -> DayFrame {
    DayFrame {
        sunrise: day_start + Duration::hours(6),
        sunset: day_start + Duration::hours(18),
        next_sunrise: day_start + Duration::hours(30),
    }
}

/// Divide `[start, end]` into twelve slots. Boundaries are interpolated
/// from the span endpoints so the final slot closes exactly on `end`.
fn tile_span(
    slots: &mut Vec<PlanetaryHourSlot>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    kind: HourKind,
    ruler_offset: usize,
) {
    let span = end - start;
    for i in 0..12_i32 {
        slots.push(PlanetaryHourSlot {
            start: start + span * i / 12,
            end: start + span * (i + 1) / 12,
            ruler: CHALDEAN_ORDER[(ruler_offset + i as usize) % 7],
            kind,
        });
    }
}
