//! Civil date/time → UTC instant resolution.
//!
//! Resolution policy:
//! - No timezone found for the coordinates (open ocean) → local mean time:
//!   the UTC offset is approximated as `longitude / 15` hours.
//! - Ambiguous local time (DST fall-back overlap) → the standard-time
//!   branch, deterministically.
//! - Non-existent local time (DST spring-forward gap) → input plus one
//!   hour, resolved on the DST branch.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};

use crate::error::TimeError;

/// Maps geographic coordinates to a political timezone.
///
/// External collaborator: implementations typically wrap a tz-boundary
/// dataset. Returning `None` (e.g. for open ocean) triggers the local
/// mean time fallback.
pub trait TimezoneResolver {
    /// Timezone containing the given point, if any.
    fn resolve(&self, latitude_deg: f64, longitude_deg: f64) -> Option<Tz>;
}

/// A resolved civil time: the UTC instant plus presentation metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTime {
    /// The absolute UTC instant.
    pub instant: DateTime<Utc>,
    /// Human-readable zone label (tz name, or the LMT approximation).
    pub zone_label: String,
    /// The civil wall time as entered. Retained because the Sun cusp
    /// heuristic keys on the civil calendar date, not the UTC date.
    pub civil: NaiveDateTime,
}

/// Parse a civil date (`YYYY-MM-DD` or `YYYY/MM/DD`) and time (`HH:MM`).
pub fn parse_civil(date_str: &str, time_str: &str) -> Result<NaiveDateTime, TimeError> {
    let normalized = date_str.replace('/', "-");
    let date = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").map_err(|source| {
        TimeError::Parse {
            field: "date",
            value: date_str.to_string(),
            source,
        }
    })?;
    let time = NaiveTime::parse_from_str(time_str, "%H:%M").map_err(|source| {
        TimeError::Parse {
            field: "time",
            value: time_str.to_string(),
            source,
        }
    })?;
    Ok(date.and_time(time))
}

/// Resolve a civil date/time at a location to a UTC instant.
pub fn resolve_civil_time(
    resolver: &dyn TimezoneResolver,
    date_str: &str,
    time_str: &str,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<ResolvedTime, TimeError> {
    let civil = parse_civil(date_str, time_str)?;

    let Some(tz) = resolver.resolve(latitude_deg, longitude_deg) else {
        return Ok(local_mean_time(civil, longitude_deg));
    };

    let instant = localize(tz, civil)?;
    Ok(ResolvedTime {
        instant,
        zone_label: tz.name().to_string(),
        civil,
    })
}

/// Local mean time fallback: offset hours = longitude / 15.
fn local_mean_time(civil: NaiveDateTime, longitude_deg: f64) -> ResolvedTime {
    let offset_hours = longitude_deg / 15.0;
    let offset = Duration::milliseconds((offset_hours * 3_600_000.0).round() as i64);
    ResolvedTime {
        instant: (civil - offset).and_utc(),
        zone_label: format!("LMT (Approx {offset_hours:.1}h)"),
        civil,
    }
}

/// Localize a naive civil time against a zone's historical rules.
fn localize(tz: Tz, civil: NaiveDateTime) -> Result<DateTime<Utc>, TimeError> {
    match tz.from_local_datetime(&civil) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(a, b) => {
            // Fall-back overlap: prefer the candidate with no DST offset
            // (standard time). If both claim DST, the later instant wins.
            let standard = if a.offset().dst_offset().is_zero() { a } else { b };
            Ok(standard.with_timezone(&Utc))
        }
        LocalResult::None => {
            // Spring-forward gap: the clock jumped over this wall time.
            let shifted = civil + Duration::hours(1);
            match tz.from_local_datetime(&shifted) {
                LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
                LocalResult::Ambiguous(a, _) => Ok(a.with_timezone(&Utc)),
                LocalResult::None => Err(TimeError::UnresolvableLocalTime {
                    value: civil.to_string(),
                    zone: tz.name().to_string(),
                }),
            }
        }
    }
}
