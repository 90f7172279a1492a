//! Julian Date and time-scale conversion helpers.
//!
//! The mean-node polynomial (and nothing else in the engine) is referenced
//! to Terrestrial Time. UTC→TT is applied as a fixed offset of 69.184 s
//! (37 leap seconds + 32.184 s TAI−TT, valid since 2017). The resulting
//! error for historical dates is a few tens of seconds, far below the
//! sign/house resolution this engine targets.

use chrono::{DateTime, Utc};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00 UTC).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Fixed UTC→TT offset in seconds.
const TT_MINUS_UTC_S: f64 = 69.184;

/// Julian Date (UTC scale) of an instant.
pub fn jd_utc(instant: DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD + instant.timestamp_millis() as f64 / 86_400_000.0
}

/// Julian Date (TT scale, fixed-offset approximation) of an instant.
pub fn jd_tt(instant: DateTime<Utc>) -> f64 {
    jd_utc(instant) + TT_MINUS_UTC_S / 86_400.0
}

/// Julian centuries of TT elapsed since J2000.0.
pub fn julian_centuries_tt(instant: DateTime<Utc>) -> f64 {
    (jd_tt(instant) - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn jd_at_unix_epoch() {
        let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert!((jd_utc(epoch) - UNIX_EPOCH_JD).abs() < 1e-9);
    }

    #[test]
    fn jd_at_j2000_noon() {
        let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!(
            (jd_utc(j2000) - J2000_JD).abs() < 1e-9,
            "jd = {}",
            jd_utc(j2000)
        );
    }

    #[test]
    fn centuries_near_j2000() {
        // At J2000 UTC noon, TT is 69.184 s ahead, so T is slightly positive.
        let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let t = julian_centuries_tt(j2000);
        let expected = TT_MINUS_UTC_S / 86_400.0 / DAYS_PER_CENTURY;
        assert!((t - expected).abs() < 1e-12, "T = {t}");
    }

    #[test]
    fn one_century_later() {
        let a = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2100, 1, 1, 12, 0, 0).unwrap();
        let dt = julian_centuries_tt(b) - julian_centuries_tt(a);
        // 36525 days per century; the civil century 2000..2100 is 36524 days.
        assert!((dt - 36_524.0 / 36_525.0).abs() < 1e-9, "dT = {dt}");
    }

    #[test]
    fn pre_epoch_dates_are_negative() {
        let t = Utc.with_ymd_and_hms(1950, 6, 1, 0, 0, 0).unwrap();
        assert!(julian_centuries_tt(t) < -0.49);
    }
}
