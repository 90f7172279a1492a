//! Behavior before init(). Kept in its own test binary so no other test
//! can have installed the global adapter first.

use chrono_tz::Tz;

use astra_rs::*;

struct NoZone;

impl TimezoneResolver for NoZone {
    fn resolve(&self, _lat: f64, _lon: f64) -> Option<Tz> {
        None
    }
}

#[test]
fn calls_before_init_fail_cleanly() {
    assert!(!is_initialized());
    assert_eq!(
        natal_chart(&NoZone, "1990-06-15", "12:00", 0.0, 0.0),
        Err(AstraError::NotInitialized)
    );
    assert_eq!(
        planetary_hours("2024-03-20", 41.0, 29.0),
        Err(AstraError::NotInitialized)
    );
}
