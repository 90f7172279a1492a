//! Facade integration tests on a deterministic mock adapter.

use std::sync::{Arc, Once};

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

use astra_rs::*;

static INIT: Once = Once::new();

struct IstanbulResolver;

impl TimezoneResolver for IstanbulResolver {
    fn resolve(&self, _lat: f64, _lon: f64) -> Option<Tz> {
        Some(Tz::Europe__Istanbul)
    }
}

struct MockEphemeris;

impl EphemerisAdapter for MockEphemeris {
    fn apparent_ecliptic_position(
        &self,
        _instant: DateTime<Utc>,
        body: Body,
    ) -> Result<EclipticPosition, EphemerisError> {
        let lon_deg = match body {
            Body::Sun => 84.2,
            Body::Moon => 12.7,
            Body::Mercury => 95.1,
            Body::Venus => 60.4,
            Body::Mars => 5.9,
            Body::Jupiter => 100.3,
            Body::Saturn => 295.8,
            Body::Uranus => 277.2,
            Body::Neptune => 283.5,
            Body::Pluto => 225.1,
        };
        Ok(EclipticPosition {
            lon_deg,
            lat_deg: 0.0,
            distance_au: 1.0,
        })
    }

    fn sidereal_time_hours(&self, _instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        Ok(5.0)
    }

    fn find_sunrise_sunset(
        &self,
        start: DateTime<Utc>,
        _end: DateTime<Utc>,
        _position: GeoPosition,
    ) -> Result<Vec<SolarEvent>, EphemerisError> {
        // A plausible rise/set/rise triple inside any requested window.
        let day = start.date_naive();
        let at = |d: chrono::NaiveDate, h, m| {
            Utc.from_utc_datetime(&d.and_hms_opt(h, m, 0).unwrap())
        };
        Ok(vec![
            SolarEvent {
                instant: at(day, 6, 17),
                is_rise: true,
            },
            SolarEvent {
                instant: at(day, 18, 43),
                is_rise: false,
            },
            SolarEvent {
                instant: at(day + chrono::Duration::days(1), 6, 18),
                is_rise: true,
            },
        ])
    }

    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
    }
}

fn ensure_init() {
    INIT.call_once(|| {
        init(Arc::new(MockEphemeris)).expect("adapter init");
    });
}

#[test]
fn is_initialized_after_init() {
    ensure_init();
    assert!(is_initialized());
}

#[test]
fn double_init_is_rejected() {
    ensure_init();
    assert_eq!(
        init(Arc::new(MockEphemeris)),
        Err(AstraError::AlreadyInitialized)
    );
    assert!(matches!(
        init_with(|| Ok::<_, EphemerisError>(Arc::new(MockEphemeris) as SharedEphemeris)),
        Err(AstraError::AlreadyInitialized)
    ));
}

#[test]
fn natal_chart_end_to_end() {
    ensure_init();
    let chart = natal_chart(&IstanbulResolver, "1990-06-15", "12:00", 41.0, 29.0).unwrap();
    assert_eq!(chart.timezone_label, "Europe/Istanbul");
    assert_eq!(chart.bodies.len(), 11);
    let sun = chart.body(ChartBody::Sun).unwrap();
    assert_eq!(sun.sign, ZodiacSign::Gemini);
}

#[test]
fn angles_light_matches_full_chart() {
    ensure_init();
    let chart = natal_chart(&IstanbulResolver, "1990-06-15", "12:00", 41.0, 29.0).unwrap();
    let angles = angles_light(chart.instant, 41.0, 29.0).unwrap();
    assert_eq!(angles, chart.angles);
}

#[test]
fn synastry_between_two_charts() {
    ensure_init();
    let a = natal_chart(&IstanbulResolver, "1990-06-15", "12:00", 41.0, 29.0).unwrap();
    let b = natal_chart(&IstanbulResolver, "1990-06-15", "18:00", 41.0, 29.0).unwrap();
    let result = synastry(&a, &b, &NoInterpretations, Language::En);
    assert!((10..=99).contains(&result.score));
}

#[test]
fn planetary_hours_through_the_facade() {
    ensure_init();
    let slots = planetary_hours("2024-03-20", 41.0, 29.0).unwrap();
    assert_eq!(slots.len(), 24);
    assert_eq!(slots[0].ruler, ChartBody::Mercury);
}

#[test]
fn career_outlook_through_the_facade() {
    ensure_init();
    let chart = natal_chart(&IstanbulResolver, "1990-06-15", "12:00", 41.0, 29.0).unwrap();
    let outlook = career_outlook(&chart, Language::En).unwrap();
    assert_eq!(outlook.saturn_sign, Some(ZodiacSign::Capricorn));
    assert!(!outlook.forecast.is_empty());
}

#[test]
fn draconic_chart_excludes_the_node() {
    ensure_init();
    let chart = natal_chart(&IstanbulResolver, "1990-06-15", "12:00", 41.0, 29.0).unwrap();
    let draconic = draconic_chart(&chart);
    assert_eq!(draconic.len(), 10);
    assert!(draconic.iter().all(|p| p.body != ChartBody::NorthNode));
}

#[test]
fn dominant_elements_counts_the_ascendant() {
    ensure_init();
    let chart = natal_chart(&IstanbulResolver, "1990-06-15", "12:00", 41.0, 29.0).unwrap();
    let balance = dominant_elements(&chart);
    let total = balance.fire + balance.earth + balance.air + balance.water;
    // 11 bodies (Sun/Moon weight 3, Venus/Mars weight 2, others 1) + 3 for
    // the ascendant.
    assert_eq!(total, 3 + 3 + 2 + 2 + 7 + 3);
}
