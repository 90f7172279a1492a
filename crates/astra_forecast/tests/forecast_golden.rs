//! End-to-end forecast tests on a deterministic mock ephemeris: a pinned
//! natal chart fed into synastry and the transit-driven career outlook.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

use astra_chart::{AspectKind, ChartBody, Element, NatalChart, compute_natal_chart};
use astra_ephem::{
    Body, EclipticPosition, EphemerisAdapter, EphemerisError, GeoPosition, SolarEvent,
};
use astra_forecast::{
    Language, NoInterpretations, TransitTarget, career_outlook, compute_synastry,
};
use astra_time::TimezoneResolver;

struct IstanbulResolver;

impl TimezoneResolver for IstanbulResolver {
    fn resolve(&self, _lat: f64, _lon: f64) -> Option<Tz> {
        Some(Tz::Europe__Istanbul)
    }
}

struct MockEphemeris {
    gast_hours: f64,
    longitudes: Vec<(Body, f64)>,
}

impl MockEphemeris {
    fn natal() -> Self {
        Self {
            gast_hours: 5.0,
            longitudes: vec![
                (Body::Sun, 84.2),
                (Body::Moon, 12.7),
                (Body::Mercury, 95.1),
                (Body::Venus, 60.4),
                (Body::Mars, 5.9),
                (Body::Jupiter, 100.3),
                (Body::Saturn, 295.8),
                (Body::Uranus, 277.2),
                (Body::Neptune, 283.5),
                (Body::Pluto, 225.1),
            ],
        }
    }

    /// Transit snapshot with only Jupiter and Saturn placed.
    fn transits(jupiter_deg: f64, saturn_deg: f64) -> Self {
        Self {
            gast_hours: 0.0,
            longitudes: vec![(Body::Jupiter, jupiter_deg), (Body::Saturn, saturn_deg)],
        }
    }
}

impl EphemerisAdapter for MockEphemeris {
    fn apparent_ecliptic_position(
        &self,
        _instant: DateTime<Utc>,
        body: Body,
    ) -> Result<EclipticPosition, EphemerisError> {
        let lon_deg = self
            .longitudes
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, lon)| *lon)
            .unwrap_or(0.0);
        Ok(EclipticPosition {
            lon_deg,
            lat_deg: 0.0,
            distance_au: 1.0,
        })
    }

    fn sidereal_time_hours(&self, _instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        Ok(self.gast_hours)
    }

    fn find_sunrise_sunset(
        &self,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
        _position: GeoPosition,
    ) -> Result<Vec<SolarEvent>, EphemerisError> {
        Ok(Vec::new())
    }

    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
    }
}

fn istanbul_chart() -> NatalChart {
    let adapter = MockEphemeris::natal();
    compute_natal_chart(&adapter, &IstanbulResolver, "1990-06-15", "12:00", 41.0, 29.0).unwrap()
}

#[test]
fn synastry_of_a_chart_with_itself_conjuncts_every_body() {
    let chart = istanbul_chart();
    let result = compute_synastry(&chart.bodies, &chart.bodies, &NoInterpretations, Language::En);
    assert!((10..=99).contains(&result.score));
    for placed in &chart.bodies {
        assert!(
            result.aspects.iter().any(|a| {
                a.first == placed.body
                    && a.second == placed.body
                    && a.kind == AspectKind::Conjunction
                    && a.orb_deg == 0.0
            }),
            "missing self-conjunction for {:?}",
            placed.body
        );
    }
    for aspect in &result.aspects {
        assert!(!aspect.interpretation.is_empty());
    }
}

#[test]
fn synastry_detects_cross_aspects_between_distinct_charts() {
    let chart = istanbul_chart();
    let mut shifted = chart.bodies.clone();
    for placed in &mut shifted {
        placed.lon_deg = (placed.lon_deg + 120.0) % 360.0;
    }
    let result = compute_synastry(&chart.bodies, &shifted, &NoInterpretations, Language::En);
    // Each body trines its shifted counterpart.
    assert!(
        result
            .aspects
            .iter()
            .any(|a| a.first == a.second && a.kind == AspectKind::Trine)
    );
}

#[test]
fn jupiter_on_midheaven_drives_the_forecast() {
    let chart = istanbul_chart();
    let transits = MockEphemeris::transits(chart.angles.midheaven_deg + 3.0, 150.0);
    let outlook = career_outlook(&transits, &chart, Language::En).unwrap();

    assert_eq!(outlook.impacts.len(), 1);
    assert_eq!(outlook.impacts[0].planet, ChartBody::Jupiter);
    assert_eq!(outlook.impacts[0].target, TransitTarget::Midheaven);
    assert_eq!(outlook.impacts[0].kind, AspectKind::Conjunction);
    assert!(outlook.forecast.contains("Jupiter"), "{}", outlook.forecast);
}

#[test]
fn forecast_is_localized() {
    let chart = istanbul_chart();
    let transits = MockEphemeris::transits(chart.angles.midheaven_deg + 3.0, 150.0);
    let outlook = career_outlook(&transits, &chart, Language::Tr).unwrap();
    assert!(outlook.forecast.contains("Jüpiter"), "{}", outlook.forecast);
}

#[test]
fn saturn_return_is_detected() {
    // Natal Saturn pinned at 295.8; transit Saturn eight degrees past it.
    let chart = istanbul_chart();
    let transits = MockEphemeris::transits(150.0, 303.0);
    let outlook = career_outlook(&transits, &chart, Language::En).unwrap();

    let saturn_return = outlook
        .impacts
        .iter()
        .find(|i| i.planet == ChartBody::Saturn && i.target == TransitTarget::NatalSaturn)
        .expect("Saturn return impact");
    assert_eq!(saturn_return.kind, AspectKind::Conjunction);
}

#[test]
fn quiet_sky_yields_the_neutral_forecast() {
    // Both transit planets far from the Midheaven and natal Saturn.
    let chart = istanbul_chart();
    let mc = chart.angles.midheaven_deg;
    let transits = MockEphemeris::transits((mc + 50.0) % 360.0, (mc + 75.0) % 360.0);
    let outlook = career_outlook(&transits, &chart, Language::En).unwrap();
    assert!(outlook.impacts.is_empty());
    assert!(outlook.forecast.contains("Steady"), "{}", outlook.forecast);
}

#[test]
fn outlook_carries_natal_saturn_context() {
    let chart = istanbul_chart();
    let transits = MockEphemeris::transits(150.0, 150.0);
    let outlook = career_outlook(&transits, &chart, Language::En).unwrap();

    // Natal Saturn at 295.8 sits in Capricorn, an earth sign.
    assert_eq!(outlook.saturn_sign.map(|s| s.name()), Some("Capricorn"));
    assert_eq!(outlook.saturn_element, Element::Earth);
    assert_eq!(outlook.mc_sign, chart.houses[9].sign);
}
