//! Natal chart assembly.
//!
//! Orchestrates the full pipeline: civil time resolution → chart angles →
//! per-body placement (sign, degree, whole-sign house) → mean North Node.
//! Per-body ephemeris failures omit the body from the chart; they are
//! logged and recorded in [`NatalChart::omitted`] so callers can tell a
//! data gap from a silently defaulted value.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use astra_ephem::{Body, EphemerisAdapter, GeoPosition};
use astra_time::{TimezoneResolver, julian_centuries_tt, resolve_civil_time};

use crate::angles::{Angles, compute_angles};
use crate::cusp::apply_sun_cusp_correction;
use crate::error::ChartError;
use crate::houses::{House, house_of, whole_sign_houses};
use crate::nodes::mean_node_deg;
use crate::zodiac::{ZodiacSign, normalize_360, sign_degree};

/// A chart point: the ten physical bodies plus the computed North Node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
}

/// The physical bodies queried from the ephemeris, in traditional order.
pub const TRACKED_BODIES: [ChartBody; 10] = [
    ChartBody::Sun,
    ChartBody::Moon,
    ChartBody::Mercury,
    ChartBody::Venus,
    ChartBody::Mars,
    ChartBody::Jupiter,
    ChartBody::Saturn,
    ChartBody::Uranus,
    ChartBody::Neptune,
    ChartBody::Pluto,
];

impl ChartBody {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "North Node",
        }
    }

    /// The ephemeris body backing this point, if it is a physical body.
    pub const fn ephemeris_body(self) -> Option<Body> {
        match self {
            Self::Sun => Some(Body::Sun),
            Self::Moon => Some(Body::Moon),
            Self::Mercury => Some(Body::Mercury),
            Self::Venus => Some(Body::Venus),
            Self::Mars => Some(Body::Mars),
            Self::Jupiter => Some(Body::Jupiter),
            Self::Saturn => Some(Body::Saturn),
            Self::Uranus => Some(Body::Uranus),
            Self::Neptune => Some(Body::Neptune),
            Self::Pluto => Some(Body::Pluto),
            Self::NorthNode => None,
        }
    }
}

/// A body placed in the chart. Created once per chart computation and
/// never mutated after assembly completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedBody {
    pub body: ChartBody,
    /// Tropical ecliptic longitude in degrees, [0, 360).
    pub lon_deg: f64,
    pub sign: ZodiacSign,
    /// Degree within the sign, [0, 30).
    pub sign_deg: f64,
    /// Whole-sign house, 1-12.
    pub house: u8,
}

/// A fully assembled natal chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NatalChart {
    pub bodies: Vec<PlacedBody>,
    pub houses: [House; 12],
    pub angles: Angles,
    /// Mean North Node longitude in degrees.
    pub north_node_deg: f64,
    /// The resolved UTC instant of the chart.
    pub instant: DateTime<Utc>,
    /// Human-readable timezone label (tz name or LMT approximation).
    pub timezone_label: String,
    /// Bodies omitted because the ephemeris could not evaluate them.
    pub omitted: Vec<ChartBody>,
}

impl NatalChart {
    /// Look up a placed body.
    pub fn body(&self, body: ChartBody) -> Option<&PlacedBody> {
        self.bodies.iter().find(|p| p.body == body)
    }
}

/// Compute a full natal chart from civil birth data.
pub fn compute_natal_chart(
    adapter: &dyn EphemerisAdapter,
    resolver: &dyn TimezoneResolver,
    date_str: &str,
    time_str: &str,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<NatalChart, ChartError> {
    let resolved = resolve_civil_time(resolver, date_str, time_str, latitude_deg, longitude_deg)?;
    let instant = resolved.instant;
    let position = GeoPosition::new(latitude_deg, longitude_deg);

    let angles = compute_angles(adapter, instant, position)?;
    let houses = whole_sign_houses(angles.ascendant_sign);

    // The cusp heuristic keys on the civil calendar date as entered.
    let civil_month = resolved.civil.month();
    let civil_day = resolved.civil.day();

    let mut bodies = Vec::with_capacity(TRACKED_BODIES.len() + 1);
    let mut omitted = Vec::new();

    for chart_body in TRACKED_BODIES {
        let Some(body) = chart_body.ephemeris_body() else {
            continue;
        };
        match adapter.apparent_ecliptic_position(instant, body) {
            Ok(pos) => {
                let lon_deg = normalize_360(pos.lon_deg);
                let mut sign = ZodiacSign::from_longitude(lon_deg);
                let mut sign_deg = sign_degree(lon_deg);

                if chart_body == ChartBody::Sun {
                    let corrected =
                        apply_sun_cusp_correction(sign, sign_deg, civil_month, civil_day);
                    sign = corrected.sign;
                    sign_deg = corrected.sign_deg;
                }

                // House follows the (possibly cusp-corrected) sign.
                let house = house_of(sign, angles.ascendant_sign);
                bodies.push(PlacedBody {
                    body: chart_body,
                    lon_deg,
                    sign,
                    sign_deg,
                    house,
                });
            }
            Err(e) => {
                log::warn!("omitting {} from chart: {e}", chart_body.name());
                omitted.push(chart_body);
            }
        }
    }

    let north_node_deg = mean_node_deg(julian_centuries_tt(instant));
    bodies.push(PlacedBody {
        body: ChartBody::NorthNode,
        lon_deg: north_node_deg,
        sign: ZodiacSign::from_longitude(north_node_deg),
        sign_deg: sign_degree(north_node_deg),
        // The node is always reported in the first house, a deliberate
        // approximation.
        house: 1,
    });

    Ok(NatalChart {
        bodies,
        houses,
        angles,
        north_node_deg,
        instant,
        timezone_label: resolved.zone_label,
        omitted,
    })
}
