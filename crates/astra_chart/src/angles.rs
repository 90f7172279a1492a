//! Ascendant and Midheaven from sidereal time.
//!
//! Standard spherical astronomy formulas (Meeus, "Astronomical
//! Algorithms", Ch. 13):
//!
//! `AC = atan2(cos LST, -(sin LST * cos eps + tan lat * sin eps))`
//! `MC = atan2(sin LST, cos LST * cos eps)`
//!
//! where LST is the local sidereal time and eps the obliquity of the
//! ecliptic. Results are reduced to [0, 360).
//!
//! This module is deliberately cheap — no planetary positions are
//! touched — so it can be evaluated in tight loops (e.g. birth-time
//! rectification searches over many candidate instants).

use chrono::{DateTime, Utc};
use serde::Serialize;

use astra_ephem::{EphemerisAdapter, GeoPosition};

use crate::error::ChartError;
use crate::zodiac::{ZodiacSign, normalize_360};

/// Obliquity of the ecliptic in degrees (J2000 mean value).
///
/// Fixed, not epoch-adjusted: the Sun cusp heuristic downstream is tuned
/// against this constant.
pub const OBLIQUITY_DEG: f64 = 23.439_291_1;

/// Chart angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Angles {
    /// Ascendant ecliptic longitude in degrees, [0, 360).
    pub ascendant_deg: f64,
    /// Sign containing the ascendant.
    pub ascendant_sign: ZodiacSign,
    /// Midheaven ecliptic longitude in degrees, [0, 360).
    pub midheaven_deg: f64,
    /// True when the trigonometry degenerated and the documented fallback
    /// (Aries 0 deg / MC 0 deg) was substituted.
    pub fallback: bool,
}

impl Angles {
    /// The documented degenerate-geometry fallback.
    fn degenerate() -> Self {
        Self {
            ascendant_deg: 0.0,
            ascendant_sign: ZodiacSign::Aries,
            midheaven_deg: 0.0,
            fallback: true,
        }
    }
}

/// Local sidereal time in degrees from Greenwich apparent sidereal time
/// in hours and an east longitude: `LST = GAST * 15 + lon`, mod 360.
pub fn local_sidereal_time_deg(gast_hours: f64, longitude_deg: f64) -> f64 {
    normalize_360(gast_hours * 15.0 + longitude_deg)
}

/// Ascendant and Midheaven from a pre-computed LST.
///
/// Pure math; shared by the full and reduced-cost paths. A non-finite
/// input or result yields the flagged fallback instead of an error.
pub fn angles_from_lst(lst_deg: f64, latitude_deg: f64) -> Angles {
    if !lst_deg.is_finite() || !latitude_deg.is_finite() {
        log::warn!("degenerate angle inputs: lst={lst_deg}, lat={latitude_deg}");
        return Angles::degenerate();
    }

    let lst = lst_deg.to_radians();
    let lat = latitude_deg.to_radians();
    let eps = OBLIQUITY_DEG.to_radians();

    let ac = f64::atan2(
        lst.cos(),
        -(lst.sin() * eps.cos() + lat.tan() * eps.sin()),
    );
    let mc = f64::atan2(lst.sin(), lst.cos() * eps.cos());

    let ascendant_deg = normalize_360(ac.to_degrees());
    let midheaven_deg = normalize_360(mc.to_degrees());

    if !ascendant_deg.is_finite() || !midheaven_deg.is_finite() {
        log::warn!("ascendant computation degenerated at lat {latitude_deg}");
        return Angles::degenerate();
    }

    Angles {
        ascendant_deg,
        ascendant_sign: ZodiacSign::from_longitude(ascendant_deg),
        midheaven_deg,
        fallback: false,
    }
}

/// Compute chart angles for an instant and location.
///
/// Sources sidereal time from the ephemeris adapter; an adapter failure
/// propagates, while degenerate trigonometry is recovered locally with the
/// flagged fallback.
pub fn compute_angles(
    adapter: &dyn EphemerisAdapter,
    instant: DateTime<Utc>,
    position: GeoPosition,
) -> Result<Angles, ChartError> {
    let gast_hours = adapter.sidereal_time_hours(instant)?;
    let lst = local_sidereal_time_deg(gast_hours, position.longitude_deg);
    Ok(angles_from_lst(lst, position.latitude_deg))
}
