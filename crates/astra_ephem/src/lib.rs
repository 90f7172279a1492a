//! Ephemeris adapter contract.
//!
//! The engine consumes, but does not implement, an ephemeris data source
//! providing apparent geocentric ecliptic positions, Greenwich apparent
//! sidereal time, and sunrise/sunset event search. Implementations wrap a
//! planetary ephemeris (e.g. a JPL development ephemeris); the adapter is
//! loaded once per process and shared read-only thereafter.

pub mod error;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use error::EphemerisError;

/// Physical solar-system bodies the engine queries.
///
/// These are bodies an ephemeris can evaluate directly. Computed points
/// (the lunar North Node) are NOT included here — they are derived
/// downstream in the chart crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Body {
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
}

/// All queryable bodies, in traditional order.
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
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
        }
    }
}

/// Apparent geocentric ecliptic-of-date coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EclipticPosition {
    /// Ecliptic longitude in degrees, [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude in degrees.
    pub lat_deg: f64,
    /// Geocentric distance in AU.
    pub distance_au: f64,
}

/// Geographic position on the WGS84 ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPosition {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl GeoPosition {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// A discrete solar horizon-crossing event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarEvent {
    /// Event instant (UTC).
    pub instant: DateTime<Utc>,
    /// True for sunrise, false for sunset.
    pub is_rise: bool,
}

/// External ephemeris data source.
///
/// Implementations must be usable concurrently through a shared reference;
/// the engine never mutates the adapter after initialization.
pub trait EphemerisAdapter {
    /// Apparent geocentric ecliptic-of-date position of a body.
    fn apparent_ecliptic_position(
        &self,
        instant: DateTime<Utc>,
        body: Body,
    ) -> Result<EclipticPosition, EphemerisError>;

    /// Greenwich apparent sidereal time in hours.
    fn sidereal_time_hours(&self, instant: DateTime<Utc>) -> Result<f64, EphemerisError>;

    /// Sunrise/sunset events within `[start, end]` at a location, in
    /// chronological order.
    fn find_sunrise_sunset(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        position: GeoPosition,
    ) -> Result<Vec<SolarEvent>, EphemerisError>;

    /// The current instant. Overridable for deterministic tests.
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Shared, immutable ephemeris handle. Initialized once, read-only after.
pub type SharedEphemeris = Arc<dyn EphemerisAdapter + Send + Sync>;
