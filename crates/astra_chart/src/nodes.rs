//! Mean lunar North Node and the draconic transform.
//!
//! The node uses the closed-form mean-element polynomial
//! `N = 125.04452 - 1934.136261 * T` (T in Julian centuries TT since
//! J2000.0) — not the true osculating node. Accurate to the sign/house
//! level, not for high-precision ephemeris work.
//!
//! A draconic chart re-anchors every body to the node as zero point:
//! `draconic = (tropical - node) mod 360`.

use serde::Serialize;

use crate::natal::{ChartBody, PlacedBody};
use crate::zodiac::{ZodiacSign, normalize_360, sign_degree};

/// Mean North Node ecliptic longitude in degrees, [0, 360).
///
/// `centuries_tt` = Julian centuries of TT since J2000.0.
pub fn mean_node_deg(centuries_tt: f64) -> f64 {
    normalize_360(125.044_52 - 1_934.136_261 * centuries_tt)
}

/// A body's position in the draconic (node-relative) frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DraconicPosition {
    pub body: ChartBody,
    pub lon_deg: f64,
    pub sign: ZodiacSign,
    pub sign_deg: f64,
}

/// Draconic longitudes for a placed body set.
///
/// The natal North Node entry itself is excluded — it is the zero point.
pub fn draconic_positions(bodies: &[PlacedBody], node_lon_deg: f64) -> Vec<DraconicPosition> {
    bodies
        .iter()
        .filter(|p| p.body != ChartBody::NorthNode)
        .map(|p| {
            let lon_deg = normalize_360(p.lon_deg - node_lon_deg);
            DraconicPosition {
                body: p.body,
                lon_deg,
                sign: ZodiacSign::from_longitude(lon_deg),
                sign_deg: sign_degree(lon_deg),
            }
        })
        .collect()
}
