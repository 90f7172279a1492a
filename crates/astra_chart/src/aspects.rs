//! Aspect detection: pairwise angular-difference classification against
//! an orb table.
//!
//! Shared by the natal and synastry paths; only the orb table differs.
//! Classification is symmetric because it depends only on the minimal
//! angular separation of the pair.

use serde::Serialize;

use crate::natal::{ChartBody, PlacedBody};

/// The five Ptolemaic aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// Classification priority when very wide orbs could overlap.
/// Evaluated in this order; first match wins.
const CLASSIFICATION_ORDER: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
];

impl AspectKind {
    /// Exact target angle in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Sextile => "Sextile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Opposition => "Opposition",
        }
    }
}

/// Allowed deviation from the exact angle, per aspect type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbTable {
    pub conjunction: f64,
    pub sextile: f64,
    pub square: f64,
    pub trine: f64,
    pub opposition: f64,
}

impl OrbTable {
    /// Orbs used within a single chart.
    pub const fn natal() -> Self {
        Self {
            conjunction: 8.0,
            sextile: 6.0,
            square: 8.0,
            trine: 8.0,
            opposition: 8.0,
        }
    }

    /// Tighter orbs used for cross-chart comparison.
    pub const fn synastry() -> Self {
        Self {
            conjunction: 8.0,
            sextile: 5.0,
            square: 7.0,
            trine: 8.0,
            opposition: 8.0,
        }
    }

    /// Orb for a given aspect type.
    pub const fn orb(&self, kind: AspectKind) -> f64 {
        match kind {
            AspectKind::Conjunction => self.conjunction,
            AspectKind::Sextile => self.sextile,
            AspectKind::Square => self.square,
            AspectKind::Trine => self.trine,
            AspectKind::Opposition => self.opposition,
        }
    }
}

/// Minimal angular separation of two longitudes, in [0, 180].
pub fn angular_separation_deg(lon1_deg: f64, lon2_deg: f64) -> f64 {
    let diff = (lon1_deg - lon2_deg).abs() % 360.0;
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Classify a separation against an orb table.
///
/// Returns the aspect type and the orb (absolute deviation from the exact
/// angle, rounded to one decimal), or `None` when no band matches.
pub fn classify(separation_deg: f64, orbs: &OrbTable) -> Option<(AspectKind, f64)> {
    for kind in CLASSIFICATION_ORDER {
        let deviation = (separation_deg - kind.angle_deg()).abs();
        if deviation <= orbs.orb(kind) {
            return Some((kind, (deviation * 10.0).round() / 10.0));
        }
    }
    None
}

/// An aspect between two placed bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aspect {
    pub first: ChartBody,
    pub second: ChartBody,
    pub kind: AspectKind,
    /// Deviation from the exact angle, degrees, one decimal.
    pub orb_deg: f64,
}

/// Aspects among all unordered pairs of a body set, natal orbs.
pub fn natal_aspects(bodies: &[PlacedBody]) -> Vec<Aspect> {
    let orbs = OrbTable::natal();
    let mut aspects = Vec::new();
    for (i, first) in bodies.iter().enumerate() {
        for second in &bodies[i + 1..] {
            let sep = angular_separation_deg(first.lon_deg, second.lon_deg);
            if let Some((kind, orb_deg)) = classify(sep, &orbs) {
                aspects.push(Aspect {
                    first: first.body,
                    second: second.body,
                    kind,
                    orb_deg,
                });
            }
        }
    }
    aspects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separation_wraps_correctly() {
        assert!((angular_separation_deg(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((angular_separation_deg(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((angular_separation_deg(0.0, 180.0) - 180.0).abs() < 1e-12);
        assert!((angular_separation_deg(90.0, 90.0) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn separation_is_symmetric() {
        for (a, b) in [(12.3, 200.7), (0.0, 359.9), (45.0, 135.0)] {
            assert_eq!(
                angular_separation_deg(a, b),
                angular_separation_deg(b, a),
                "({a}, {b})"
            );
        }
    }

    #[test]
    fn classify_each_band() {
        let orbs = OrbTable::natal();
        assert_eq!(
            classify(3.0, &orbs),
            Some((AspectKind::Conjunction, 3.0))
        );
        assert_eq!(classify(57.0, &orbs), Some((AspectKind::Sextile, 3.0)));
        assert_eq!(classify(94.0, &orbs), Some((AspectKind::Square, 4.0)));
        assert_eq!(classify(118.0, &orbs), Some((AspectKind::Trine, 2.0)));
        assert_eq!(
            classify(175.5, &orbs),
            Some((AspectKind::Opposition, 4.5))
        );
        assert_eq!(classify(40.0, &orbs), None);
    }

    #[test]
    fn conjunction_orb_is_the_separation_itself() {
        let orbs = OrbTable::natal();
        let (kind, orb) = classify(7.94, &orbs).unwrap();
        assert_eq!(kind, AspectKind::Conjunction);
        assert!((orb - 7.9).abs() < 1e-12, "orb = {orb}");
    }

    #[test]
    fn synastry_orbs_are_tighter() {
        let orbs = OrbTable::synastry();
        // 66 deg is a sextile under natal orbs (6) but not synastry (5).
        assert_eq!(classify(66.0, &OrbTable::natal()).map(|c| c.0), Some(AspectKind::Sextile));
        assert_eq!(classify(66.0, &orbs), None);
        assert_eq!(classify(96.9, &orbs).map(|c| c.0), Some(AspectKind::Square));
        assert_eq!(classify(97.1, &orbs), None);
    }

    #[test]
    fn band_edges_inclusive() {
        let orbs = OrbTable::natal();
        assert_eq!(classify(8.0, &orbs).map(|c| c.0), Some(AspectKind::Conjunction));
        assert_eq!(classify(172.0, &orbs).map(|c| c.0), Some(AspectKind::Opposition));
        assert_eq!(classify(8.000001, &orbs), None);
    }
}
