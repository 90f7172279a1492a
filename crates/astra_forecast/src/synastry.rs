//! Cross-chart compatibility scoring.
//!
//! Every cross-pair (body from chart A x body from chart B) is classified
//! with the synastry orb table; matched aspects accumulate weighted
//! points onto a base score of 50, with a 1.8x boost for positive aspects
//! between the designated romance pairs. The final score is clamped to
//! [10, 99] and truncated to an integer.

use astra_chart::{AspectKind, ChartBody, OrbTable, PlacedBody, angular_separation_deg, classify};

use crate::synastry_types::{
    AspectTheme, CrossAspect, HarmonyCategory, InterpretationLookup, Language, SynastryResult,
};

/// Base score before any aspects are applied.
const BASE_SCORE: f64 = 50.0;

/// Multiplier for positive aspects between romance pairs.
const ROMANCE_BOOST: f64 = 1.8;

/// Per-aspect score contribution.
const fn aspect_weight(kind: AspectKind) -> f64 {
    match kind {
        AspectKind::Conjunction => 10.0,
        AspectKind::Trine => 8.0,
        AspectKind::Sextile => 5.0,
        AspectKind::Opposition => -8.0,
        AspectKind::Square => -10.0,
    }
}

/// The designated romance pairs, unordered.
fn is_romance_pair(a: ChartBody, b: ChartBody) -> bool {
    use ChartBody::{Mars, Moon, Sun, Venus};
    matches!(
        (a, b),
        (Sun, Moon)
            | (Moon, Sun)
            | (Venus, Mars)
            | (Mars, Venus)
            | (Moon, Moon)
            | (Venus, Venus)
            | (Venus, Sun)
            | (Sun, Venus)
    )
}

/// Theme assignment via a sequential overwrite scan: each matching rule
/// replaces the previous one, so Moon involvement effectively ranks
/// highest.
fn theme_for(a: ChartBody, b: ChartBody, kind: AspectKind) -> AspectTheme {
    use ChartBody::{Jupiter, Mars, Mercury, Moon, Saturn, Venus};
    let involves = |body: ChartBody| a == body || b == body;

    let mut theme = AspectTheme::General;
    if involves(Venus) || involves(Mars) {
        theme = AspectTheme::Attraction;
    }
    if involves(Mercury) {
        theme = AspectTheme::Communication;
    }
    if involves(Saturn) && matches!(kind, AspectKind::Square | AspectKind::Opposition) {
        theme = AspectTheme::KarmicLesson;
    }
    if involves(Jupiter) && matches!(kind, AspectKind::Trine | AspectKind::Conjunction) {
        theme = AspectTheme::Growth;
    }
    if involves(Moon) {
        theme = AspectTheme::Emotional;
    }
    theme
}

/// Interpretation text: specific entry first (keyed on the alphabetically
/// sorted pair), then the generic fallback.
fn interpretation_for(
    lookup: &dyn InterpretationLookup,
    a: ChartBody,
    b: ChartBody,
    kind: AspectKind,
    language: Language,
) -> String {
    let (sorted_a, sorted_b) = if a.name() <= b.name() { (a, b) } else { (b, a) };
    lookup
        .lookup(sorted_a, sorted_b, kind, language)
        .unwrap_or_else(|| lookup.generic(a, b, kind, language))
}

/// Score the compatibility of two independently computed body sets.
pub fn compute_synastry(
    first_chart: &[PlacedBody],
    second_chart: &[PlacedBody],
    lookup: &dyn InterpretationLookup,
    language: Language,
) -> SynastryResult {
    let orbs = OrbTable::synastry();
    let mut score = BASE_SCORE;
    let mut aspects = Vec::new();

    for p1 in first_chart {
        for p2 in second_chart {
            let sep = angular_separation_deg(p1.lon_deg, p2.lon_deg);
            let Some((kind, orb_deg)) = classify(sep, &orbs) else {
                continue;
            };

            let is_romance = is_romance_pair(p1.body, p2.body);
            let mut weight = aspect_weight(kind);
            if is_romance && weight > 0.0 {
                weight *= ROMANCE_BOOST;
            }
            score += weight;

            aspects.push(CrossAspect {
                first: p1.body,
                second: p2.body,
                kind,
                orb_deg,
                category: HarmonyCategory::of(kind),
                theme: theme_for(p1.body, p2.body, kind),
                is_romance,
                interpretation: interpretation_for(lookup, p1.body, p2.body, kind, language),
            });
        }
    }

    SynastryResult {
        score: score.clamp(10.0, 99.0) as i32,
        aspects,
    }
}
