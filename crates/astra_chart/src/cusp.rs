//! Sun-sign cusp correction heuristic.
//!
//! Near sign boundaries the ephemeris-exact Sun sign can disagree with
//! the traditional calendar cutover dates people expect. When they
//! disagree AND the Sun sits within 2 degrees of a boundary, the
//! traditional sign wins and the in-sign degree is snapped next to the
//! boundary. A deliberate, documented exception to strict astronomical
//! accuracy; applies to the Sun only, keyed on the civil calendar date.

use crate::zodiac::ZodiacSign;

/// Traditional cutover table: for each month, the day the new sign
/// begins, the sign from that day on, and the sign before it.
const TRADITIONAL_STARTS: [(u32, u32, ZodiacSign, ZodiacSign); 12] = [
    (1, 20, ZodiacSign::Aquarius, ZodiacSign::Capricorn),
    (2, 19, ZodiacSign::Pisces, ZodiacSign::Aquarius),
    (3, 21, ZodiacSign::Aries, ZodiacSign::Pisces),
    (4, 20, ZodiacSign::Taurus, ZodiacSign::Aries),
    (5, 21, ZodiacSign::Gemini, ZodiacSign::Taurus),
    (6, 21, ZodiacSign::Cancer, ZodiacSign::Gemini),
    (7, 23, ZodiacSign::Leo, ZodiacSign::Cancer),
    (8, 23, ZodiacSign::Virgo, ZodiacSign::Leo),
    (9, 23, ZodiacSign::Libra, ZodiacSign::Virgo),
    (10, 23, ZodiacSign::Scorpio, ZodiacSign::Libra),
    (11, 22, ZodiacSign::Sagittarius, ZodiacSign::Scorpio),
    (12, 22, ZodiacSign::Capricorn, ZodiacSign::Sagittarius),
];

/// Cusp-proximity threshold in degrees from either sign boundary.
const CUSP_THRESHOLD_DEG: f64 = 2.0;

/// Sun sign per the traditional calendar cutover dates.
pub fn traditional_sun_sign(month: u32, day: u32) -> ZodiacSign {
    let idx = month.clamp(1, 12) as usize - 1;
    let (_, cutoff, from_cutoff, before) = TRADITIONAL_STARTS[idx];
    if day >= cutoff { from_cutoff } else { before }
}

/// Outcome of the cusp correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuspCorrection {
    pub sign: ZodiacSign,
    pub sign_deg: f64,
    /// True when the traditional sign overrode the computed one.
    pub overridden: bool,
}

/// Apply the Sun cusp correction.
///
/// If the computed sign disagrees with the traditional sign for the civil
/// date and the Sun is within [`CUSP_THRESHOLD_DEG`] of a boundary
/// (degree < 2 or > 28), the traditional sign is enforced and the degree
/// snapped to 29.9 (wrapped back) or 0.1 (wrapped forward).
pub fn apply_sun_cusp_correction(
    computed_sign: ZodiacSign,
    sign_deg: f64,
    month: u32,
    day: u32,
) -> CuspCorrection {
    let traditional = traditional_sun_sign(month, day);
    if computed_sign != traditional {
        let near_start = sign_deg < CUSP_THRESHOLD_DEG;
        let near_end = sign_deg > 30.0 - CUSP_THRESHOLD_DEG;
        if near_start || near_end {
            let snapped = if near_start { 29.9 } else { 0.1 };
            return CuspCorrection {
                sign: traditional,
                sign_deg: snapped,
                overridden: true,
            };
        }
    }
    CuspCorrection {
        sign: computed_sign,
        sign_deg,
        overridden: false,
    }
}
