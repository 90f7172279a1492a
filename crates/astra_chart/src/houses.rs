//! Whole-sign house system.
//!
//! House 1 is the ascendant's entire sign; each subsequent house is the
//! next sign in ecliptic order. No intermediate cusps exist in this
//! system — a body's house follows from its sign alone.

use serde::Serialize;

use crate::zodiac::ZodiacSign;

/// One of the twelve whole-sign houses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct House {
    /// House number, 1-12.
    pub index: u8,
    /// The sign occupying the house.
    pub sign: ZodiacSign,
    /// Ecliptic longitude where the house (= its sign) begins.
    pub cusp_deg: f64,
}

/// The twelve whole-sign houses for a given ascendant sign.
pub fn whole_sign_houses(ascendant_sign: ZodiacSign) -> [House; 12] {
    std::array::from_fn(|i| {
        let sign = ascendant_sign.offset(i as u8);
        House {
            index: i as u8 + 1,
            sign,
            cusp_deg: sign.start_deg(),
        }
    })
}

/// Whole-sign house of a body: cyclic sign distance from the ascendant
/// sign, plus one. Always in [1, 12].
pub fn house_of(body_sign: ZodiacSign, ascendant_sign: ZodiacSign) -> u8 {
    let diff = (body_sign.index() as i8 - ascendant_sign.index() as i8).rem_euclid(12);
    diff as u8 + 1
}
