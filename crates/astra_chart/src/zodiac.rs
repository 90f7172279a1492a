//! Zodiac signs, elements, and longitude normalization.

use serde::Serialize;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Degree within the sign: `lon mod 30`, in [0, 30).
pub fn sign_degree(lon_deg: f64) -> f64 {
    normalize_360(lon_deg) % 30.0
}

/// The twelve tropical zodiac signs, in fixed ecliptic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All signs in ecliptic order (Aries first).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// 0-based ecliptic index (Aries = 0 … Pisces = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign from a 0-based index, cyclic.
    pub fn from_index(index: u8) -> Self {
        ALL_SIGNS[(index % 12) as usize]
    }

    /// Sign containing an ecliptic longitude: `floor(lon / 30)`.
    pub fn from_longitude(lon_deg: f64) -> Self {
        let idx = (normalize_360(lon_deg) / 30.0).floor() as u8;
        // lon just below 360 can floor to 12 through rounding
        ALL_SIGNS[(idx.min(11)) as usize]
    }

    /// Sign `n` positions forward, cyclic.
    pub fn offset(self, n: u8) -> Self {
        Self::from_index(self.index() + n % 12)
    }

    /// Ecliptic longitude where this sign begins.
    pub const fn start_deg(self) -> f64 {
        self.index() as f64 * 30.0
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Classical element of the sign.
    pub const fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }
}

/// The four classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_from_longitude_bands() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(29.999), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_longitude(359.999), ZodiacSign::Pisces);
    }

    #[test]
    fn sign_invariant_under_wraparound() {
        for lon in [-350.0, 10.0, 370.0, 730.0] {
            assert_eq!(
                ZodiacSign::from_longitude(lon),
                ZodiacSign::from_longitude(normalize_360(lon)),
                "lon = {lon}"
            );
        }
    }

    #[test]
    fn twelve_distinct_signs() {
        for (i, sign) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(sign.index() as usize, i);
            assert_eq!(ZodiacSign::from_longitude(i as f64 * 30.0 + 15.0), *sign);
        }
    }

    #[test]
    fn sign_degree_range() {
        assert!((sign_degree(95.5) - 5.5).abs() < 1e-12);
        assert!((sign_degree(-0.5) - 29.5).abs() < 1e-12);
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(ZodiacSign::Capricorn.offset(3), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::Leo.offset(0), ZodiacSign::Leo);
    }

    #[test]
    fn elements_partition_the_zodiac() {
        let fire = ALL_SIGNS.iter().filter(|s| s.element() == Element::Fire);
        assert_eq!(fire.count(), 3);
        assert_eq!(ZodiacSign::Scorpio.element(), Element::Water);
        assert_eq!(ZodiacSign::Virgo.element(), Element::Earth);
    }
}
