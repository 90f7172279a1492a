//! Natal chart computation: zodiac mapping, chart angles, whole-sign
//! houses, lunar node and draconic transform, aspect detection, and the
//! Sun-sign cusp heuristic.
//!
//! All longitudes are tropical ecliptic-of-date degrees in [0, 360).
//! Planetary positions come from an external [`astra_ephem`] adapter;
//! this crate only derives from them.

pub mod angles;
pub mod aspects;
pub mod cusp;
pub mod dominants;
pub mod error;
pub mod houses;
pub mod natal;
pub mod nodes;
pub mod zodiac;

pub use angles::{Angles, OBLIQUITY_DEG, angles_from_lst, compute_angles, local_sidereal_time_deg};
pub use aspects::{Aspect, AspectKind, OrbTable, angular_separation_deg, classify, natal_aspects};
pub use cusp::{CuspCorrection, apply_sun_cusp_correction, traditional_sun_sign};
pub use dominants::{ElementBalance, element_balance};
pub use error::ChartError;
pub use houses::{House, house_of, whole_sign_houses};
pub use natal::{ChartBody, NatalChart, PlacedBody, TRACKED_BODIES, compute_natal_chart};
pub use nodes::{DraconicPosition, draconic_positions, mean_node_deg};
pub use zodiac::{ALL_SIGNS, Element, ZodiacSign, normalize_360, sign_degree};
