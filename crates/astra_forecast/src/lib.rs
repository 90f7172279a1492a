//! Derived forecasting calculations on top of chart data: synastry
//! (cross-chart compatibility scoring), planetary hours, and the
//! transit-driven career outlook.
//!
//! All entry points are synchronous pure functions of their inputs plus
//! the shared ephemeris snapshot.

pub mod error;
pub mod hours;
pub mod hours_types;
pub mod synastry;
pub mod synastry_types;
pub mod transit;

pub use error::ForecastError;
pub use hours::planetary_hours;
pub use hours_types::{
    CHALDEAN_ORDER, DISPLAY_UTC_OFFSET_HOURS, HourKind, PlanetaryHourSlot, weekday_ruler,
};
pub use synastry::compute_synastry;
pub use synastry_types::{
    AspectTheme, CrossAspect, HarmonyCategory, InterpretationLookup, Language, NoInterpretations,
    SynastryResult,
};
pub use transit::{CareerOutlook, TransitImpact, TransitTarget, career_outlook};
