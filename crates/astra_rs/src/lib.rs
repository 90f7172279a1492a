//! Convenience wrapper for the astra chart engine.
//!
//! Installs an ephemeris adapter as a process-wide singleton and exposes
//! high-level functions over it, removing the need to thread the adapter
//! through every call site.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use astra_rs::*;
//!
//! init(Arc::new(MyKernelAdapter::open("de442s.bsp")?))?;
//!
//! let chart = natal_chart(&my_resolver, "1990-06-15", "12:00", 41.0, 29.0)?;
//! println!("Sun in {}", chart.body(ChartBody::Sun).unwrap().sign.name());
//! ```

pub mod convenience;
pub mod error;
pub mod global;

// Primary re-exports — users should only need `use astra_rs::*`
pub use convenience::{
    angles_light, career_outlook, dominant_elements, draconic_chart, natal_chart,
    planetary_hours, synastry,
};
pub use error::AstraError;
pub use global::{init, init_with, is_initialized};

// Re-export the underlying types so callers don't need to depend on the
// lower crates directly.
pub use astra_chart::{
    Angles, Aspect, AspectKind, ChartBody, ChartError, DraconicPosition, Element, ElementBalance,
    House, NatalChart, OrbTable, PlacedBody, ZodiacSign, natal_aspects,
};
pub use astra_ephem::{
    Body, EclipticPosition, EphemerisAdapter, EphemerisError, GeoPosition, SharedEphemeris,
    SolarEvent,
};
pub use astra_forecast::{
    AspectTheme, CareerOutlook, CrossAspect, ForecastError, HarmonyCategory, HourKind,
    InterpretationLookup, Language, NoInterpretations, PlanetaryHourSlot, SynastryResult,
    TransitImpact, TransitTarget,
};
pub use astra_time::{ResolvedTime, TimeError, TimezoneResolver, resolve_civil_time};
