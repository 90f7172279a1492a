//! High-level functions over the global ephemeris adapter.
//!
//! Pure transforms (aspect search, synastry, draconic conversion, element
//! balance) are re-exported from the underlying crates unchanged; only the
//! operations that need ephemeris data go through the singleton.

use chrono::{DateTime, Utc};

use astra_chart::{
    Angles, DraconicPosition, ElementBalance, NatalChart, compute_angles, draconic_positions,
    element_balance,
};
use astra_ephem::GeoPosition;
use astra_forecast::{CareerOutlook, Language, PlanetaryHourSlot, SynastryResult};
use astra_forecast::InterpretationLookup;
use astra_time::TimezoneResolver;

use crate::error::AstraError;
use crate::global::ephemeris;

/// Compute a full natal chart from civil birth data.
pub fn natal_chart(
    resolver: &dyn TimezoneResolver,
    date_str: &str,
    time_str: &str,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<NatalChart, AstraError> {
    let adapter = ephemeris()?;
    Ok(astra_chart::compute_natal_chart(
        adapter.as_ref(),
        resolver,
        date_str,
        time_str,
        latitude_deg,
        longitude_deg,
    )?)
}

/// Ascendant and Midheaven only, for a known UTC instant.
///
/// Cheaper than a full chart when only the angles are needed, e.g. when
/// scanning candidate birth times.
pub fn angles_light(
    instant: DateTime<Utc>,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<Angles, AstraError> {
    let adapter = ephemeris()?;
    Ok(compute_angles(
        adapter.as_ref(),
        instant,
        GeoPosition::new(latitude_deg, longitude_deg),
    )?)
}

/// Cross-chart compatibility of two natal charts.
pub fn synastry(
    first: &NatalChart,
    second: &NatalChart,
    lookup: &dyn InterpretationLookup,
    language: Language,
) -> SynastryResult {
    astra_forecast::compute_synastry(&first.bodies, &second.bodies, lookup, language)
}

/// The 24 planetary hours of a date at a location.
pub fn planetary_hours(
    date_str: &str,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<Vec<PlanetaryHourSlot>, AstraError> {
    let adapter = ephemeris()?;
    Ok(astra_forecast::planetary_hours(
        adapter.as_ref(),
        date_str,
        GeoPosition::new(latitude_deg, longitude_deg),
    )?)
}

/// Career outlook for a chart at the current instant.
pub fn career_outlook(chart: &NatalChart, language: Language) -> Result<CareerOutlook, AstraError> {
    let adapter = ephemeris()?;
    Ok(astra_forecast::career_outlook(
        adapter.as_ref(),
        chart,
        language,
    )?)
}

/// Draconic (node-relative) longitudes of a chart's bodies.
pub fn draconic_chart(chart: &NatalChart) -> Vec<DraconicPosition> {
    draconic_positions(&chart.bodies, chart.north_node_deg)
}

/// Weighted element distribution of a chart, ascendant included.
pub fn dominant_elements(chart: &NatalChart) -> ElementBalance {
    let ascendant = (!chart.angles.fallback).then_some(chart.angles.ascendant_sign);
    element_balance(&chart.bodies, ascendant)
}
