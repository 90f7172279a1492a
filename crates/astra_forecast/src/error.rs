//! Error types for forecast calculations.

use astra_chart::ChartError;
use astra_ephem::EphemerisError;
use astra_time::TimeError;
use thiserror::Error;

/// Errors from synastry, planetary hours, and transit analysis.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ForecastError {
    /// Underlying chart computation failed.
    #[error("chart computation failed: {0}")]
    Chart(#[from] ChartError),
    /// The ephemeris adapter failed.
    #[error("ephemeris failure: {0}")]
    Ephemeris(#[from] EphemerisError),
    /// Date input could not be parsed.
    #[error("time resolution failed: {0}")]
    Time(#[from] TimeError),
}
