//! Error types for chart computation.

use astra_ephem::EphemerisError;
use astra_time::TimeError;
use thiserror::Error;

/// Errors from natal chart assembly.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Civil time could not be parsed or localized.
    #[error("time resolution failed: {0}")]
    Time(#[from] TimeError),
    /// The ephemeris adapter failed.
    #[error("ephemeris failure: {0}")]
    Ephemeris(#[from] EphemerisError),
}
