//! Unified error type for the facade.

use thiserror::Error;

use astra_chart::ChartError;
use astra_forecast::ForecastError;
use astra_time::TimeError;

/// Errors surfaced by the high-level convenience functions.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AstraError {
    /// [`init`](crate::init) has not been called yet.
    #[error("ephemeris adapter not initialized; call init() first")]
    NotInitialized,
    /// [`init`](crate::init) was called a second time.
    #[error("ephemeris adapter already initialized")]
    AlreadyInitialized,
    /// The adapter factory failed during initialization.
    #[error("ephemeris initialization failed: {0}")]
    InitFailed(String),
    /// Chart computation failed.
    #[error(transparent)]
    Chart(#[from] ChartError),
    /// Forecast computation failed.
    #[error(transparent)]
    Forecast(#[from] ForecastError),
    /// Time resolution failed.
    #[error(transparent)]
    Time(#[from] TimeError),
}
