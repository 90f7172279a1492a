//! Error types for the ephemeris adapter boundary.

use thiserror::Error;

/// Errors reported by an ephemeris data source.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The shared data source failed to load or is not initialized.
    /// Every dependent calculation fails with this kind rather than
    /// crashing the process.
    #[error("ephemeris data unavailable: {0}")]
    Unavailable(String),
    /// A single body's position could not be evaluated.
    #[error("failed to compute {body} position: {reason}")]
    Computation {
        body: &'static str,
        reason: String,
    },
    /// Sidereal time could not be evaluated for the instant.
    #[error("sidereal time unavailable: {0}")]
    SiderealTime(String),
}
