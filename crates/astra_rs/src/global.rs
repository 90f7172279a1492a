//! Process-wide ephemeris adapter singleton.
//!
//! The adapter is installed once and shared read-only for the lifetime of
//! the process. Reinitialization is rejected rather than silently swapping
//! the data source under live callers.

use std::sync::OnceLock;

use astra_ephem::SharedEphemeris;

use crate::error::AstraError;

static EPHEMERIS: OnceLock<SharedEphemeris> = OnceLock::new();

/// Install the global ephemeris adapter. Fails if one is already set.
pub fn init(adapter: SharedEphemeris) -> Result<(), AstraError> {
    EPHEMERIS
        .set(adapter)
        .map_err(|_| AstraError::AlreadyInitialized)
}

/// Install an adapter produced by a fallible factory.
///
/// The factory's error is logged and wrapped; on failure the global slot
/// stays empty so a corrected retry is possible.
pub fn init_with<F, E>(factory: F) -> Result<(), AstraError>
where
    F: FnOnce() -> Result<SharedEphemeris, E>,
    E: std::fmt::Display,
{
    if EPHEMERIS.get().is_some() {
        return Err(AstraError::AlreadyInitialized);
    }
    match factory() {
        Ok(adapter) => init(adapter),
        Err(err) => {
            log::error!("ephemeris initialization failed: {err}");
            Err(AstraError::InitFailed(err.to_string()))
        }
    }
}

/// Whether the global adapter has been installed.
pub fn is_initialized() -> bool {
    EPHEMERIS.get().is_some()
}

/// The global adapter, or `NotInitialized`.
pub(crate) fn ephemeris() -> Result<&'static SharedEphemeris, AstraError> {
    EPHEMERIS.get().ok_or(AstraError::NotInitialized)
}
