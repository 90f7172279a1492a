//! Error types for civil-time resolution.

use thiserror::Error;

/// Errors from parsing and localizing civil date/time input.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Malformed date or time string. Fails fast; this crate never guesses
    /// a calendar date from bad input.
    #[error("malformed {field} input {value:?}: {source}")]
    Parse {
        /// Which field failed ("date" or "time").
        field: &'static str,
        /// The offending input, verbatim.
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// The local time does not exist in the zone even after the one-hour
    /// spring-forward adjustment. Not expected with real tz data.
    #[error("local time {value} cannot be resolved in zone {zone}")]
    UnresolvableLocalTime { value: String, zone: String },
}
