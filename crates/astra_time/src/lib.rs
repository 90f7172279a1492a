//! Civil-time resolution and time-scale utilities.
//!
//! This crate turns a civil birth (or query) date/time plus geographic
//! coordinates into a precise UTC instant, using historical political
//! timezone rules, and provides the Julian-date helpers the rest of the
//! engine needs for sidereal and mean-element computations.
//!
//! The coordinate→timezone mapping itself is an external collaborator,
//! consumed through the [`TimezoneResolver`] trait.

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{ResolvedTime, TimezoneResolver, resolve_civil_time};
pub use error::TimeError;
pub use julian::{J2000_JD, jd_tt, jd_utc, julian_centuries_tt};
