//! Domain services for Worklog.
//!
//! Pure functions over domain models; no I/O.

pub mod duration;
pub mod geofence;

pub use duration::estimate_duration;
pub use geofence::{distance_meters, find_enclosing_place, resolve_place, UNKNOWN_PLACE};
