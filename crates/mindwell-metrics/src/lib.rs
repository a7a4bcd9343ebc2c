//! mindwell-metrics
//!
//! Derived wellness metrics. Pure functions over snapshots of a user's
//! logs. Nothing here is ever persisted; callers recompute on every read.
//!
//! "Now" is always an argument (`&jiff::Zoned`), which fixes both today's
//! date and the time zone used to bucket timestamps into calendar days.

pub mod awards;
pub mod calendar;
pub mod habits;
pub mod heatmap;
pub mod mood;
pub mod progress;
pub mod score;
pub mod stress;
pub mod streak;
