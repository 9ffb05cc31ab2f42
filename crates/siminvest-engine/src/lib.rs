//! SimInvest aggregation engine
//!
//! Pure computation layer of the regional investment-monitoring dashboard:
//! it turns a flat collection of regency investment records into the
//! statistics, rankings, cross-cut totals and per-view data models every
//! presentation surface consumes. No I/O, no hidden state; every aggregate
//! is recomputed on demand from a consistent snapshot of the collection.

pub mod analysis;
pub mod format;
pub mod record;
pub mod stats;
pub mod views;

pub use record::{Quarter, RegencyRecord, Sector};
pub use stats::{GlobalStats, LaborRatio, StatError};
