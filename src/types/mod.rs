//! Shared data structures for well-trajectory design
//!
//! - `UnitSystem`: field/metric selector and its radius and arc-length constants
//! - `ProfileInput`: J, S and horizontal input records
//! - `ProfileResult`: solved records and their ordered display entries

mod profile;
mod units;

pub use profile::*;
pub use units::*;
