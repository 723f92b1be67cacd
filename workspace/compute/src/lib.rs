//! Data pipeline for the wildfire dashboard: dataset loading, region
//! annotation, and the derived aggregate views consumed by the chart
//! builders.
//!
//! Everything here is a deterministic function of the input table. The
//! only process-wide state is the loader's memoized raw table.

pub mod aggregate;
pub mod error;
pub mod loader;
pub mod region;

pub use error::{ComputeError, Result};
