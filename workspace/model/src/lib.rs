//! Static data model for the wildfire dashboard: dataset column names
//! and the U.S. Census sub-region lookup table.

pub mod fire;
pub mod region;

pub use region::Region;
