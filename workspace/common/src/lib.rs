//! Common transport-layer types shared between the compute pipeline,
//! the chart builders, and the HTTP shell. These structs mirror the
//! shapes the rendering runtime consumes so every layer agrees on them
//! without duplicating definitions.

mod counts;
mod selection;

pub use counts::{StateCount, YearStateCount};
pub use selection::{SelectionState, StateFilter, ALL_STATES};
