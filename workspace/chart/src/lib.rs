//! Chart specification builder.
//!
//! Produces the four declarative Vega-Lite specs of the dashboard
//! (bar, line, strip, box plot) as `serde_json::Value` documents with
//! the data values inlined. Pixel rendering and interaction wiring are
//! the rendering runtime's job; nothing here draws.

pub mod bar;
pub mod box_plot;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod line;
pub mod strip;
pub mod theme;

pub use dashboard::{DashboardSpec, render};
pub use error::{ChartError, Result};
