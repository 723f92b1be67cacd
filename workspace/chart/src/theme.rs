//! Static chart configuration: schema URL, dimensions, and the field
//! names of the aggregate views. Loaded once, never recomputed.

/// Vega-Lite schema declared by every spec.
pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Field names of the aggregate (bar/line) data rows.
pub mod field {
    pub const STATE: &str = "state";
    pub const YEAR: &str = "year";
    pub const COUNT: &str = "count";
    pub const SELECTED: &str = "selected";
}

/// Width shared by the linked bar and line charts.
pub const LINKED_WIDTH: u32 = 800;
pub const BAR_HEIGHT: u32 = 400;
pub const LINE_HEIGHT: u32 = 300;

/// Dimensions of the dropdown-filtered strip and box charts.
pub const DETAIL_WIDTH: u32 = 900;
pub const DETAIL_HEIGHT: u32 = 400;
