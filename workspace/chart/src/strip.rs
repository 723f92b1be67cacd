//! Strip plot: fire duration by recorded cause.

use polars::prelude::DataFrame;
use serde_json::{Value, json};

use common::StateFilter;
use model::fire;

use crate::data::records;
use crate::error::Result;
use crate::theme;

/// Builds the duration-by-cause strip plot over the dropdown-filtered
/// duration view. Expects a frame that already carries
/// `DURATION_DAYS` and has passed the data-quality filters.
pub fn strip_chart(df: &DataFrame, filter: &StateFilter) -> Result<Value> {
    let values = records(
        df,
        &[
            fire::CAUSE,
            fire::DURATION_DAYS,
            fire::FIRE_NAME,
            fire::COUNTY,
            fire::FIRE_YEAR,
            fire::FIRE_SIZE,
        ],
    )?;

    Ok(json!({
        "$schema": theme::VEGA_LITE_SCHEMA,
        "width": theme::DETAIL_WIDTH,
        "height": theme::DETAIL_HEIGHT,
        "title": format!("Distribution of Fire Durations by Cause ({})", filter.label()),
        "data": {"values": values},
        "mark": {"type": "circle", "size": 40, "opacity": 0.5},
        "params": [{
            "name": "grid",
            "select": "interval",
            "bind": "scales"
        }],
        "encoding": {
            "y": {"field": fire::CAUSE, "type": "nominal", "title": "Cause", "sort": "-x"},
            "x": {
                "field": fire::DURATION_DAYS,
                "type": "quantitative",
                "title": "Duration (Days)",
                "scale": {"zero": false}
            },
            "color": {"field": fire::CAUSE, "type": "nominal", "legend": null},
            "tooltip": [
                {"field": fire::FIRE_NAME, "type": "nominal"},
                {"field": fire::COUNTY, "type": "nominal"},
                {"field": fire::FIRE_YEAR, "type": "quantitative"},
                {"field": fire::FIRE_SIZE, "type": "quantitative"},
                {"field": fire::DURATION_DAYS, "type": "quantitative"}
            ]
        }
    }))
}
