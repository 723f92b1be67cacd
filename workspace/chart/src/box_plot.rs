//! Box plot: fire size by recorded cause, log scale.

use polars::prelude::DataFrame;
use serde_json::{Value, json};

use common::StateFilter;
use model::fire;

use crate::data::records;
use crate::error::Result;
use crate::theme;

/// Builds the size-by-cause box plot over the dropdown-filtered
/// duration view. Acres burned span several orders of magnitude, so
/// the y axis is logarithmic; whiskers cover the full min-max range.
pub fn box_plot_chart(df: &DataFrame, filter: &StateFilter) -> Result<Value> {
    let values = records(df, &[fire::CAUSE, fire::FIRE_SIZE])?;

    Ok(json!({
        "$schema": theme::VEGA_LITE_SCHEMA,
        "width": theme::DETAIL_WIDTH,
        "height": theme::DETAIL_HEIGHT,
        "title": format!("Distribution of Fire Sizes by Cause in {}", filter.label()),
        "data": {"values": values},
        "mark": {"type": "boxplot", "extent": "min-max"},
        "params": [{
            "name": "grid",
            "select": "interval",
            "bind": "scales"
        }],
        "encoding": {
            "x": {
                "field": fire::CAUSE,
                "type": "nominal",
                "title": "Cause",
                "sort": "-y",
                "axis": {"labelAngle": -45}
            },
            "y": {
                "field": fire::FIRE_SIZE,
                "type": "quantitative",
                "title": "Acres Burned",
                "scale": {"type": "log"}
            },
            "color": {"field": fire::CAUSE, "type": "nominal", "legend": null}
        }
    }))
}
