//! Bar chart: total wildfires per state, the selection driver.

use serde_json::{Value, json};

use common::{SelectionState, StateCount};

use crate::theme::{self, field};

/// Builds the per-state bar chart spec.
///
/// Each datum carries a `selected` flag driving the opacity encoding:
/// full opacity when the state is selected or nothing is selected,
/// dimmed otherwise. The `state_click` point-selection param (toggle
/// semantics) is declared for the rendering runtime to wire clicks
/// back into the selection.
pub fn bar_chart(counts: &[StateCount], selection: &SelectionState) -> Value {
    let values: Vec<Value> = counts
        .iter()
        .map(|row| {
            json!({
                (field::STATE): row.state,
                (field::COUNT): row.count,
                (field::SELECTED): selection.is_empty() || selection.contains(&row.state),
            })
        })
        .collect();

    json!({
        "$schema": theme::VEGA_LITE_SCHEMA,
        "width": theme::LINKED_WIDTH,
        "height": theme::BAR_HEIGHT,
        "data": {"values": values},
        "mark": "bar",
        "params": [{
            "name": "state_click",
            "select": {"type": "point", "fields": [field::STATE], "toggle": true}
        }],
        "encoding": {
            "x": {"field": field::STATE, "type": "nominal", "sort": "ascending", "title": "US State"},
            "y": {"field": field::COUNT, "type": "quantitative", "title": "Total Wildfires"},
            "color": {"field": field::STATE, "type": "nominal", "title": "State"},
            "tooltip": [
                {"field": field::STATE, "type": "nominal"},
                {"field": field::COUNT, "type": "quantitative"}
            ],
            "opacity": {
                "condition": {"test": "datum.selected", "value": 1.0},
                "value": 0.5
            }
        }
    })
}
