//! Line chart: yearly trends for the bar-selected states.

use serde_json::{Value, json};

use common::{SelectionState, YearStateCount};

use crate::theme::{self, field};

/// Builds the yearly-trend line chart spec, one line per state.
///
/// The selection gates the data: an empty selection yields an empty
/// chart (the "empty: none" contract), a non-empty one only the rows
/// whose state it admits.
pub fn line_chart(counts: &[YearStateCount], selection: &SelectionState) -> Value {
    let values: Vec<Value> = counts
        .iter()
        .filter(|row| selection.admits(&row.state))
        .map(|row| {
            json!({
                (field::YEAR): row.year,
                (field::STATE): row.state,
                (field::COUNT): row.count,
            })
        })
        .collect();

    json!({
        "$schema": theme::VEGA_LITE_SCHEMA,
        "width": theme::LINKED_WIDTH,
        "height": theme::LINE_HEIGHT,
        "title": "Wildfires Through 1992-2015",
        "data": {"values": values},
        "mark": {"type": "line", "point": true},
        "encoding": {
            "x": {"field": field::YEAR, "type": "ordinal", "title": "Year"},
            "y": {"field": field::COUNT, "type": "quantitative", "title": "Wildfires"},
            "color": {"field": field::STATE, "type": "nominal", "title": "State"},
            "tooltip": [
                {"field": field::YEAR, "type": "ordinal"},
                {"field": field::STATE, "type": "nominal"},
                {"field": field::COUNT, "type": "quantitative"}
            ]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> Vec<YearStateCount> {
        vec![
            YearStateCount { year: 2000, state: "CA".into(), count: 2 },
            YearStateCount { year: 2001, state: "CA".into(), count: 1 },
            YearStateCount { year: 2000, state: "TX".into(), count: 2 },
        ]
    }

    #[test]
    fn test_empty_selection_shows_no_rows() {
        let spec = line_chart(&counts(), &SelectionState::new());
        assert!(spec["data"]["values"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_singleton_selection_shows_only_that_state() {
        let selection: SelectionState = ["CA"].into_iter().collect();
        let spec = line_chart(&counts(), &selection);
        let values = spec["data"]["values"].as_array().unwrap();
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|v| v["state"] == "CA"));
    }

    #[test]
    fn test_encoding_shape() {
        let spec = line_chart(&counts(), &SelectionState::new());
        assert_eq!(spec["mark"]["point"], true);
        assert_eq!(spec["encoding"]["x"]["type"], "ordinal");
        assert_eq!(spec["encoding"]["color"]["field"], "state");
    }
}
