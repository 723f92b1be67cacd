//! Dashboard composition: the pure render pass.
//!
//! One interaction event (bar click or dropdown change) triggers one
//! call to [`render`] against the cached raw table; the result is a
//! fresh set of chart specs for the rendering runtime. No state is
//! kept between calls.

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;
use utoipa::ToSchema;

use common::{SelectionState, StateFilter};
use compute::aggregate;

use crate::error::Result;
use crate::{bar, box_plot, line, strip};

/// The four chart specifications plus the interaction state they were
/// rendered under, re-emitted on every event.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardSpec {
    /// Per-state bar chart (selection driver)
    #[schema(value_type = Object)]
    pub bar: Value,
    /// Yearly trend line chart, gated by the selection
    #[schema(value_type = Object)]
    pub line: Value,
    /// Duration-by-cause strip plot, gated by the dropdown
    #[schema(value_type = Object)]
    pub strip: Value,
    /// Size-by-cause box plot, gated by the dropdown
    #[schema(value_type = Object)]
    pub box_plot: Value,
    /// The selection the specs were rendered under
    #[schema(value_type = Vec<String>)]
    pub selection: SelectionState,
    /// The dropdown value the specs were rendered under
    #[schema(value_type = String)]
    pub state_filter: StateFilter,
}

/// Renders the full dashboard from the annotated raw table and the
/// current interaction state. Deterministic: the same inputs always
/// produce the same specs.
#[instrument(skip(df), fields(rows = df.height()))]
pub fn render(
    df: &DataFrame,
    selection: &SelectionState,
    filter: &StateFilter,
) -> Result<DashboardSpec> {
    let states = aggregate::state_counts(df)?;
    let years = aggregate::year_state_counts(df)?;
    let durations = aggregate::with_duration(df)?;
    let scoped = aggregate::filter_state(&durations, filter)?;

    Ok(DashboardSpec {
        bar: bar::bar_chart(&states, selection),
        line: line::line_chart(&years, selection),
        strip: strip::strip_chart(&scoped, filter)?,
        box_plot: box_plot::box_plot_chart(&scoped, filter)?,
        selection: selection.clone(),
        state_filter: filter.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use polars::prelude::*;

    use model::fire;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Three CA fires (2000, 2000, 2001) and two TX fires (2000); the
    /// last TX row has no containment date and one extra row has a
    /// negative duration.
    fn fixture() -> DataFrame {
        let discovery = vec![
            Some(date(2000, 6, 1)),
            Some(date(2000, 7, 1)),
            Some(date(2001, 6, 1)),
            Some(date(2000, 8, 1)),
            Some(date(2000, 8, 2)),
            Some(date(2005, 1, 10)),
        ];
        let containment = vec![
            Some(date(2000, 6, 3)),
            Some(date(2000, 7, 1)),
            Some(date(2001, 6, 11)),
            Some(date(2000, 8, 5)),
            None,
            Some(date(2005, 1, 5)),
        ];

        DataFrame::new(vec![
            Series::new(fire::STATE.into(), &["CA", "CA", "CA", "TX", "TX", "OR"]).into(),
            Series::new(fire::FIRE_YEAR.into(), &[2000i64, 2000, 2001, 2000, 2000, 2005]).into(),
            Series::new(fire::DISCOVERY_DATE.into(), discovery).into(),
            Series::new(fire::CONTAINMENT_DATE.into(), containment).into(),
            Series::new(fire::FIRE_SIZE.into(), &[120.5f64, 0.3, 5400.0, 12.0, 7.5, 1.0]).into(),
            Series::new(
                fire::CAUSE.into(),
                &["Lightning", "Arson", "Lightning", "Debris Burning", "Equipment Use", "Arson"],
            )
            .into(),
            Series::new(
                fire::FIRE_NAME.into(),
                &["ALPHA", "BRAVO", "CHARLIE", "DELTA", "ECHO", "FOXTROT"],
            )
            .into(),
            Series::new(
                fire::COUNTY.into(),
                &["Shasta", "Kern", "Modoc", "Travis", "Bexar", "Lane"],
            )
            .into(),
        ])
        .unwrap()
    }

    #[test]
    fn test_click_ca_then_unclick() {
        let df = fixture();

        // First click: {CA}, the line chart shows CA's two points.
        let mut selection = SelectionState::new();
        selection.toggle("CA");
        let spec = render(&df, &selection, &StateFilter::All).unwrap();
        let points = spec.line["data"]["values"].as_array().unwrap().clone();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0]["year"], 2000);
        assert_eq!(points[0]["count"], 2);
        assert_eq!(points[1]["year"], 2001);
        assert_eq!(points[1]["count"], 1);

        // Second click: empty selection, the line chart shows nothing.
        selection.toggle("CA");
        let spec = render(&df, &selection, &StateFilter::All).unwrap();
        assert!(spec.line["data"]["values"].as_array().unwrap().is_empty());
        assert!(spec.selection.is_empty());
    }

    #[test]
    fn test_all_states_includes_every_surviving_row() {
        let df = fixture();
        let spec = render(&df, &SelectionState::new(), &StateFilter::All).unwrap();

        // Six raw rows, minus the missing-containment row and the
        // negative-duration row.
        let strip_rows = spec.strip["data"]["values"].as_array().unwrap();
        assert_eq!(strip_rows.len(), 4);
        let box_rows = spec.box_plot["data"]["values"].as_array().unwrap();
        assert_eq!(box_rows.len(), 4);
    }

    #[test]
    fn test_dropdown_filters_strip_and_box_only() {
        let df = fixture();
        let filter = StateFilter::Only("TX".into());
        let spec = render(&df, &SelectionState::new(), &filter).unwrap();

        let strip_rows = spec.strip["data"]["values"].as_array().unwrap();
        assert_eq!(strip_rows.len(), 1);
        assert_eq!(strip_rows[0]["FIRE_NAME"], "DELTA");

        // The bar chart ignores the dropdown entirely.
        let bar_rows = spec.bar["data"]["values"].as_array().unwrap();
        assert_eq!(bar_rows.len(), 3);

        // Titles echo the dropdown selection.
        assert_eq!(
            spec.strip["title"],
            "Distribution of Fire Durations by Cause (TX)"
        );
        assert_eq!(
            spec.box_plot["title"],
            "Distribution of Fire Sizes by Cause in TX"
        );
        assert_eq!(spec.state_filter, filter);
    }

    #[test]
    fn test_negative_duration_row_is_absent_everywhere_downstream() {
        let df = fixture();
        let spec = render(&df, &SelectionState::new(), &StateFilter::Only("OR".into())).unwrap();
        assert!(spec.strip["data"]["values"].as_array().unwrap().is_empty());
        assert!(spec.box_plot["data"]["values"].as_array().unwrap().is_empty());

        // The count views are unaffected by the duration filter.
        let bar_rows = spec.bar["data"]["values"].as_array().unwrap();
        assert!(bar_rows.iter().any(|row| row["state"] == "OR"));
    }

    #[test]
    fn test_box_plot_uses_log_scale() {
        let spec = render(&fixture(), &SelectionState::new(), &StateFilter::All).unwrap();
        assert_eq!(spec.box_plot["encoding"]["y"]["scale"]["type"], "log");
        assert_eq!(spec.box_plot["mark"]["extent"], "min-max");
        assert_eq!(spec.strip["encoding"]["x"]["scale"]["zero"], false);
    }

    #[test]
    fn test_detail_charts_are_pan_zoomable() {
        let spec = render(&fixture(), &SelectionState::new(), &StateFilter::All).unwrap();
        assert_eq!(spec.strip["params"][0]["bind"], "scales");
        assert_eq!(spec.box_plot["params"][0]["bind"], "scales");
    }
}
