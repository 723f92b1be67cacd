//! DataFrame to inline Vega-Lite data conversion.

use chrono::NaiveDate;
use polars::prelude::*;
use serde_json::{Map, Value, json};

use crate::error::{ChartError, Result};

/// Converts the named columns of a frame into Vega-Lite `data.values`
/// rows (one JSON object per row, keyed by column name).
pub fn records(df: &DataFrame, columns: &[&str]) -> Result<Vec<Value>> {
    let selected = columns
        .iter()
        .map(|name| {
            df.column(name)
                .map_err(|_| ChartError::Column(format!("missing column {name}")))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let mut row = Map::new();
        for (name, column) in columns.iter().zip(&selected) {
            row.insert((*name).to_string(), any_value_to_json(column.get(i)?));
        }
        rows.push(Value::Object(row));
    }
    Ok(rows)
}

fn any_value_to_json(value: AnyValue) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(v) => json!(v),
        AnyValue::String(v) => json!(v),
        AnyValue::StringOwned(v) => json!(v.as_str()),
        AnyValue::Int32(v) => json!(v),
        AnyValue::Int64(v) => json!(v),
        AnyValue::UInt32(v) => json!(v),
        AnyValue::UInt64(v) => json!(v),
        AnyValue::Float32(v) => float_to_json(f64::from(v)),
        AnyValue::Float64(v) => float_to_json(v),
        AnyValue::Date(days) => json!(date_from_epoch_days(days).to_string()),
        other => json!(other.to_string()),
    }
}

fn float_to_json(value: f64) -> Value {
    // JSON has no NaN/Inf; emit null so Vega-Lite treats it as missing.
    serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number)
}

fn date_from_epoch_days(days: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + chrono::Duration::days(i64::from(days))
}
