//! Normalization model: turn descriptor data points into `{x, y}` records.

pub mod coerce;

pub use coerce::coerce_number;

use crate::spec::DataPoint;
use serde::Serialize;
use serde_json::Value;

/// Canonical, renderer-agnostic data record.
///
/// `y` is numeric whenever coercion succeeds, otherwise the original value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub x: Value,
    pub y: Value,
}

/// Build canonical records. Performs, per element and in order:
/// - pairs: x = first entry, y = coerced second entry
/// - objects: x/y by axis key, falling back to first/second declared field
/// - anything else: x = null, y = coerced value
///
/// Output length always equals input length.
pub fn normalize(data: &[DataPoint], x_axis: Option<&str>, y_axis: Option<&str>) -> Vec<Record> {
    data.iter()
        .map(|point| normalize_point(point, x_axis, y_axis))
        .collect()
}

/// Same as [`normalize`] for untyped input. A non-array value yields no records.
pub fn normalize_value(data: &Value, x_axis: Option<&str>, y_axis: Option<&str>) -> Vec<Record> {
    let Value::Array(items) = data else {
        return Vec::new();
    };
    let points: Vec<DataPoint> = items.iter().cloned().map(DataPoint::from).collect();
    normalize(&points, x_axis, y_axis)
}

fn normalize_point(point: &DataPoint, x_axis: Option<&str>, y_axis: Option<&str>) -> Record {
    match point {
        DataPoint::Sequence(_) => Record {
            x: point.nth(0).cloned().unwrap_or(Value::Null),
            y: point.nth(1).map(coerce_number).unwrap_or(Value::Null),
        },
        DataPoint::Fields(_) => {
            let x = select(point, x_axis, 0).cloned().unwrap_or(Value::Null);
            let y = select(point, y_axis, 1).map(coerce_number).unwrap_or(Value::Null);
            Record { x, y }
        }
        DataPoint::Scalar(value) => Record {
            x: Value::Null,
            y: coerce_number(value),
        },
    }
}

/// Named field if present (a present null counts), else the positional field.
fn select<'a>(point: &'a DataPoint, axis: Option<&str>, fallback: usize) -> Option<&'a Value> {
    axis.and_then(|name| point.field(name))
        .or_else(|| point.nth(fallback))
}
