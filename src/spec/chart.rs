//! Chart descriptor as embedded in assistant answers.
//!
//! JSON shape:
//! {
//!   "type": "chart",             // required marker
//!   "chartType": "bar",          // free-form; unknown values pass through
//!   "data": [["A", 1], ...],     // pairs or objects, order preserved
//!   "xAxis": "month",            // optional field selectors
//!   "yAxis": "value",
//!   "title": "Revenue"           // optional, passthrough
//! }
//!
//! Only the marker is strict. Descriptive fields fill the typed slots when
//! they are strings; any other value is kept verbatim in `extra` under its
//! wire name, so serializing a descriptor gives back what was read. A
//! non-array `data` reads as empty.

use crate::model::{self, Record};
use crate::spec::{ChartKind, DataPoint};

use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// The `type` marker. Only `"chart"` deserializes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    #[default]
    Chart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub marker: Marker,

    #[serde(rename = "chartType", skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,

    pub data: Vec<DataPoint>,

    #[serde(rename = "xAxis", skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<String>,

    #[serde(rename = "yAxis", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Unknown fields, plus known ones whose value is not a string, in
    /// declaration order.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for ChartSpec {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut marker = None;
        let mut spec = ChartSpec {
            marker: Marker::Chart,
            chart_type: None,
            data: Vec::new(),
            x_axis: None,
            y_axis: None,
            title: None,
            extra: Map::new(),
        };

        for (key, value) in Map::<String, Value>::deserialize(deserializer)? {
            match key.as_str() {
                "type" => marker = Some(Marker::deserialize(value).map_err(D::Error::custom)?),
                "chartType" => fill_text(&mut spec.chart_type, key, value, &mut spec.extra),
                "xAxis" => fill_text(&mut spec.x_axis, key, value, &mut spec.extra),
                "yAxis" => fill_text(&mut spec.y_axis, key, value, &mut spec.extra),
                "title" => fill_text(&mut spec.title, key, value, &mut spec.extra),
                "data" => {
                    if let Value::Array(items) = value {
                        spec.data = items.into_iter().map(DataPoint::from).collect();
                    }
                }
                _ => {
                    spec.extra.insert(key, value);
                }
            }
        }

        spec.marker = marker.ok_or_else(|| D::Error::missing_field("type"))?;
        Ok(spec)
    }
}

fn fill_text(slot: &mut Option<String>, key: String, value: Value, extra: &mut Map<String, Value>) {
    match value {
        Value::String(s) => *slot = Some(s),
        other => {
            extra.insert(key, other);
        }
    }
}

impl ChartSpec {
    /// Read a parsed JSON value as a descriptor. Fails only on a missing or
    /// wrong `type` marker, or a non-object value.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Text of a descriptive field: the string slot, or a number/bool kept
    /// verbatim in `extra`.
    fn text_field<'a>(&'a self, typed: &'a Option<String>, key: &str) -> Option<Cow<'a, str>> {
        if let Some(s) = typed {
            return Some(Cow::Borrowed(s.as_str()));
        }
        match self.extra.get(key)? {
            v @ (Value::Number(_) | Value::Bool(_)) => Some(Cow::Owned(v.to_string())),
            _ => None,
        }
    }

    pub fn kind(&self) -> ChartKind {
        match (&self.chart_type, self.extra.get("chartType")) {
            (None, Some(raw)) => ChartKind::Unsupported(raw.to_string()),
            (typed, _) => ChartKind::from_chart_type(typed.as_deref()),
        }
    }

    /// Canonical `{x, y}` records for this descriptor's data.
    pub fn records(&self) -> Vec<Record> {
        let x_axis = self.text_field(&self.x_axis, "xAxis");
        let y_axis = self.text_field(&self.y_axis, "yAxis");
        model::normalize(&self.data, x_axis.as_deref(), y_axis.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn reads_full_descriptor() {
        let spec = ChartSpec::from_value(json!({
            "type": "chart",
            "chartType": "bar",
            "data": [["A", 1], ["B", 2]],
            "xAxis": "x",
            "yAxis": "y",
            "title": "Totals"
        }))
        .unwrap();

        assert_eq!(spec.chart_type.as_deref(), Some("bar"));
        assert_eq!(spec.x_axis.as_deref(), Some("x"));
        assert_eq!(spec.y_axis.as_deref(), Some("y"));
        assert_eq!(spec.title.as_deref(), Some("Totals"));
        assert_eq!(
            spec.data,
            vec![
                DataPoint::Sequence(vec![json!("A"), json!(1)]),
                DataPoint::Sequence(vec![json!("B"), json!(2)]),
            ]
        );
        assert!(spec.extra.is_empty());
    }

    #[test]
    fn rejects_wrong_or_missing_marker() {
        assert!(ChartSpec::from_value(json!({"type": "table", "data": []})).is_err());
        assert!(ChartSpec::from_value(json!({"chartType": "bar"})).is_err());
        assert!(ChartSpec::from_value(json!([1, 2])).is_err());
    }

    #[test]
    fn non_string_fields_are_kept_verbatim() {
        let spec = ChartSpec::from_value(json!({
            "type": "chart",
            "chartType": {"v": "bar"},
            "title": ["a", "b"],
            "data": "not an array",
            "xAxis": null,
            "yAxis": true,
            "colors": ["#fff"],
            "stacked": false
        }))
        .unwrap();

        assert_eq!(spec.chart_type, None);
        assert_eq!(spec.title, None);
        assert!(spec.data.is_empty());
        assert_eq!(spec.x_axis, None);
        assert_eq!(spec.y_axis, None);
        let keys: Vec<&str> = spec.extra.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["chartType", "title", "xAxis", "yAxis", "colors", "stacked"]
        );
        assert_eq!(spec.kind(), ChartKind::Unsupported(r#"{"v":"bar"}"#.to_string()));

        let out = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            out,
            json!({
                "type": "chart",
                "chartType": {"v": "bar"},
                "title": ["a", "b"],
                "data": [],
                "xAxis": null,
                "yAxis": true,
                "colors": ["#fff"],
                "stacked": false
            })
        );
    }

    #[test]
    fn numeric_axis_names_still_select_fields() {
        let spec = ChartSpec::from_value(json!({
            "type": "chart",
            "data": [{"1": "first", "2": "$5", "3": "c"}],
            "xAxis": 3,
            "yAxis": 2
        }))
        .unwrap();

        assert_eq!(spec.extra.get("xAxis"), Some(&json!(3)));
        assert_eq!(
            spec.records(),
            vec![Record {
                x: json!("c"),
                y: json!(5)
            }]
        );
    }

    #[test]
    fn serializes_back_with_wire_names() {
        let spec = ChartSpec::from_value(json!({
            "type": "chart",
            "chartType": "scatter",
            "data": [{"b": 1, "a": 2}],
            "xAxis": "b"
        }))
        .unwrap();

        let out = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            out,
            json!({
                "type": "chart",
                "chartType": "scatter",
                "data": [{"b": 1, "a": 2}],
                "xAxis": "b"
            })
        );
    }
}
