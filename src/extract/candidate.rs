use crate::spec::ChartSpec;
use serde_json::Value;

/// Why a candidate (or a whole strategy) produced no descriptor.
///
/// Rejections never leave the extractor; they are logged and the next
/// candidate or strategy is tried.
#[derive(Debug, thiserror::Error)]
pub enum Rejection {
    #[error("no candidate found")]
    NoCandidate,

    #[error("candidate is not valid JSON: {0}")]
    Syntax(serde_json::Error),

    #[error("candidate type marker is {0}, expected \"chart\"")]
    NotChart(String),

    #[error("candidate does not read as a chart descriptor: {0}")]
    Shape(serde_json::Error),
}

/// Parse a candidate as-is, then with every `'` replaced by `"`.
///
/// The reported error is the one from the as-is attempt.
pub fn parse_candidate(text: &str) -> Result<Value, Rejection> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Ok(value),
        Err(err) if text.contains('\'') => {
            serde_json::from_str::<Value>(&text.replace('\'', "\"")).map_err(|_| Rejection::Syntax(err))
        }
        Err(err) => Err(Rejection::Syntax(err)),
    }
}

/// Read a parsed candidate as a descriptor. With `check_marker`, anything
/// whose `type` is not exactly `"chart"` is rejected before shape checks.
pub fn read_chart(value: Value, check_marker: bool) -> Result<ChartSpec, Rejection> {
    if check_marker {
        match value.get("type") {
            Some(Value::String(s)) if s == "chart" => {}
            Some(other) => return Err(Rejection::NotChart(other.to_string())),
            None => return Err(Rejection::NotChart("missing".to_string())),
        }
    }
    ChartSpec::from_value(value).map_err(Rejection::Shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_as_is_first() {
        // Normalizing would break the apostrophe inside the string.
        let value = parse_candidate(r#"{"title": "Q1's revenue"}"#).unwrap();
        assert_eq!(value, json!({"title": "Q1's revenue"}));
    }

    #[test]
    fn falls_back_to_quote_normalization() {
        let value = parse_candidate("{'type': 'chart', 'data': [['A', 1]]}").unwrap();
        assert_eq!(value, json!({"type": "chart", "data": [["A", 1]]}));
    }

    #[test]
    fn reports_syntax_errors() {
        assert!(matches!(parse_candidate("{not json"), Err(Rejection::Syntax(_))));
        assert!(matches!(parse_candidate("{'a': }"), Err(Rejection::Syntax(_))));
    }

    #[test]
    fn marker_check() {
        assert!(read_chart(json!({"type": "chart"}), true).is_ok());
        assert!(matches!(
            read_chart(json!({"type": "table"}), true),
            Err(Rejection::NotChart(_))
        ));
        assert!(matches!(
            read_chart(json!({"chartType": "bar"}), true),
            Err(Rejection::NotChart(_))
        ));
        assert!(matches!(
            read_chart(json!({"chartType": "bar"}), false),
            Err(Rejection::Shape(_))
        ));
    }
}
