//! An assistant answer paired with the chart extracted from it.

use crate::extract::{Extractor, scan};
use crate::model::Record;
use crate::spec::ChartSpec;

use regex::Regex;
use std::sync::LazyLock;

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json.*?```").expect("valid json fence pattern"));

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Raw answer text, untouched.
    pub answer: String,
    pub chart: Option<ChartSpec>,
}

impl Message {
    pub fn from_answer(answer: impl Into<String>) -> Self {
        Self::from_answer_with(&Extractor::default(), answer)
    }

    pub fn from_answer_with(extractor: &Extractor, answer: impl Into<String>) -> Self {
        let answer = answer.into();
        let chart = extractor.extract(&answer);
        Self { answer, chart }
    }

    /// Prose to show next to the chart.
    ///
    /// With a chart, the payload is stripped: ```json fences first, then any
    /// brace-balanced `{...}` object, then surrounding whitespace. Without a
    /// chart the answer is returned as-is.
    pub fn display_text(&self) -> String {
        if self.chart.is_none() {
            return self.answer.clone();
        }

        let text = JSON_FENCE.replace_all(&self.answer, "");
        strip_objects(&text).trim().to_string()
    }

    /// Canonical records of the chart, empty without one.
    pub fn records(&self) -> Vec<Record> {
        self.chart.as_ref().map(ChartSpec::records).unwrap_or_default()
    }
}

/// Drop every `{...}` object. Unbalanced objects end at the next `}`; an
/// opening brace with no `}` after it is kept along with the rest.
fn strip_objects(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let end = scan::balanced_object_end(rest, open)
            .or_else(|| rest[open..].find('}').map(|i| open + i + 1));
        match end {
            Some(end) => rest = &rest[end..],
            None => {
                rest = &rest[open..];
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn plain_answers_are_untouched() {
        let msg = Message::from_answer("  Sales rose {slightly}.  ");
        assert_eq!(msg.chart, None);
        assert_eq!(msg.display_text(), "  Sales rose {slightly}.  ");
        assert!(msg.records().is_empty());
    }

    #[test]
    fn fenced_payload_is_stripped() {
        let msg = Message::from_answer(
            "Top regions:\n```json\n{\"type\": \"chart\", \"chartType\": \"bar\", \"data\": [[\"N\", 3]]}\n```\nDone.",
        );
        assert!(msg.chart.is_some());
        assert_eq!(msg.display_text(), "Top regions:\n\nDone.");
        assert_eq!(
            msg.records(),
            vec![Record {
                x: json!("N"),
                y: json!(3)
            }]
        );
    }

    #[test]
    fn inline_payload_is_stripped_whole() {
        let msg = Message::from_answer(
            r#"Revenue grew. {"type": "chart", "data": [{"m": "Jan", "v": 1}], "xAxis": "m"} Thanks."#,
        );
        assert!(msg.chart.is_some());
        assert_eq!(msg.display_text(), "Revenue grew.  Thanks.");
    }

    #[test]
    fn strip_objects_edge_cases() {
        assert_eq!(strip_objects("a {b {c} d"), "a  d");
        assert_eq!(strip_objects("a { b"), "a { b");
        assert_eq!(strip_objects("{x}{y}z"), "z");
    }
}
