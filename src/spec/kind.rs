use std::fmt;

/// Rendering variant named by `chartType`.
///
/// Matching is case-insensitive. Anything unrecognized is kept as
/// `Unsupported` with the original text so renderers can show a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Area,
    Unsupported(String),
}

impl ChartKind {
    pub const PLACEHOLDER: &'static str = "Visualization type not supported.";

    pub fn from_chart_type(chart_type: Option<&str>) -> Self {
        let raw = chart_type.unwrap_or_default();
        match raw.to_lowercase().as_str() {
            "bar" => ChartKind::Bar,
            "line" => ChartKind::Line,
            "pie" => ChartKind::Pie,
            "area" => ChartKind::Area,
            _ => ChartKind::Unsupported(raw.to_string()),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, ChartKind::Unsupported(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Area => "area",
            ChartKind::Unsupported(raw) => raw,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_ignore_case() {
        assert_eq!(ChartKind::from_chart_type(Some("BAR")), ChartKind::Bar);
        assert_eq!(ChartKind::from_chart_type(Some("Line")), ChartKind::Line);
        assert_eq!(ChartKind::from_chart_type(Some("pie")), ChartKind::Pie);
        assert_eq!(ChartKind::from_chart_type(Some("area")), ChartKind::Area);
    }

    #[test]
    fn unknown_kinds_keep_original_text() {
        let kind = ChartKind::from_chart_type(Some("Scatter"));
        assert_eq!(kind, ChartKind::Unsupported("Scatter".to_string()));
        assert!(!kind.is_supported());
        assert_eq!(kind.to_string(), "Scatter");

        assert_eq!(
            ChartKind::from_chart_type(None),
            ChartKind::Unsupported(String::new())
        );
    }
}
