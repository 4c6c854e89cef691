use crate::Result;
use crate::message::Message;
use crate::model::Record;
use crate::spec::ChartKind;

use serde::Serialize;

/// Everything the preview page needs, embedded as one JSON object.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewData {
    pub text: String,
    pub chart: Option<ChartView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub title: Option<String>,
    pub kind: String,
    pub supported: bool,
    pub placeholder: &'static str,
    pub x_axis: String,
    pub y_axis: String,
    pub records: Vec<Record>,
}

pub fn build_preview_data(message: &Message) -> PreviewData {
    let chart = message.chart.as_ref().map(|spec| {
        let kind = spec.kind();
        ChartView {
            title: spec.title.clone(),
            kind: kind.to_string(),
            supported: kind.is_supported(),
            placeholder: ChartKind::PLACEHOLDER,
            x_axis: spec.x_axis.clone().unwrap_or_else(|| "x".to_string()),
            y_axis: spec.y_axis.clone().unwrap_or_else(|| "y".to_string()),
            records: spec.records(),
        }
    });

    PreviewData {
        text: message.display_text(),
        chart,
    }
}

/// Render a self-contained HTML preview of one message (data embedded as JSON).
///
/// Important: we avoid `format!()` because the HTML contains many `{}` from JS
/// template literals (e.g., `${x}`), which would conflict with Rust formatting.
pub fn render_html_preview(message: &Message) -> Result<String> {
    let data = build_preview_data(message);
    // `<\/` keeps answer text from closing the script element early.
    let json = serde_json::to_string(&data)?.replace("</", "<\\/");

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>DataPulse Chart Preview</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  .main { padding: 12px 16px; max-width: 960px; }

  .summary { display: flex; gap: 16px; flex-wrap: wrap; font-size: 14px; color: #333; }
  .pill { padding: 4px 8px; border: 1px solid #ddd; border-radius: 999px; background: #fafafa; }
  .answer { white-space: pre-wrap; line-height: 1.5; }
  .placeholder { color: #777; font-style: italic; font-size: 12px; }

  table { border-collapse: collapse; width: 100%; margin-top: 8px; }
  th, td { border-bottom: 1px solid #eee; padding: 6px 8px; text-align: left; font-size: 14px; }
  th { position: sticky; top: 0; background: white; border-bottom: 1px solid #ddd; }
  .num { text-align: right; font-variant-numeric: tabular-nums; }
</style>
</head>
<body>
<header>
  <div class="summary" id="summary"></div>
</header>

<div class="main">
  <div class="answer" id="answer"></div>
  <h3 id="title"></h3>
  <div id="chart"></div>
</div>

<script>
// Embedded preview data (JSON object literal)
const DATA = __DATA__;

function escapeHtml(s) {
  return String(s)
    .replaceAll("&", "&amp;")
    .replaceAll("<", "&lt;")
    .replaceAll(">", "&gt;")
    .replaceAll('"', "&quot;")
    .replaceAll("'", "&#39;");
}

function fmtValue(v) {
  if (v === null || v === undefined) return "";
  return typeof v === "object" ? JSON.stringify(v) : String(v);
}

function renderSummary() {
  const el = document.getElementById("summary");
  const c = DATA.chart;
  if (!c) {
    el.innerHTML = `<span class="pill">no chart</span>`;
    return;
  }
  el.innerHTML = `
    <span class="pill">kind: <b>${escapeHtml(c.kind || "(none)")}</b></span>
    <span class="pill">records: <b>${c.records.length}</b></span>
    <span class="pill">x: <b>${escapeHtml(c.x_axis)}</b></span>
    <span class="pill">y: <b>${escapeHtml(c.y_axis)}</b></span>
  `;
}

function renderChart() {
  const c = DATA.chart;
  const el = document.getElementById("chart");
  if (!c) return;

  if (c.title) document.getElementById("title").textContent = c.title;

  if (!c.supported) {
    el.innerHTML = `<p class="placeholder">${escapeHtml(c.placeholder)}</p>`;
    return;
  }

  const rows = c.records.map(r => `
    <tr>
      <td>${escapeHtml(fmtValue(r.x))}</td>
      <td class="num">${escapeHtml(fmtValue(r.y))}</td>
    </tr>`).join("");

  el.innerHTML = `
    <table>
      <thead><tr><th>${escapeHtml(c.x_axis)}</th><th class="num">${escapeHtml(c.y_axis)}</th></tr></thead>
      <tbody>${rows}</tbody>
    </table>
  `;
}

document.getElementById("answer").textContent = DATA.text;
renderSummary();
renderChart();
</script>
</body>
</html>
"#;

    Ok(TEMPLATE.replace("__DATA__", &json))
}
