//! Linear scans for chart objects embedded in prose.
//!
//! Both scans work on bytes: every delimiter we look for is ASCII, so any
//! index we stop at is a char boundary.

/// Canonical opening markers of a chart object, both quote styles.
pub const CHART_MARKERS: [&str; 4] = [
    r#"{"type": "chart""#,
    r#"{"type":"chart""#,
    r#"{'type': 'chart'"#,
    r#"{'type':'chart'"#,
];

/// Earliest position of any canonical marker.
pub fn find_marker(text: &str) -> Option<usize> {
    CHART_MARKERS.iter().filter_map(|m| text.find(m)).min()
}

/// End (exclusive) of the object opening at `start`, found by brace depth.
///
/// Braces inside quoted strings are ignored. A string opened by `"` closes
/// only on an unescaped `"` (same for `'`), so neither escaped quotes nor the
/// other quote style can flip string state.
pub fn balanced_object_end(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut escaped = false;

    for (offset, &b) in bytes.get(start..)?.iter().enumerate() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == q {
                quote = None;
            }
            continue;
        }

        match b {
            b'"' | b'\'' => quote = Some(b),
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(start + offset + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Smallest `{ ... }` spans around each `type: chart` field, in text order.
///
/// The field may use either quote style on key and value, with optional
/// whitespace around the colon. Each span runs from the nearest `{` before
/// the field to the nearest `}` after it; fields lacking either are skipped.
/// One forward pass: the nearest `{` and `}` are carried between fields.
pub fn loose_chart_spans(text: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let mut searched = 0usize;
    let mut open: Option<usize> = None;
    let mut close: Option<usize> = None;
    let mut no_more_closes = false;

    type_chart_fields(text).filter_map(move |(field_start, field_end)| {
        if let Some(i) = text[searched..field_start].rfind('{') {
            open = Some(searched + i);
        }
        searched = field_start;

        if no_more_closes {
            return None;
        }
        if close.is_none_or(|c| c < field_end) {
            close = text[field_end..].find('}').map(|i| field_end + i);
            if close.is_none() {
                no_more_closes = true;
                return None;
            }
        }
        Some((open?, close? + 1))
    })
}

/// Byte ranges of `"type": "chart"`-like fields (quotes included).
fn type_chart_fields(text: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let bytes = text.as_bytes();
    let is_quote = move |i: usize| matches!(bytes.get(i), Some(b'"' | b'\''));
    let skip_ws = move |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
            i += 1;
        }
        i
    };

    text.match_indices("type").filter_map(move |(pos, _)| {
        if pos == 0 || !is_quote(pos - 1) || !is_quote(pos + 4) {
            return None;
        }
        let mut i = skip_ws(pos + 5);
        if bytes.get(i) != Some(&b':') {
            return None;
        }
        i = skip_ws(i + 1);
        if !is_quote(i) || !text[i + 1..].starts_with("chart") || !is_quote(i + 6) {
            return None;
        }
        Some((pos - 1, i + 7))
    })
}
