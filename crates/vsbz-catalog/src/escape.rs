/// HTML escaping for text interpolated into sidebar markup.
///
/// Catalog content is loosely validated, so every value that lands in markup goes
/// through here. Loose JSON values are coerced to text with `value_to_text` when the
/// catalog is loaded; both functions are total.
use serde_json::Value;

/// Escape `&`, `<`, `>`, `"` and `'` for use in HTML text and attribute values.
///
/// Single pass over the input, so the `&` of an emitted entity is never escaped again.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// String form of a JSON value, coerced the way the catalog build's JavaScript would
/// (`String(value)`), with `None` and `null` as the empty string.
///
/// - strings as-is
/// - integral numbers without a fractional part (`1.0` → `"1"`)
/// - arrays as their elements joined with `,`, nested `null` as empty
/// - objects as `[object Object]`
pub fn value_to_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_to_text(n),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| value_to_text(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

fn number_to_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        // f64 Display drops a zero fraction
        n.as_f64().map(|f| f.to_string()).unwrap_or_default()
    }
}
