pub fn strip_leading_hyphens(input: Option<&str>) -> Option<String> {
    input.map(|value| {
        value
            .strip_prefix("--")
            .or_else(|| value.strip_prefix('-'))
            .unwrap_or(value)
            .to_string()
    })
}

/// Removes one pair of surrounding double quotes. Values with a quote anywhere
/// else, like `"a" "b"`, are returned unchanged.
pub fn strip_leading_and_trailing_quotes(input: Option<&str>) -> Option<String> {
    input.map(|value| {
        let inner = value
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'));
        match inner {
            Some(inner) if !inner.contains('"') => inner.to_string(),
            _ => value.to_string(),
        }
    })
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
