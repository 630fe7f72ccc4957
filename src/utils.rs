// src/utils.rs
use chrono::Datelike;

/// Escape text for use inside HTML element content or a quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize a value for embedding inside an inline `<script>` block.
pub fn script_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Links leaving the page open in a new browsing context.
pub fn external_link_attrs() -> &'static str {
    r#"target="_blank" rel="noopener noreferrer""#
}
