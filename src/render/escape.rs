//! HTML attribute escaping.

/// Escape `s` for use inside a double- or single-quoted HTML attribute.
///
/// Only `&`, `<`, `>`, `"` and `'` are replaced, so paths and URLs keep
/// their slashes and colons.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
