//! HTML escaping

use contracts::HtmlEscaper;

/// Escapes `& < > " '`; existing entities are escaped again
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSpecialChars;

impl HtmlEscaper for HtmlSpecialChars {
    fn escape(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len() + raw.len() / 8);
        for c in raw.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#039;"),
                _ => out.push(c),
            }
        }
        out
    }
}
