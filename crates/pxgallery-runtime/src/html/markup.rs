/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Escape `text`, then turn `**bold**` spans into `<strong>`.
///
/// An unmatched trailing `**` is left as literal asterisks.
pub fn inline_markup(text: &str) -> String {
    let escaped = escape(text.trim());
    let parts: Vec<&str> = escaped.split("**").collect();

    let mut out = String::with_capacity(escaped.len());
    for (i, part) in parts.iter().enumerate() {
        let is_bold = i % 2 == 1;
        let closed = i + 1 < parts.len() || !is_bold;

        if is_bold && closed {
            out.push_str("<strong>");
            out.push_str(part);
            out.push_str("</strong>");
        } else if is_bold {
            out.push_str("**");
            out.push_str(part);
        } else {
            out.push_str(part);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_bold_spans() {
        assert_eq!(
            inline_markup("worth **well over $100,000** today"),
            "worth <strong>well over $100,000</strong> today"
        );
        assert_eq!(
            inline_markup("**Location:** here\n**Delivery:** there"),
            "<strong>Location:</strong> here\n<strong>Delivery:</strong> there"
        );
    }

    #[test]
    fn test_unmatched_marker_is_literal() {
        assert_eq!(inline_markup("a **b"), "a **b");
    }

    #[test]
    fn test_markup_escapes_first() {
        assert_eq!(inline_markup("**<b>**"), "<strong>&lt;b&gt;</strong>");
    }
}
