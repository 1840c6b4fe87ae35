// src/core/html.rs
//
// Markup helpers for the HTML sink. Text and attribute values are escaped
// separately; everything else in the output is literal.

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
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

/// `<tag class="...">text</tag>`, omitting the class attribute when `None`.
pub fn element(tag: &str, class: Option<&str>, inner: &str) -> String {
    match class {
        Some(c) => format!("<{tag} class=\"{}\">{inner}</{tag}>", escape_attr(c)),
        None => format!("<{tag}>{inner}</{tag}>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_text() {
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_text("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn escapes_quotes_in_attributes() {
        assert_eq!(escape_attr("x\"y'z"), "x&quot;y&#39;z");
    }

    #[test]
    fn element_with_and_without_class() {
        assert_eq!(element("td", None, "1"), "<td>1</td>");
        assert_eq!(element("tr", Some("available"), ""), "<tr class=\"available\"></tr>");
    }
}
