//! Free-text cleanup shared by both sources

use scraper::{ElementRef, Html, Node};

/// Elements that separate words when rendered
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "blockquote", "br", "dd", "div", "dl", "dt", "h1", "h2", "h3", "h4",
    "h5", "h6", "hr", "li", "ol", "p", "section", "table", "td", "th", "tr", "ul",
];

/// Collapses every run of whitespace (including non-breaking spaces) into a
/// single space and trims both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Plain text of an element with block boundaries kept as word breaks
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if BLOCK_ELEMENTS.contains(&el.name()) => out.push(' '),
            _ => {}
        }
    }
    collapse_whitespace(&out)
}

/// Strips markup from an HTML fragment, returning cleaned plain text
///
/// ```
/// use resume_harvest::normalize::strip_html;
///
/// let text = strip_html("<p>Python &amp; Rust</p><p>  backend</p>");
/// assert_eq!(text, "Python & Rust backend");
/// ```
pub fn strip_html(fragment: &str) -> String {
    if !fragment.contains('<') && !fragment.contains('&') {
        return collapse_whitespace(fragment);
    }
    let parsed = Html::parse_fragment(fragment);
    element_text(parsed.root_element())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b\u{a0}\u{a0}c  "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_strip_html_inline_markup() {
        assert_eq!(strip_html("<b>Py</b>thon developer"), "Python developer");
    }

    #[test]
    fn test_strip_html_blocks_and_breaks() {
        assert_eq!(
            strip_html("<ul><li>Django</li><li>FastAPI</li></ul>Docker<br>Linux"),
            "Django FastAPI Docker Linux"
        );
    }

    #[test]
    fn test_strip_html_entities() {
        assert_eq!(strip_html("R&amp;D&nbsp;team"), "R&D team");
    }

    #[test]
    fn test_strip_html_plain_text() {
        assert_eq!(strip_html("  just   text "), "just text");
        assert_eq!(strip_html(""), "");
    }
}
