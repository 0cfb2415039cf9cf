//! Sanitizers for operator-supplied settings text.
//!
//! Settings come from a free-form admin form, so every field is cleaned
//! before it reaches the resolver. None of these functions fail: malformed
//! input is cleaned or discarded.

use scraper::{ElementRef, Html, Node};

/// Single-line text: markup removed, line breaks and tabs collapsed, trimmed.
pub fn sanitize_text_field(input: &str) -> String {
    collapse_whitespace(&strip_tags(input))
}

/// Multi-line text: like [`sanitize_text_field`] but line breaks survive.
pub fn sanitize_textarea_field(input: &str) -> String {
    let stripped = strip_tags(input);
    let lines: Vec<String> = stripped
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(collapse_whitespace)
        .collect();

    lines.join("\n").trim().to_string()
}

/// Accepts `#rgb` or `#rrggbb` (any case). Anything else is discarded.
pub fn sanitize_hex_color(input: &str) -> Option<String> {
    let color = input.trim();
    let digits = color.strip_prefix('#')?;

    if (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(color.to_string())
    } else {
        None
    }
}

/// Splits the exclusion textarea into one sanitized entry per non-empty line.
pub fn sanitize_domain_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(sanitize_text_field)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Text content of `input` read as an HTML fragment. `script` and `style`
/// elements are dropped along with their contents.
fn strip_tags(input: &str) -> String {
    let fragment = Html::parse_fragment(input);
    let mut output = String::with_capacity(input.len());
    collect_text(fragment.root_element(), &mut output);
    output
}

fn collect_text(element: ElementRef<'_>, output: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => output.push_str(text),
            Node::Element(el) if matches!(el.name(), "script" | "style") => {}
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, output);
                }
            }
            _ => {}
        }
    }
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_strips_markup_and_line_breaks() {
        assert_eq!(
            sanitize_text_field("  <b>External</b>\n\tLink  "),
            "External Link"
        );
    }

    #[test]
    fn test_text_field_keeps_comparison_operators() {
        assert_eq!(sanitize_text_field("a < b"), "a < b");
    }

    #[test]
    fn test_textarea_keeps_line_breaks() {
        assert_eq!(
            sanitize_textarea_field("First line  \r\n<i>second</i>   line\n"),
            "First line\nsecond line"
        );
    }

    #[test]
    fn test_script_and_style_contents_are_removed() {
        assert_eq!(
            sanitize_text_field("Leaving<script>alert(1)</script> now<style>p{}</style>"),
            "Leaving now"
        );
        assert_eq!(
            sanitize_textarea_field("Heads up!\n<SCRIPT type=\"x\">bad()</SCRIPT>Bye"),
            "Heads up!\nBye"
        );
    }

    #[test]
    fn test_comments_are_removed() {
        assert_eq!(sanitize_text_field("a<!-- note -->b"), "ab");
    }

    #[test]
    fn test_hex_color_accepts_short_and_long_forms() {
        assert_eq!(sanitize_hex_color("#d33"), Some("#d33".to_string()));
        assert_eq!(sanitize_hex_color(" #3085D6 "), Some("#3085D6".to_string()));
    }

    #[test]
    fn test_hex_color_rejects_invalid_values() {
        assert_eq!(sanitize_hex_color("red"), None);
        assert_eq!(sanitize_hex_color("#12345"), None);
        assert_eq!(sanitize_hex_color("#ggg"), None);
        assert_eq!(sanitize_hex_color(""), None);
    }

    #[test]
    fn test_domain_lines_drop_empty_entries() {
        let lines = sanitize_domain_lines("partner.com\n\n  \n docs.example.org \r\n");
        assert_eq!(lines, vec!["partner.com", "docs.example.org"]);
    }
}
