//! HTML fragment helpers for feed content: tag stripping, image-reference
//! extraction, and source-host derivation.

use scraper::{Html, Selector};
use url::Url;

/// Strip HTML markup from a fragment, returning its plain text content.
///
/// Entities are decoded by the HTML parser, so `&amp;amp;` comes back as
/// `&`. The text is returned at full length; display-side truncation is
/// the rendering layer's concern.
pub fn strip_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    let fragment = Html::parse_fragment(html);
    fragment
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}

/// Extract the first image reference from an HTML fragment.
///
/// Structural parse first: the first `<img>` element's `src` attribute.
/// When the fragment parses to no image element (the tag sits inside a
/// comment or a raw-text element and never materializes), fall back to a
/// regex scan for an absolute `http(s)` image source. Returns an empty
/// string when neither finds anything.
pub fn extract_image_from_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(html);
    let img_selector = Selector::parse("img").unwrap();
    if let Some(img) = fragment.select(&img_selector).next() {
        if let Some(src) = img.value().attr("src") {
            if !src.is_empty() {
                return src.to_string();
            }
        }
    }

    let img_pattern = regex::Regex::new(r#"(?i)<img[^>]+src=["'](https?://[^"'>]+)["']"#)
        .expect("image pattern is valid");
    if let Some(caps) = img_pattern.captures(html) {
        if let Some(m) = caps.get(1) {
            return m.as_str().to_string();
        }
    }

    String::new()
}

/// Hostname of a feed source URL, for article attribution. The relay the
/// request actually went through never appears here.
pub fn source_host(feed_url: &str) -> String {
    Url::parse(feed_url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_simple_markup() {
        assert_eq!(strip_html("<p>Hello <b>world</b>!</p>"), "Hello world!");
    }

    #[test]
    fn test_strip_decodes_entities() {
        assert_eq!(strip_html("Fish &amp; Chips"), "Fish & Chips");
    }

    #[test]
    fn test_strip_plain_text_passthrough() {
        assert_eq!(strip_html("no markup here"), "no markup here");
    }

    #[test]
    fn test_strip_empty() {
        assert_eq!(strip_html(""), "");
    }

    #[test]
    fn test_strip_preserves_full_length() {
        let long = "word ".repeat(100);
        let html = format!("<div>{}</div>", long);
        assert_eq!(strip_html(&html), long.trim());
    }

    #[test]
    fn test_extract_image_from_element() {
        let html = r#"<p>Intro</p><img src="https://x/y.jpg" alt=""><img src="https://x/z.jpg">"#;
        assert_eq!(extract_image_from_html(html), "https://x/y.jpg");
    }

    #[test]
    fn test_extract_image_regex_fallback_on_commented_markup() {
        // A commented-out tag never materializes as an element, but the
        // raw scan still finds it
        let html = r#"<p>text</p><!-- <img src="https://cdn.example.com/pic.png"> -->"#;
        assert_eq!(
            extract_image_from_html(html),
            "https://cdn.example.com/pic.png"
        );
    }

    #[test]
    fn test_extract_image_none_found() {
        assert_eq!(extract_image_from_html("<p>text only</p>"), "");
        assert_eq!(extract_image_from_html(""), "");
    }

    #[test]
    fn test_extract_image_single_quoted_src() {
        let html = "<!-- <img class='hero' src='http://img.example.com/a.jpg'> -->";
        assert_eq!(
            extract_image_from_html(html),
            "http://img.example.com/a.jpg"
        );
    }

    #[test]
    fn test_source_host() {
        assert_eq!(source_host("https://www.pymnts.com/feed/"), "www.pymnts.com");
        assert_eq!(source_host("https://decrypt.co/feed"), "decrypt.co");
    }

    #[test]
    fn test_source_host_invalid_url() {
        assert_eq!(source_host("not a url"), "");
    }
}
