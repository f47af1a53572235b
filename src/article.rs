use chrono::{DateTime, Utc};

/// One normalized syndication item, ready for display.
///
/// Articles are plain values: constructed once by the normalizer and never
/// mutated afterwards. `link` is only a display key and is not guaranteed
/// unique across feeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    /// Plain text, HTML already stripped. Full length; the display layer
    /// is responsible for excerpting.
    pub description: String,
    /// Target URL, or "#" when the item carried no link.
    pub link: String,
    pub published: DateTime<Utc>,
    /// Empty string when no usable image reference was found.
    pub image_url: String,
    /// Hostname of the feed source URL (not the relay).
    pub source_host: String,
}
