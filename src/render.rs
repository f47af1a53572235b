//! Display helpers for the terminal consumer. All truncation for display
//! happens here; the pipeline hands over full-length text.

use chrono::{DateTime, Utc};

use crate::article::Article;

/// Display-excerpt length in characters.
pub const EXCERPT_LEN: usize = 200;

/// Truncate text for display, appending an ellipsis only when something
/// was actually cut. Cuts on a character boundary.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut)
}

pub fn format_published(published: &DateTime<Utc>) -> String {
    published.format("%b %e, %Y %H:%M").to_string()
}

/// One article card as terminal text.
pub fn article_card(article: &Article) -> String {
    let mut card = format!(
        "{}\n  {} | {}\n",
        article.title,
        format_published(&article.published),
        article.source_host
    );
    if !article.description.is_empty() {
        card.push_str(&format!("  {}\n", excerpt(&article.description, EXCERPT_LEN)));
    }
    if !article.image_url.is_empty() {
        card.push_str(&format!("  [image] {}\n", article.image_url));
    }
    card.push_str(&format!("  {}\n", article.link));
    card
}

/// Message shown for a category that produced nothing at all.
pub const NO_ARTICLES_MESSAGE: &str =
    "No articles found in the feeds. Feeds may be temporarily unavailable, \
     restricted, or the content may have moved. Please try again later.";
