use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use feed_rs::model::Entry;
use feed_rs::parser;
use reqwest::header::ACCEPT;
use reqwest::Client;
use thiserror::Error;
use tracing::{info, warn};
use url::form_urlencoded;

use crate::article::Article;
use crate::config::Config;
use crate::extract::{extract_image_from_html, source_host, strip_html};
use crate::placeholder;

/// Cap on the merged result for one category.
pub const MAX_ARTICLES_PER_CATEGORY: usize = 20;

/// Why a single relay attempt was abandoned. Every variant is absorbed
/// inside the relay-fallback loop; none of them reaches a caller.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("feed parse error: {0}")]
    Parse(String),
    /// A relay answered 200 with a document that parsed to zero items,
    /// typically an error page disguised as a feed.
    #[error("feed contained no items")]
    EmptyFeed,
}

pub struct Fetcher {
    client: Client,
    config: Config,
}

impl Fetcher {
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("NewsRack/1.0 (RSS Aggregator)")
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch a category and apply the placeholder policy: an empty result
    /// is replaced with canned articles only when the category opts in via
    /// `allow_placeholder_fallback`. This is a presentation fallback, not
    /// error recovery.
    pub async fn load_category(&self, key: &str) -> anyhow::Result<Vec<Article>> {
        let articles = self.fetch_category(key).await?;
        if !articles.is_empty() {
            return Ok(articles);
        }

        let allow = self
            .config
            .category(key)
            .map(|c| c.allow_placeholder_fallback)
            .unwrap_or(false);
        if allow {
            let placeholders = placeholder::placeholders_for(key);
            if !placeholders.is_empty() {
                info!(
                    "No live articles for '{}', showing {} placeholders",
                    key,
                    placeholders.len()
                );
                return Ok(placeholders);
            }
        }

        Ok(articles)
    }

    /// Aggregate every configured feed of a category: fetch sequentially,
    /// merge, sort newest-first, cap at [`MAX_ARTICLES_PER_CATEGORY`].
    ///
    /// A feed that errors or returns nothing contributes zero articles
    /// without aborting the rest; the only error this call itself can
    /// produce is an unknown category key.
    pub async fn fetch_category(&self, key: &str) -> anyhow::Result<Vec<Article>> {
        let category = self
            .config
            .category(key)
            .ok_or_else(|| anyhow::anyhow!("unknown category '{}'", key))?;

        let mut all_articles = Vec::new();
        for feed_url in &category.feeds {
            let articles = self.fetch_feed(feed_url).await;
            if articles.is_empty() {
                info!("No articles from feed: {}", feed_url);
            } else {
                info!("Fetched {} articles from {}", articles.len(), feed_url);
                all_articles.extend(articles);
            }
        }

        all_articles.sort_by(|a, b| b.published.cmp(&a.published));
        all_articles.truncate(MAX_ARTICLES_PER_CATEGORY);
        Ok(all_articles)
    }

    /// Fetch one feed through the relay list: each relay is tried in
    /// order, and the first one that yields a parseable, non-empty feed
    /// wins. When every relay fails the feed simply contributes nothing.
    pub async fn fetch_feed(&self, feed_url: &str) -> Vec<Article> {
        let fetched = first_success(&self.config.relays, |relay| async move {
            match self.fetch_via_relay(relay, feed_url).await {
                Ok(articles) => Ok(articles),
                Err(e) => {
                    warn!("Relay {} failed for {}: {}", relay, feed_url, e);
                    Err(e)
                }
            }
        })
        .await;

        match fetched {
            Some(articles) => articles,
            None => {
                warn!("All relays exhausted for {}", feed_url);
                Vec::new()
            }
        }
    }

    async fn fetch_via_relay(
        &self,
        relay: &str,
        feed_url: &str,
    ) -> Result<Vec<Article>, FetchError> {
        let encoded: String = form_urlencoded::byte_serialize(feed_url.as_bytes()).collect();
        let request_url = format!("{}{}", relay, encoded);

        let response = self
            .client
            .get(&request_url)
            .header(ACCEPT, "application/xml, text/xml, */*")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().as_u16()));
        }

        let bytes = response.bytes().await?;
        let parsed = parser::parse(&bytes[..]).map_err(|e| FetchError::Parse(e.to_string()))?;
        if parsed.entries.is_empty() {
            return Err(FetchError::EmptyFeed);
        }

        Ok(parsed
            .entries
            .into_iter()
            .map(|entry| normalize_entry(&entry, feed_url))
            .collect())
    }
}

/// Ordered-fallback combinator: run candidate operations one at a time and
/// return the first `Ok` payload, or `None` once the list is exhausted.
async fn first_success<C, T, E, F, Fut>(
    candidates: impl IntoIterator<Item = C>,
    mut attempt: F,
) -> Option<T>
where
    F: FnMut(C) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    for candidate in candidates {
        if let Ok(value) = attempt(candidate).await {
            return Some(value);
        }
    }
    None
}

/// Derive an [`Article`] from one parsed feed entry.
///
/// Fields fall back the way a lenient reader expects: "No Title", empty
/// description, "#" link, current time for a missing date. The
/// description is kept at full length.
pub fn normalize_entry(entry: &Entry, feed_url: &str) -> Article {
    let title = entry
        .title
        .as_ref()
        .map(|t| strip_html(&t.content))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "No Title".to_string());

    let description = entry
        .summary
        .as_ref()
        .map(|s| strip_html(&s.content))
        .unwrap_or_default();

    let link = entry
        .links
        .first()
        .map(|l| l.href.clone())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| "#".to_string());

    let published = entry.published.or(entry.updated).unwrap_or_else(Utc::now);

    Article {
        title,
        description,
        link,
        published,
        image_url: resolve_image(entry),
        source_host: source_host(feed_url),
    }
}

/// Resolve the entry's image by trying, in order: a media thumbnail, the
/// encoded-content HTML, the raw description HTML, and finally an
/// enclosure declared with an `image/*` type. First hit wins.
fn resolve_image(entry: &Entry) -> String {
    if let Some(thumbnail) = entry.media.iter().flat_map(|m| m.thumbnails.iter()).next() {
        if !thumbnail.image.uri.is_empty() {
            return thumbnail.image.uri.clone();
        }
    }

    if let Some(body) = entry.content.as_ref().and_then(|c| c.body.as_ref()) {
        let url = extract_image_from_html(body);
        if !url.is_empty() {
            return url;
        }
    }

    if let Some(summary) = entry.summary.as_ref() {
        let url = extract_image_from_html(&summary.content);
        if !url.is_empty() {
            return url;
        }
    }

    for content in entry.media.iter().flat_map(|m| m.content.iter()) {
        let is_image = content
            .content_type
            .as_ref()
            .map(|t| t.to_string().starts_with("image/"))
            .unwrap_or(false);
        if is_image {
            if let Some(url) = &content.url {
                return url.to_string();
            }
        }
    }

    String::new()
}
