//! Static placeholder articles, substituted for display when a category
//! with `allow_placeholder_fallback` yields nothing real.

use chrono::{Duration, Utc};

use crate::article::Article;

fn placeholder(
    title: &str,
    description: &str,
    image_url: &str,
    source: &str,
    days_ago: i64,
) -> Article {
    Article {
        title: title.to_string(),
        description: description.to_string(),
        link: "#".to_string(),
        published: Utc::now() - Duration::days(days_ago),
        image_url: image_url.to_string(),
        source_host: source.to_string(),
    }
}

/// Canned articles for a category key. Categories without canned content
/// get an empty set, which the fallback policy passes through unchanged.
pub fn placeholders_for(category: &str) -> Vec<Article> {
    match category {
        "crypto" => vec![
            placeholder(
                "Bitcoin's Role in Institutional Investment",
                "Major financial institutions increasingly adopt Bitcoin as part of their treasury strategy.",
                "https://images.unsplash.com/photo-1611974789891-3a2d757b3bfd?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                "Crypto Market Watch",
                1,
            ),
            placeholder(
                "Ethereum 2.0: The Future of Smart Contracts",
                "Analysis of Ethereum's transition to proof-of-stake and its implications for decentralized applications.",
                "https://images.unsplash.com/photo-1622837707362-9a0a89f3a4d3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                "Blockchain Research",
                2,
            ),
        ],
        "portugal" => vec![
            placeholder(
                "Portugal's Digital Transformation Initiative",
                "Government launches new digital infrastructure projects to boost tech sector growth.",
                "https://images.unsplash.com/photo-1531102946758-9b6f0d511e6a?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                "Portuguese Business Journal",
                1,
            ),
            placeholder(
                "Tourism Recovery Shows Strong Momentum",
                "International visitors return to Portugal at record levels as hospitality sector rebounds.",
                "https://images.unsplash.com/photo-1534438327276-14e530049888?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                "Lisbon Times",
                2,
            ),
        ],
        _ => Vec::new(),
    }
}
