mod article;
mod config;
mod extract;
mod fetcher;
mod placeholder;
mod render;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::fetcher::Fetcher;

/// Fetch categorized RSS feeds and print them as article cards.
#[derive(Parser, Debug)]
#[command(name = "newsrack", version, about)]
struct Args {
    /// Category to load; all configured categories when omitted
    category: Option<String>,

    /// Path to the feed catalog
    #[arg(short, long, default_value = "feeds.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsrack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;
    info!(
        "Loaded {} categories and {} relays from configuration",
        config.categories.len(),
        config.relays.len()
    );

    let keys: Vec<String> = match args.category {
        Some(key) => vec![key],
        None => config.categories.iter().map(|c| c.key.clone()).collect(),
    };

    let fetcher = Fetcher::new(config);

    for key in keys {
        let articles = fetcher.load_category(&key).await?;

        println!("== {} ==", key);
        if articles.is_empty() {
            println!("{}", render::NO_ARTICLES_MESSAGE);
        } else {
            for article in &articles {
                println!("{}", render::article_card(article));
            }
        }
        println!();
    }

    Ok(())
}
