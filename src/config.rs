use serde::Deserialize;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Relay endpoint prefixes, tried in order for every feed fetch.
    /// The relayed request URL is the prefix plus the percent-encoded
    /// feed URL.
    #[serde(default = "default_relays")]
    pub relays: Vec<String>,
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CategoryConfig {
    pub key: String,
    pub feeds: Vec<String>,
    /// Whether an empty aggregation result may be replaced with static
    /// placeholder articles for display.
    #[serde(default)]
    pub allow_placeholder_fallback: bool,
}

fn default_relays() -> Vec<String> {
    [
        "https://api.allorigins.win/raw?url=",
        "https://cors-anywhere.herokuapp.com/",
        "https://thingproxy.freeboard.io/fetch/",
        "https://api.codetabs.com/v1/proxy/?quest=",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_categories() -> Vec<CategoryConfig> {
    fn category(key: &str, feeds: &[&str], allow_placeholder_fallback: bool) -> CategoryConfig {
        CategoryConfig {
            key: key.to_string(),
            feeds: feeds.iter().map(|s| s.to_string()).collect(),
            allow_placeholder_fallback,
        }
    }

    vec![
        category(
            "payments",
            &[
                "https://www.pymnts.com/feed/",
                "https://fintech.global/feed/",
                "https://www.finextra.com/rss.aspx",
            ],
            false,
        ),
        category(
            "crypto",
            &[
                "https://bitcoinmagazine.com/feed",
                "https://www.coindesk.com/feed",
                "https://cointelegraph.com/feed",
                "https://blockchain.news/rss.xml",
                "https://decrypt.co/feed",
            ],
            true,
        ),
        category(
            "portugal",
            &[
                "https://feeds.lusa.pt/lusa",
                "https://www.publico.pt/rss",
                "https://expresso.sapo.pt/feed",
                "https://www.rtp.pt/noticias/rss/mundo",
                "https://www.jn.pt/rss",
            ],
            true,
        ),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relays: default_relays(),
            categories: default_categories(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. A missing file is not an error:
    /// the built-in catalog is used instead.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "Config file {} not found, using built-in catalog",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn category(&self, key: &str) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| c.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_catalog() {
        let config = Config::default();

        assert_eq!(config.relays.len(), 4);
        assert!(config.relays[0].starts_with("https://api.allorigins.win"));

        assert_eq!(config.categories.len(), 3);
        let payments = config.category("payments").unwrap();
        assert_eq!(payments.feeds.len(), 3);
        assert!(!payments.allow_placeholder_fallback);

        let crypto = config.category("crypto").unwrap();
        assert_eq!(crypto.feeds.len(), 5);
        assert!(crypto.allow_placeholder_fallback);
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
            relays = ["https://relay.example.com/fetch?url="]

            [[categories]]
            key = "tech"
            feeds = ["https://example.com/feed.xml", "https://example.org/rss"]
            allow_placeholder_fallback = true

            [[categories]]
            key = "science"
            feeds = ["https://science.example.com/rss"]
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let config = Config::load(temp_file.path()).unwrap();

        assert_eq!(config.relays.len(), 1);
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.categories[0].key, "tech");
        assert_eq!(config.categories[0].feeds.len(), 2);
        assert!(config.categories[0].allow_placeholder_fallback);
        assert_eq!(config.categories[1].key, "science");
        assert!(!config.categories[1].allow_placeholder_fallback);
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/path/feeds.toml").unwrap();
        assert_eq!(config.categories.len(), 3);
        assert_eq!(config.relays.len(), 4);
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let content = "this is not valid toml {{{";

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let result = Config::load(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_missing_required_fields() {
        let content = r#"
            [[categories]]
            key = "tech"
            # Missing feeds field
        "#;

        let result = Config::from_str(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_omitted_sections_fall_back_to_defaults() {
        let content = r#"
            [[categories]]
            key = "tech"
            feeds = ["https://example.com/feed.xml"]
        "#;

        let config = Config::from_str(content).unwrap();
        // relays omitted: built-in relay list applies
        assert_eq!(config.relays.len(), 4);
        assert_eq!(config.categories.len(), 1);
    }

    #[test]
    fn test_empty_categories_list() {
        let content = "categories = []";

        let config = Config::from_str(content).unwrap();
        assert!(config.categories.is_empty());
    }

    #[test]
    fn test_category_lookup() {
        let config = Config::default();
        assert!(config.category("crypto").is_some());
        assert!(config.category("nonexistent").is_none());
    }
}
