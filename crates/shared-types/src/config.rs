use serde::{Deserialize, Serialize};

/// Endpoint used when nothing else is configured.
pub const DEFAULT_POSTS_URL: &str = "http://localhost:3000/posts";

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Where submitted posts are sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_posts_url")]
    pub posts_url: String,
}

fn default_posts_url() -> String {
    DEFAULT_POSTS_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            posts_url: default_posts_url(),
        }
    }
}
