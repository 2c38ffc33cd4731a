use shared_types::{ApiConfig, AppConfig};
use std::sync::OnceLock;

static API_CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides `api.posts_url`.
pub const POSTS_URL_ENV: &str = "POSTS_API_URL";

/// Read `config.toml` and the environment once and store the result in the
/// global `OnceLock`. Later calls return the stored config.
///
/// A missing or unparseable file falls back to defaults.
pub fn load_api_config() -> &'static ApiConfig {
    API_CONFIG.get_or_init(read_api_config)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_api_config() -> ApiConfig {
    let _ = dotenvy::dotenv();

    let contents = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => Some(contents),
        Err(e) => {
            tracing::info!(path = CONFIG_PATH, error = %e, "Config file not found, using defaults");
            None
        }
    };

    resolve_api_config(contents.as_deref(), std::env::var(POSTS_URL_ENV).ok())
}

// No filesystem or process environment in the browser; only a build-time override.
#[cfg(target_arch = "wasm32")]
fn read_api_config() -> ApiConfig {
    resolve_api_config(None, option_env!("POSTS_API_URL").map(str::to_string))
}

/// Combine the optional `config.toml` contents with an optional URL override.
/// An empty override is ignored.
pub fn resolve_api_config(contents: Option<&str>, posts_url_override: Option<String>) -> ApiConfig {
    let mut api = match contents {
        Some(contents) => match toml::from_str::<AppConfig>(contents) {
            Ok(config) => config.api,
            Err(e) => {
                tracing::warn!(path = CONFIG_PATH, error = %e, "Failed to parse config, using defaults");
                ApiConfig::default()
            }
        },
        None => ApiConfig::default(),
    };

    if let Some(url) = posts_url_override.filter(|u| !u.trim().is_empty()) {
        api.posts_url = url;
    }

    tracing::debug!(posts_url = %api.posts_url, "Resolved API config");
    api
}
