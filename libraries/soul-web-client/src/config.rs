/// Client configuration
use crate::error::{Result, WebClientError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com/v1";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of the web API (e.g., "https://api.spotify.com/v1")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Pre-obtained bearer token
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a config pointing at `base_url` with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Create a config with a pre-obtained access token.
    pub fn with_token(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: Some(access_token.into()),
            ..Self::default()
        }
    }

    /// Load configuration from an optional TOML file and the environment.
    ///
    /// Environment variables prefixed with `SOUL_WEB_` override file values,
    /// e.g. `SOUL_WEB_ACCESS_TOKEN`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(WebClientError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            settings = settings.add_source(config::File::from(path));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("SOUL_WEB")
                .prefix_separator("_")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(WebClientError::InvalidUrl("URL cannot be empty".into()));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(WebClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(url).map_err(|e| WebClientError::InvalidUrl(e.to_string()))?;

        if self.timeout_secs == 0 {
            return Err(WebClientError::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }
        if self.connect_timeout_secs == 0 {
            return Err(WebClientError::Config(
                "connect_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("SoulWebClient/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.access_token.is_none());
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_token() {
        let config = ClientConfig::with_token("http://localhost:8080", "token_123");
        assert_eq!(config.access_token.as_deref(), Some("token_123"));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        assert!(ClientConfig::new("").validate().is_err());
        assert!(ClientConfig::new("example.com").validate().is_err());
        assert!(ClientConfig::new("ftp://example.com").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = ClientConfig::default();
        config.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(WebClientError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "base_url = \"http://localhost:9000/v1\"\naccess_token = \"file_token\"\ntimeout_secs = 5"
        )
        .unwrap();

        let config = ClientConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ClientConfig::load(Some(Path::new("/nonexistent/soul-web.toml")));
        assert!(matches!(result, Err(WebClientError::Config(_))));
    }
}
