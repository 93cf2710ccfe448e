//! Configuration for the notification settings module

use anyhow::{bail, Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable prefix, e.g. `NOTIFICATION_SETTINGS_REQUEST_TIMEOUT=10s`
pub const ENV_PREFIX: &str = "NOTIFICATION_SETTINGS_";

/// Notification settings configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// WordPress.com REST API root; request paths are joined onto it
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout applied by the REST transport
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Defaults, then the optional YAML file, then `NOTIFICATION_SETTINGS_*` env vars.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment
            .extract()
            .context("Invalid notification settings configuration")?;
        config.validate()
    }

    /// Check the values and normalize the base URL to end with `/`.
    pub fn validate(mut self) -> Result<Self> {
        if !self.api_base_url.ends_with('/') {
            self.api_base_url.push('/');
        }

        let url = self.base_url()?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!(
                "api_base_url must use http or https, got '{}'",
                url.scheme()
            );
        }
        if self.request_timeout.is_zero() {
            bail!("request_timeout must be greater than zero");
        }
        Ok(self)
    }

    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.api_base_url)
            .with_context(|| format!("Invalid api_base_url '{}'", self.api_base_url))
    }
}

fn default_api_base_url() -> String {
    "https://public-api.wordpress.com/rest/v1.1/".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    format!("notification-settings/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_yaml(yaml: &str) -> Result<Config> {
        Config::from_figment(
            Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Yaml::string(yaml)),
        )
    }

    #[test]
    fn test_defaults() {
        let config = Config::default().validate().unwrap();
        assert_eq!(
            config.api_base_url,
            "https://public-api.wordpress.com/rest/v1.1/"
        );
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("notification-settings/"));
    }

    #[test]
    fn test_yaml_overrides_and_normalizes() {
        let config = from_yaml(
            "api_base_url: http://localhost:8080/rest/v1.1\nrequest_timeout: 5s\n",
        )
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:8080/rest/v1.1/");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(from_yaml("api_base_url: ftp://example.com/\n").is_err());
        assert!(from_yaml("api_base_url: not a url\n").is_err());
        assert!(from_yaml("request_timeout: 0s\n").is_err());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(from_yaml("retries: 3\n").is_err());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.request_timeout, Config::default().request_timeout);
    }
}
