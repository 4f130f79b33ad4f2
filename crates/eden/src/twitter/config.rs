//! Twitter client configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{EdenError, EdenResult};

/// Configuration for [`TwitterClient`](super::TwitterClient).
///
/// Requests are not signed here. Pass the `Authorization` header value
/// produced by your OAuth layer in `authorization`, or an app-only
/// `bearer_token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterConfig {
    /// Base URL for the v1 REST API (default: https://api.twitter.com/1/)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "duration_secs")]
    pub timeout: Duration,

    /// User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Pre-signed `Authorization` header value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,

    /// OAuth 2.0 Bearer Token (for app-only auth)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
}

fn default_api_url() -> String {
    "https://api.twitter.com/1/".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    format!("eden/{}", env!("CARGO_PKG_VERSION"))
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            authorization: None,
            bearer_token: None,
        }
    }
}

impl TwitterConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> EdenResult<Self> {
        let config: Self = toml::from_str(raw)
            .map_err(|e| EdenError::config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> EdenResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            EdenError::config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&raw).map_err(|e| match e {
            EdenError::Config(msg) => EdenError::config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Build a config from `EDEN_TWITTER_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> EdenResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> EdenResult<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup("EDEN_TWITTER_API_URL") {
            config.api_url = url;
        }
        if let Some(secs) = lookup("EDEN_TWITTER_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                EdenError::config(format!("EDEN_TWITTER_TIMEOUT_SECS is not a number: {secs}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(agent) = lookup("EDEN_TWITTER_USER_AGENT") {
            config.user_agent = agent;
        }
        config.authorization = lookup("EDEN_TWITTER_AUTHORIZATION").filter(|v| !v.is_empty());
        config.bearer_token = lookup("EDEN_TWITTER_BEARER_TOKEN").filter(|v| !v.is_empty());
        config.validate()?;
        Ok(config)
    }

    /// Check the config for obvious mistakes.
    pub fn validate(&self) -> EdenResult<()> {
        self.base_url()?;
        if self.timeout.is_zero() {
            return Err(EdenError::config("timeout must be non-zero"));
        }
        if self.authorization.is_some() && self.bearer_token.is_some() {
            return Err(EdenError::config(
                "authorization and bearer_token are mutually exclusive",
            ));
        }
        Ok(())
    }

    /// API base URL, always ending in `/` so endpoint paths join under it.
    pub fn base_url(&self) -> EdenResult<Url> {
        let mut raw = self.api_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw)
            .map_err(|e| EdenError::config(format!("invalid api_url '{}': {e}", self.api_url)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(EdenError::config(format!(
                "api_url must be http or https, got '{other}'"
            ))),
        }
    }

    /// `Authorization` header value to send, if any.
    pub fn authorization_header(&self) -> Option<String> {
        self.authorization
            .clone()
            .or_else(|| self.bearer_token.as_ref().map(|t| format!("Bearer {t}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = TwitterConfig::default();
        assert_eq!(config.api_url, "https://api.twitter.com/1/");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("eden/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn toml_with_defaults() {
        let config = TwitterConfig::from_toml_str(
            r#"
            api_url = "http://localhost:8080/1"
            timeout = 5
            bearer_token = "abc"
            "#,
        )
        .unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.base_url().unwrap().as_str(), "http://localhost:8080/1/");
        assert_eq!(config.authorization_header().as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn toml_rejects_bad_values() {
        assert!(TwitterConfig::from_toml_str("timeout = 0").is_err());
        assert!(TwitterConfig::from_toml_str("api_url = \"ftp://x\"").is_err());
        assert!(TwitterConfig::from_toml_str("timeout = \"soon\"").is_err());
        let both = "authorization = \"OAuth x\"\nbearer_token = \"y\"";
        assert!(TwitterConfig::from_toml_str(both).is_err());
    }

    #[test]
    fn env_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("EDEN_TWITTER_API_URL", "http://127.0.0.1:9000/1/"),
            ("EDEN_TWITTER_TIMEOUT_SECS", "12"),
            ("EDEN_TWITTER_AUTHORIZATION", "OAuth oauth_token=\"t\""),
            ("EDEN_TWITTER_BEARER_TOKEN", ""),
        ]);
        let config =
            TwitterConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(12));
        assert_eq!(config.bearer_token, None);
        assert_eq!(
            config.authorization_header().as_deref(),
            Some("OAuth oauth_token=\"t\"")
        );

        let bad = TwitterConfig::from_lookup(|k| {
            (k == "EDEN_TWITTER_TIMEOUT_SECS").then(|| "ten".to_string())
        });
        assert!(bad.unwrap_err().to_string().contains("not a number"));
    }

    #[test]
    fn load_reads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_url = \"https://api.example.test/1\"").unwrap();
        writeln!(file, "timeout = 7").unwrap();
        writeln!(file, "user_agent = \"eden-test\"").unwrap();
        writeln!(file, "authorization = \"OAuth oauth_token=\\\"t\\\"\"").unwrap();

        let config = TwitterConfig::load(file.path()).unwrap();
        assert_eq!(config.api_url, "https://api.example.test/1");
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert_eq!(config.user_agent, "eden-test");
        assert_eq!(
            config.authorization_header().as_deref(),
            Some("OAuth oauth_token=\"t\"")
        );
        assert_eq!(config.bearer_token, None);
    }

    #[test]
    fn load_reports_invalid_file_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout = 0").unwrap();

        let err = TwitterConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, EdenError::Config(_)));
        assert!(err.to_string().contains(&file.path().display().to_string()), "{err}");
    }

    #[test]
    fn load_missing_file() {
        let err = TwitterConfig::load("/nonexistent/eden.toml").unwrap_err();
        assert!(matches!(err, EdenError::Config(_)));
    }
}
