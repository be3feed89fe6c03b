use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";
pub const DEFAULT_USER_AGENT: &str = "geocoding-client-rs/0.1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodingConfig {
    /// Service root; `/geocode/json` is appended to it
    pub base_url: String,
    /// Credential used when a call does not pass its own
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl GeocodingConfig {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let base_url = lookup("GEOCODING_BASE_URL")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(defaults.base_url);

        let api_key = lookup("GEOCODING_API_KEY").filter(|k| !k.trim().is_empty());

        let timeout = lookup("GEOCODING_TIMEOUT_SECS")
            .and_then(|t| t.trim().parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let user_agent = lookup("GEOCODING_USER_AGENT").unwrap_or(defaults.user_agent);

        Self {
            base_url,
            api_key,
            timeout,
            user_agent,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = GeocodingConfig::default();
        assert_eq!(config.base_url, "https://maps.googleapis.com/maps/api");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_from_lookup_empty_uses_defaults() {
        let config = GeocodingConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, GeocodingConfig::default());
    }

    #[test]
    fn test_from_lookup_reads_all_vars() {
        let config = GeocodingConfig::from_lookup(lookup_from(&[
            ("GEOCODING_BASE_URL", "http://localhost:9000"),
            ("GEOCODING_API_KEY", "secret"),
            ("GEOCODING_TIMEOUT_SECS", "5"),
            ("GEOCODING_USER_AGENT", "tests/1.0"),
        ]));
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "tests/1.0");
    }

    #[test]
    fn test_from_lookup_ignores_bad_values() {
        let config = GeocodingConfig::from_lookup(lookup_from(&[
            ("GEOCODING_API_KEY", "  "),
            ("GEOCODING_TIMEOUT_SECS", "soon"),
        ]));
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
