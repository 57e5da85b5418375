/// Backend connection configuration
///
/// Loaded from environment variables with development defaults, so the same
/// binary can point at a local backend or a deployed one.
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicatorConfig {
    /// Backend origin, e.g. `https://autograder.example.edu`
    pub base_url: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl CommunicatorConfig {
    /// Load configuration from environment variables
    /// Falls back to defaults for development
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            base_url: lookup("AUTOGRADER_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout_secs: lookup("AUTOGRADER_API_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            user_agent: lookup("AUTOGRADER_API_USER_AGENT").unwrap_or_else(default_user_agent),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for CommunicatorConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn default_user_agent() -> String {
    format!("autograder-frontend/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = CommunicatorConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("autograder-frontend/"));
    }

    #[test]
    fn test_lookup_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("AUTOGRADER_API_BASE_URL", "https://autograder.example.edu"),
            ("AUTOGRADER_API_TIMEOUT_SECS", "5"),
            ("AUTOGRADER_API_USER_AGENT", "grader-ui"),
        ]);
        let config = CommunicatorConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.base_url, "https://autograder.example.edu");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.user_agent, "grader-ui");
    }

    #[test]
    fn test_unparseable_timeout_uses_default() {
        let config = CommunicatorConfig::from_lookup(|key| {
            (key == "AUTOGRADER_API_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert_eq!(config.request_timeout_secs, 30);
    }
}
