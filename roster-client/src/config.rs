//! Client configuration

/// Default server address
pub const DEFAULT_BASE_URL: &str = "http://localhost:3431";

/// Client configuration for connecting to the Roster Server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3431")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Read the base URL from `var`, falling back to [`DEFAULT_BASE_URL`]
    pub fn from_env_var(var: &str) -> Self {
        let base_url = std::env::var(var)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<super::HttpClient> {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        let config = ClientConfig::default().with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:3431");
        assert_eq!(config.timeout, 5);
    }

    #[test]
    fn unset_env_var_falls_back_to_default() {
        let config = ClientConfig::from_env_var("ROSTER_CLIENT_TEST_UNSET_VAR");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
