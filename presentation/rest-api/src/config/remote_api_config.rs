use std::env;

use remote_api::client::DEFAULT_BASE_URL;

/// Location of the demo users and countries API.
#[derive(Debug, Clone)]
pub struct RemoteApiConfig {
    pub base_url: String,
}

impl RemoteApiConfig {
    /// Environment variables:
    /// - REMOTE_API_URL: base URL of the demo API (default: the hosted demo instance)
    pub fn from_env() -> Self {
        Self::from_value(env::var("REMOTE_API_URL").ok())
    }

    fn from_value(value: Option<String>) -> Self {
        let base_url = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_hosted_demo_api() {
        assert_eq!(RemoteApiConfig::from_value(None).base_url, DEFAULT_BASE_URL);
        assert_eq!(
            RemoteApiConfig::from_value(Some("  ".to_string())).base_url,
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn should_use_configured_url() {
        let config = RemoteApiConfig::from_value(Some("http://localhost:3000".to_string()));

        assert_eq!(config.base_url, "http://localhost:3000");
    }
}
