use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://130.225.170.52:10331";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the restaurant backend
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Load backend configuration from environment variables
    ///
    /// Environment variables:
    /// - API_BASE_URL: Backend root URL (default: "http://130.225.170.52:10331")
    /// - API_TIMEOUT_SECS: Per-request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let base_url = env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = parse_timeout(env::var("API_TIMEOUT_SECS").ok().as_deref());

        Self {
            base_url,
            timeout_secs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn parse_timeout(value: Option<&str>) -> u64 {
    value
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}
