use super::{api_config::ApiConfig, location_config::LocationConfig, scan_config::ScanConfig};
use crate::commands::Cli;

pub struct AppConfig {
    pub api: ApiConfig,
    pub location: LocationConfig,
    pub scan: ScanConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            location: LocationConfig::from_env(),
            scan: ScanConfig::from_env(),
        }
    }

    /// Command-line flags win over environment values.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(base_url) = &cli.base_url {
            self.api.base_url = base_url.clone();
        }
        if let Some(timeout_secs) = cli.timeout_secs.filter(|secs| *secs > 0) {
            self.api.timeout_secs = timeout_secs;
        }
        self
    }
}
