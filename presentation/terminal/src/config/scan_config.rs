/// Deep-link scheme the app answers to when a QR code is scanned.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub app_scheme: String,
}

impl ScanConfig {
    pub fn from_env() -> Self {
        let app_scheme = std::env::var("APP_SCHEME").unwrap_or_else(|_| "myapp".to_string());
        Self { app_scheme }
    }
}
