use clap::Parser;
use dotenvy::dotenv;

mod alert;
mod commands;
mod config {
    pub mod api_config;
    pub mod app_config;
    pub mod location_config;
    pub mod scan_config;
}
mod screens {
    pub mod account;
    pub mod cart;
    pub mod format;
    pub mod home;
    pub mod item;
    pub mod menu;
    pub mod payment;
    pub mod restaurant;
    pub mod scanner;
}
mod setup {
    pub mod dependency_injection;
    pub mod session;
}

use commands::Cli;
use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, session::Session};

/// Terminal client entry point
///
/// - config/: backend, location and deep-link settings
/// - setup/: dependency injection and the interactive session
/// - screens/: one renderer per app screen, fed by stores and use cases
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter, on stderr so screens stay readable
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration, flags override the environment
    let cli = Cli::parse();
    let config = AppConfig::from_env().with_overrides(&cli);
    tracing::info!(base_url = %config.api.base_url, "Starting session");

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Run the session until stdin closes or `quit`
    Session::new(container).run().await?;

    Ok(())
}
