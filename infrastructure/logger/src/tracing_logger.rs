use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under a single target so they can
/// be filtered with `RUST_LOG=jamnaw=debug`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "jamnaw", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "jamnaw", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "jamnaw", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "jamnaw", "{}", message);
    }
}
