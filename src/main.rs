use anyhow::Result;
use timecal::commands::Cli;
use timecal::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // The message macros route through tracing in debug mode, so the
    // subscriber only exists when TIMECAL_DEBUG or RUST_LOG is set.
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Cli::menu().await
}
