use anyhow::Result;
use tasklist::commands::Cli;
use tasklist::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    if is_debug_mode() {
        init_logging();
    }

    Cli::menu()
}

/// Installs the fmt subscriber used in debug mode.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tasklist=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
