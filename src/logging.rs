use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SPLAT_LOG";

/// Installs a stderr fmt subscriber filtered by `SPLAT_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
