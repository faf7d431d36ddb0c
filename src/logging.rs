//! Subscriber setup for the binaries. The library only emits events.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

/// Install a stderr fmt subscriber. `RUST_LOG` wins over `config.log_level`.
///
/// Fails if the filter does not parse or a global subscriber already exists.
pub fn init_logging(config: &Config) -> Result<(), String> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| format!("invalid log filter '{}': {e}", config.log_level))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| e.to_string())
}
