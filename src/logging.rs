//! Tracing subscriber setup

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::{PathfinderError, Result};

/// Install the global subscriber.
///
/// Output goes to stderr so CLI results on stdout stay clean. `RUST_LOG`
/// wins over the configured level; `verbose` forces debug output.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let default_directive = if verbose {
        "pathfinder=debug,tower_http=debug".to_string()
    } else {
        format!("pathfinder={},tower_http={}", config.level, config.level)
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let (json_layer, pretty_layer) = if config.format == "json" {
        (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            ),
            None,
        )
    } else {
        (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            ),
        )
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .map_err(|e| PathfinderError::general(format!("Failed to initialize logging: {e}")))
}
