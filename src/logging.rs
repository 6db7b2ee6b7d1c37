//! Tracing initialisation for the host binary

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Verbosity;

/// Filter directive for a verbosity level, falling back to the configured one
pub fn level_for(verbosity: Verbosity, configured: &str) -> String {
    match verbosity {
        Verbosity::Quiet => "error".to_string(),
        Verbosity::Normal => configured.to_string(),
        Verbosity::Verbose => "info".to_string(),
        Verbosity::VeryVerbose => "debug".to_string(),
    }
}

/// Install a stderr fmt subscriber. `RUST_LOG` takes precedence over `log_level`.
pub fn init_tracing(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(Verbosity::Quiet, "warn"), "error");
        assert_eq!(level_for(Verbosity::Normal, "warn"), "warn");
        assert_eq!(level_for(Verbosity::Verbose, "warn"), "info");
        assert_eq!(level_for(Verbosity::VeryVerbose, "warn"), "debug");
    }
}
