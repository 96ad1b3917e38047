use crate::channel::{register_with, Messenger};
use crate::config::Config;
use crate::service::VersionQueryService;

/// Initialize logging
///
/// `RUST_LOG` wins; otherwise `--verbose` selects debug and the configured
/// level applies. Logs go to stderr so stdout stays free for replies.
pub fn init_logging(verbose: bool, configured_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if verbose {
        "debug".to_string()
    } else {
        configured_level.to_ascii_lowercase()
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

/// Messenger with the host version query service on the configured channel
pub fn build_messenger(config: &Config) -> Messenger {
    let mut messenger = Messenger::new();
    register_with(&mut messenger, &config.channel.name, VersionQueryService::new());
    messenger
}
