use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;

pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the diagnostic subscriber for the current thread and returns the
/// guard that keeps it active. `RUST_LOG` replaces the verbosity level.
///
/// Only events from this thread are recorded; the runtime is single-threaded,
/// so events from blocking-pool threads (reqwest's DNS lookups) are dropped.
pub fn init(verbosity: u8) -> DefaultGuard {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));
    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    if verbosity >= 2 {
        let subscriber = tracing_subscriber::registry().with(env_filter).with(layer);
        tracing::subscriber::set_default(subscriber)
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.without_time());
        tracing::subscriber::set_default(subscriber)
    }
}
