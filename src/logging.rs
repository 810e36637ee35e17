//! src/logging.rs
//!
//! File-backed tracing setup. The terminal owns stdout while the UI runs,
//! so log lines go to a rolling file under the system temp dir.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber. Returns `None` when the log dir cannot
/// be created or a subscriber is already set; the app runs fine without
/// logs. Keep the guard alive until exit or buffered lines are dropped.
pub fn init() -> Option<WorkerGuard> {
    let dir = std::env::temp_dir().join("cvforge").join("logs");
    std::fs::create_dir_all(&dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(&dir, "cvforge.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cvforge=info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true),
    );
    if subscriber.try_init().is_err() {
        return None;
    }

    tracing::info!(log_dir = %dir.display(), "tracing initialized");
    Some(guard)
}
