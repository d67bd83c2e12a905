//! File logging for the CLI.

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::dirs;

/// Setup logging to a per-session file.
///
/// Stdout is reserved for command output. The returned guard flushes the
/// file writer on drop and must live until exit.
pub fn setup_logging(session_id: Option<&str>) -> Result<WorkerGuard> {
    let session_id = session_id
        .map(str::to_string)
        .unwrap_or_else(|| format!("session_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S")));

    // Create session-specific log directory
    let session_log_dir = dirs::log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    // Setup file appender
    let file_appender = tracing_appender::rolling::never(&session_log_dir, "arkana.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    // Create env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::debug!("Log file: {}/arkana.log", session_log_dir.display());

    Ok(guard)
}

