//! File-only logging for the terminal client.
//!
//! Logs never go to stderr so they do not interleave with the menu.
use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "client.log";

/// Installs the global subscriber writing to `<cache>/logs/<label>/client.log`.
///
/// The filter comes from `RUST_LOG` with `info` as the floor. Keep the
/// returned guard alive for the life of the process or buffered lines are
/// lost on exit.
pub fn setup_logging(label: &str) -> Result<WorkerGuard> {
    let session_log_dir = log_directory().join(label);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!(label, "Logging initialized");
    tracing::info!("Log file: {}", session_log_dir.join(LOG_FILE).display());

    Ok(guard)
}

/// Label used when `GAME_SESSION_LABEL` is not set.
///
/// The session id is not known until bootstrap runs, and bootstrap itself
/// logs, so the launch time stands in for it.
pub fn launch_label() -> String {
    format!("launch_{}", chrono::Utc::now().format("%Y%m%d-%H%M%S"))
}

/// Platform cache directory for logs, falling back to the temp directory.
fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "tabletop")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("tabletop").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_label_is_path_safe() {
        let label = launch_label();
        assert!(label.starts_with("launch_"));
        assert!(
            label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        );
    }

    #[test]
    fn log_directory_ends_in_logs() {
        assert!(log_directory().ends_with("logs"));
    }
}
