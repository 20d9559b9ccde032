//! Tracing setup for the terminal client.
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Keeps the background log writer alive; drop it last.
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Installs a file-only subscriber under `<log dir>/<session_id>/client.log`.
///
/// The terminal carries the narrative, so nothing is logged to stderr.
/// `RUST_LOG` overrides the default `info` filter.
pub fn setup_logging(session_id: &str) -> Result<LogGuard> {
    setup_logging_in(&crate::dirs::log_dir(), session_id)
}

pub fn setup_logging_in(log_dir: &Path, session_id: &str) -> Result<LogGuard> {
    let session_log_dir = log_dir.join(session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("a tracing subscriber is already installed")?;

    let file = session_log_dir.join("client.log");
    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", file.display());

    Ok(LogGuard { _guard: guard })
}

/// A session name derived from the current time.
pub fn generated_session_id() -> String {
    format!("session_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_valid_slot_names() {
        let id = generated_session_id();
        assert!(id.starts_with("session_"));
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        // session_YYYYMMDD_HHMMSS
        assert_eq!(id.len(), "session_".len() + 15);
    }
}
