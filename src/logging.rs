//! Tracing subscriber setup for the command-line front end.

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Keeps the non-blocking writer alive for the life of the process.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Local-time timestamp formatter for log lines.
pub struct LangbridgeTimer;

impl FormatTime for LangbridgeTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S"))
    }
}

/// What: Directory holding the log file.
///
/// Output:
/// - `$XDG_STATE_HOME/langbridge/logs`, else `$HOME/.local/state/langbridge/logs`,
///   else `./langbridge/logs`
#[must_use]
pub fn logs_dir() -> PathBuf {
    let base = env::var("XDG_STATE_HOME")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".local").join("state"))
        });
    base.map_or_else(
        || PathBuf::from("langbridge").join("logs"),
        |b| b.join("langbridge").join("logs"),
    )
}

/// What: Build the level filter, letting `RUST_LOG` win over `level`.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter directive (e.g., "info", "debug")
///
/// Details:
/// - Writes to `logs_dir()/langbridge.log` through a non-blocking appender
/// - Falls back to stderr when the log file cannot be opened
/// - Calling this more than once is a no-op for the subscriber
pub fn init_logging(level: &str) {
    let mut log_path = logs_dir();
    let opened = fs::create_dir_all(&log_path).and_then(|()| {
        log_path.push("langbridge.log");
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
    });

    match opened {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let installed = tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(LangbridgeTimer)
                .try_init()
                .is_ok();
            let _ = LOG_GUARD.set(guard);
            if installed {
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
        }
        Err(e) => {
            let installed = tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(LangbridgeTimer)
                .try_init()
                .is_ok();
            if installed {
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }
}
