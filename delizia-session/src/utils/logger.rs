//! Logging Infrastructure
//!
//! Structured logging setup for development (pretty) and production (JSON).
//! Features:
//! - Console output, filtered by `RUST_LOG` or the configured level
//! - Optional daily rotating application logs under `<log_dir>/app`
//!   (deleted after 14 days)

use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

/// Days an application log file is kept
pub const LOG_RETENTION_DAYS: i64 = 14;

const APP_LOG_PREFIX: &str = "app";
const APP_LOG_SUFFIX: &str = "log";

/// Delete application log files older than [`LOG_RETENTION_DAYS`]
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<usize> {
    let cutoff = Local::now().date_naive() - chrono::Duration::days(LOG_RETENTION_DAYS);
    cleanup_logs_before(log_dir, cutoff)
}

/// Delete `app.YYYY-MM-DD.log` files dated strictly before `cutoff`
///
/// Returns the number of files removed. Files that don't follow the naming
/// pattern are left alone.
pub fn cleanup_logs_before(log_dir: &Path, cutoff: NaiveDate) -> anyhow::Result<usize> {
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if let Some(date_part) = name
            .strip_prefix("app.")
            .and_then(|d| d.strip_suffix(".log"))
            && let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && date < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
            removed += 1;
        }
    }

    Ok(removed)
}

/// Initialize the logging system with optional daily rotating file output
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn"); `RUST_LOG` wins if set
/// * `json_format` - JSON lines (production) instead of pretty output
/// * `log_dir` - Optional directory for file logging
///
/// # Examples
/// ```no_run
/// use delizia_session::utils::logger::init_logger_with_file;
///
/// // Development setup (console only)
/// init_logger_with_file("debug", false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            let app_log_dir = log_dir.join("app");
            fs::create_dir_all(&app_log_dir)?;

            // Rotated daily, subject to the 14-day cleanup
            let app_log = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(APP_LOG_PREFIX)
                .filename_suffix(APP_LOG_SUFFIX)
                .build(&app_log_dir)?;

            let layer = if json_format {
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::sync::Mutex::new(app_log))
                    .boxed()
            } else {
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(app_log))
                    .boxed()
            };

            // Start cleanup task
            if let Ok(runtime) = tokio::runtime::Handle::try_current() {
                runtime.spawn(periodic_cleanup(log_dir.to_path_buf()));
            }

            Some(layer)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Periodic cleanup task - runs every hour to clean old logs
async fn periodic_cleanup(log_dir: PathBuf) {
    use tokio::time::{Duration, sleep};

    loop {
        if let Err(e) = cleanup_old_logs(&log_dir) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }
        sleep(Duration::from_secs(3600)).await;
    }
}

/// Initialize the logging system (console only)
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_cleanup_removes_only_old_app_logs() {
        let root = tempfile::tempdir().unwrap();
        let app = root.path().join("app");
        fs::create_dir_all(&app).unwrap();

        touch(&app, "app.2026-09-01.log");
        touch(&app, "app.2026-10-04.log");
        touch(&app, "app.2026-10-05.log");
        touch(&app, "app.2026-10-19.log");
        touch(&app, "notes.txt");
        touch(&app, "app.not-a-date.log");

        let cutoff = NaiveDate::from_ymd_opt(2026, 10, 5).unwrap();
        let removed = cleanup_logs_before(root.path(), cutoff).unwrap();
        assert_eq!(removed, 2);

        let mut left: Vec<String> = fs::read_dir(&app)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();
        assert_eq!(
            left,
            vec![
                "app.2026-10-05.log",
                "app.2026-10-19.log",
                "app.not-a-date.log",
                "notes.txt",
            ]
        );
    }

    #[test]
    fn test_cleanup_without_app_dir() {
        let root = tempfile::tempdir().unwrap();
        assert_eq!(cleanup_old_logs(root.path()).unwrap(), 0);
    }
}
