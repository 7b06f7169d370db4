//! Logging setup for terra.
//!
//! Events go to stderr in compact form, filtered by the configured level
//! (`RUST_LOG` takes precedence when set). When [`LogSettings::file`] is
//! set, structured JSON logs are additionally written to a daily-rolling
//! file, suitable for ingestion alongside the server's request logs.

use std::path::Path;

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogSettings;

/// Installs the global subscriber. Call once at startup, before any
/// command touches the database.
pub fn init(settings: &LogSettings) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.directive()));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    match settings.file {
        Some(ref path) => {
            let file_layer = fmt::layer()
                .with_writer(file_appender(path))
                .with_ansi(false)
                .json();
            registry.with(file_layer).init();
        }
        None => registry.init(),
    }
}

/// Daily-rolling appender for the given log path, creating the parent
/// directory when missing.
fn file_appender(path: &Path) -> RollingFileAppender {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let _ = std::fs::create_dir_all(dir);

    let name = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("terra.log"));
    tracing_appender::rolling::daily(dir, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogSettings;
    use tempfile::TempDir;

    #[test]
    fn test_file_appender_creates_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("terra.log");

        let _appender = file_appender(&log_path);
        assert!(log_path.parent().unwrap().exists());
    }

    #[test]
    fn test_init_with_configured_file() {
        let temp_dir = TempDir::new().unwrap();
        let settings = LogSettings {
            level: "debug".to_string(),
            file: Some(temp_dir.path().join("terra.log")),
        };

        // The global subscriber can only be installed once per process, so
        // this doubles as the smoke test for the stderr-only path.
        init(&settings);
        tracing::info!("logging initialized");
        assert_eq!(settings.directive(), "terra=debug");
    }
}
