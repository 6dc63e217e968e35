//! Tracing subscriber setup.
//!
//! - `RUST_LOG` wins when set; otherwise the configured level applies to the
//!   workspace crates and everything else stays at `warn`.
//! - Always logs to stdout. When `logging.dir` is set, also writes
//!   `<dir>/file-vault.log` through a non-blocking appender.

use std::{fs, io, path::Path, sync::OnceLock};

use fv_core::config::LoggingConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const DEFAULT_LEVEL: &str = "info";
const LOG_FILE_NAME: &str = "file-vault.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
const WORKSPACE_TARGETS: [&str; 4] = ["file_vault_lib", "fv_core", "fv_infra", "fv_app"];

fn build_filter_directives(level: &str) -> Vec<String> {
    let level = if level.trim().is_empty() {
        DEFAULT_LEVEL
    } else {
        level.trim()
    };

    let mut directives = vec!["warn".to_string()];
    directives.extend(
        WORKSPACE_TARGETS
            .iter()
            .map(|target| format!("{}={}", target, level)),
    );
    directives
}

/// Register the global subscriber. Call once, before anything logs.
///
/// # Errors
///
/// Fails when a global subscriber is already registered or the configured
/// level is not a valid directive. A log directory that cannot be created
/// only disables file output.
pub fn init_tracing_subscriber(logging: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(build_filter_directives(&logging.level).join(","))?,
    };

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stdout));

    let file_layer = logging.dir.as_deref().and_then(|dir| match build_file_writer(dir) {
        Ok(writer) => Some(
            fmt::layer()
                .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer),
        ),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stdout: {err:#}");
            None
        }
    });

    registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives_uses_level_for_workspace() {
        let directives = build_filter_directives("debug");
        assert_eq!(directives[0], "warn");
        assert!(directives.contains(&"fv_infra=debug".to_string()));
        assert!(directives.contains(&"fv_app=debug".to_string()));
    }

    #[test]
    fn test_blank_level_falls_back_to_info() {
        let directives = build_filter_directives("  ");
        assert!(directives.contains(&"fv_core=info".to_string()));
        assert!(directives.contains(&"file_vault_lib=info".to_string()));
    }

    #[test]
    fn test_directives_parse_as_env_filter() {
        assert!(EnvFilter::try_new(build_filter_directives("trace").join(",")).is_ok());
    }
}
