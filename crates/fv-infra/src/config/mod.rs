//! # Configuration Loader
//!
//! Layers, lowest precedence first:
//!
//! 1. Built-in defaults (database under the platform data dir, `info` logging)
//! 2. The TOML file, when one is given
//! 3. `FILE_VAULT__<SECTION>__<KEY>` environment variables
//!
//! The result is the plain [`AppConfig`] DTO; validation of the identity table
//! happens when the resolver is built.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use fv_core::AppConfig;

pub const ENV_PREFIX: &str = "FILE_VAULT";
const APP_DIR_NAME: &str = "file-vault";
const DATABASE_FILE_NAME: &str = "vault.db";
const DEFAULT_MAX_CONNECTIONS: i64 = 4;

/// Where the database lives when nothing else says otherwise:
/// `<data_dir>/file-vault/vault.db`, or the working directory when the
/// platform has no data dir.
pub fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(DATABASE_FILE_NAME)
}

/// Load configuration from an optional TOML file plus process environment.
///
/// # Errors
///
/// Returns error if the given file cannot be read or parsed, or if the merged
/// values do not fit the [`AppConfig`] shape.
pub fn load_config(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    load_config_from(config_path, None)
}

/// Same as [`load_config`], with the environment replaced by `env` when given.
pub fn load_config_from(
    config_path: Option<&Path>,
    env: Option<HashMap<String, String>>,
) -> anyhow::Result<AppConfig> {
    let mut builder = Config::builder()
        .set_default(
            "storage.database_path",
            default_database_path().to_string_lossy().into_owned(),
        )?
        .set_default("storage.max_connections", DEFAULT_MAX_CONNECTIONS)?
        .set_default("logging.level", "info")?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }

    let settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .source(env),
        )
        .build()
        .with_context(|| match config_path {
            Some(path) => format!("Failed to load config file: {}", path.display()),
            None => "Failed to load configuration".to_string(),
        })?;

    settings
        .try_deserialize::<AppConfig>()
        .context("Configuration does not match the expected shape")
}
