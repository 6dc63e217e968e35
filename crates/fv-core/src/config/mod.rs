//! # Configuration DTOs
//!
//! Pure data. Defaults for paths and layering of sources live in the loader
//! (`fv-infra::config`), not here. Empty values are valid facts.

use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration DTO.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Login code table consumed by the identity resolver.
    #[serde(default)]
    pub identities: Vec<IdentityEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Path of the SQLite database file (no existence check here).
    #[serde(default)]
    pub database_path: PathBuf,

    /// Upper bound on pooled connections. `0` means "let the loader decide".
    #[serde(default)]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset, e.g. `info`.
    #[serde(default)]
    pub level: String,

    /// When set, logs are also written to `<dir>/file-vault.log`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// One row of the login table. The partition key is validated when the
/// resolver is built, not here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentityEntry {
    pub code: String,
    pub display_name: String,
    pub partition_key: String,
}
