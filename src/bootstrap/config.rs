//! # Configuration entry point
//!
//! Picks the config file and hands it to the layered loader in `fv-infra`.
//! No validation happens here.

use std::path::{Path, PathBuf};

use anyhow::Context;
use fv_core::AppConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "FILE_VAULT_CONFIG";
const CONFIG_FILE_NAME: &str = "config.toml";

/// First match wins: `explicit`, then `$FILE_VAULT_CONFIG`, then
/// `<config_dir>/file-vault/config.toml` if that file exists.
///
/// `None` means "defaults and environment only".
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join("file-vault").join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

/// Load configuration from the resolved file (if any) plus `FILE_VAULT__*`
/// overrides.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    let path = resolve_config_path(explicit);
    fv_infra::config::load_config(path.as_deref()).with_context(|| match &path {
        Some(p) => format!("Failed to load configuration from {}", p.display()),
        None => "Failed to load default configuration".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_explicit_path_wins() {
        let explicit = Path::new("/tmp/explicit.toml");
        assert_eq!(resolve_config_path(Some(explicit)), Some(explicit.to_path_buf()));
    }

    #[test]
    fn test_load_config_reads_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [storage]
            database_path = "/tmp/vault-test.db"

            [[identities]]
            code = "1234"
            display_name = "Alice"
            partition_key = "1234"
            "#
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.storage.database_path, PathBuf::from("/tmp/vault-test.db"));
        assert_eq!(config.identities.len(), 1);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = load_config(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.toml"));
    }
}
