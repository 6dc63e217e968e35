//! # Dependency wiring
//!
//! The only place that depends on `fv-infra` and `fv-app` together. It
//! assembles concrete adapters behind ports and makes no decisions of its own.

use std::sync::Arc;

use fv_app::{VaultDeps, VaultSession};
use fv_core::ports::FileStoreError;
use fv_core::AppConfig;
use fv_infra::identity::IdentityTableError;
use fv_infra::{DieselFileStore, StaticIdentityResolver, SystemClock};
use tracing::{info, warn};

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Database initialization failed: {0}")]
    DatabaseInit(#[from] FileStoreError),

    #[error("Identity table is invalid: {0}")]
    IdentityTable(#[from] IdentityTableError),
}

/// Everything a presentation layer needs. The database closes when the last
/// session handle is dropped.
pub struct VaultRuntime {
    pub session: Arc<VaultSession>,
}

impl VaultRuntime {
    /// Ends any active session and releases the store.
    pub async fn shutdown(self) {
        self.session.logout().await;
        info!("Vault runtime shut down");
    }
}

/// Open the store, build the identity table and assemble the session.
#[tracing::instrument(
    name = "bootstrap.build_runtime",
    skip_all,
    fields(db = %config.storage.database_path.display())
)]
pub fn build_runtime(config: &AppConfig) -> WiringResult<VaultRuntime> {
    let resolver = StaticIdentityResolver::from_entries(&config.identities)?;
    if resolver.is_empty() {
        warn!("No identities configured; every login will be rejected");
    }

    let store = DieselFileStore::initialize(
        &config.storage.database_path,
        config.storage.max_connections,
    )?;

    let session = VaultSession::new(VaultDeps {
        file_store: Arc::new(store),
        identity_resolver: Arc::new(resolver),
        clock: Arc::new(SystemClock),
    });

    info!(identities = config.identities.len(), "Vault runtime ready");
    Ok(VaultRuntime {
        session: Arc::new(session),
    })
}
