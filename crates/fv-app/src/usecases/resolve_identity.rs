use std::sync::Arc;

use fv_core::ports::IdentityResolverPort;
use fv_core::{Identity, LoginCode};
use tracing::{info, warn};

use crate::error::VaultError;

/// Turns a raw login code into an identity.
pub struct ResolveIdentity {
    resolver: Arc<dyn IdentityResolverPort>,
}

impl ResolveIdentity {
    pub fn from_ports(resolver: Arc<dyn IdentityResolverPort>) -> Self {
        Self { resolver }
    }

    /// Malformed and unknown codes both fail with
    /// [`VaultError::InvalidCredential`], so callers cannot tell them apart.
    #[tracing::instrument(name = "usecase.resolve_identity.execute", skip_all)]
    pub fn execute(&self, raw_code: &str) -> Result<Identity, VaultError> {
        let code = match LoginCode::parse(raw_code) {
            Ok(code) => code,
            Err(e) => {
                warn!(reason = %e, "Rejected malformed login code");
                return Err(VaultError::InvalidCredential);
            }
        };

        match self.resolver.resolve(&code) {
            Some(identity) => {
                info!(partition = %identity.partition_key, "Login code resolved");
                Ok(identity)
            }
            None => {
                warn!("Rejected unknown login code");
                Err(VaultError::InvalidCredential)
            }
        }
    }
}
