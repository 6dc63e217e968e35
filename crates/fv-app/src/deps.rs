//! # Session Dependencies
//!
//! Parameter grouping for [`VaultSession`](crate::VaultSession) construction.
//! All dependencies are required; there are no defaults.

use std::sync::Arc;

use fv_core::ports::{ClockPort, FileStorePort, IdentityResolverPort};

pub struct VaultDeps {
    pub file_store: Arc<dyn FileStorePort>,
    pub identity_resolver: Arc<dyn IdentityResolverPort>,
    pub clock: Arc<dyn ClockPort>,
}
