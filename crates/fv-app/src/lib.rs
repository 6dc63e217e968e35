//! File Vault application layer
//!
//! The session controller binds a logged-in identity to its partition and
//! drives the use cases in [`usecases`] against the ports from `fv-core`.

pub mod adapters;
pub mod deps;
pub mod error;
pub mod session;
pub mod usecases;

#[cfg(test)]
pub(crate) mod test_support;

pub use deps::VaultDeps;
pub use error::{UploadFailure, VaultError};
pub use session::VaultSession;
