//! Port interfaces for the application layer
//!
//! Ports define the contract between the session controller and the
//! infrastructure implementations. The storage engine, the identity table,
//! the clock and payload sources are all swappable behind these traits.

mod clock;
pub mod errors;
mod file_store;
mod identity_resolver;
mod payload_source;
mod upload_progress;

pub use clock::ClockPort;
pub use errors::FileStoreError;
pub use file_store::FileStorePort;
pub use identity_resolver::IdentityResolverPort;
pub use payload_source::{InMemoryPayload, PayloadSourcePort};
pub use upload_progress::{NoopUploadProgress, UploadProgressPort};
