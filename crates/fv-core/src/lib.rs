//! # fv-core
//!
//! Core domain models and ports for File Vault.
//!
//! This crate contains pure business types without any infrastructure dependencies.
//! Persistence, identity lookup and time all come in through the traits in [`ports`].

pub mod config;
pub mod file;
pub mod identity;
pub mod ids;
pub mod ports;
pub mod session;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use file::{DownloadedFile, FileRecord, FileSummary, UploadFile, UploadProgress, UploadReport};
pub use identity::{Identity, LoginCode};
pub use ids::{FileId, PartitionKey};
pub use session::SessionState;
