//! Business logic use cases
//!
//! Each use case takes an explicit partition key; deciding *which* partition
//! is the session controller's job.
//!
//! ```text
//! login ──> ResolveIdentity
//!             │ partition key
//!             ▼
//! UploadFiles / ListFiles / DownloadFile / DeleteFile ──> FileStorePort
//! ```

pub mod delete_file;
pub mod download_file;
pub mod list_files;
pub mod resolve_identity;
pub mod upload_files;

pub use delete_file::{DeleteFile, FileSelector};
pub use download_file::DownloadFile;
pub use list_files::ListFiles;
pub use resolve_identity::ResolveIdentity;
pub use upload_files::UploadFiles;
