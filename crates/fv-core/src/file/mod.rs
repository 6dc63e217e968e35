//! File vault domain models.

mod record;
mod upload;

pub use record::{DownloadedFile, FileRecord, FileSummary, DEFAULT_MIME_TYPE};
pub use upload::{UploadFile, UploadProgress, UploadReport};
