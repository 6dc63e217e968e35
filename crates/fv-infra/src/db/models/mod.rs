pub mod file_record_row;

pub use file_record_row::{FileRecordRow, NewFileRecordRow};
