pub mod file_record_mapper;

pub use file_record_mapper::FileRecordRowMapper;
