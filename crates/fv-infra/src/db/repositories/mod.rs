mod file_store_repo;

pub use file_store_repo::*;
