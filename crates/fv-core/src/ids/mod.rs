//! ID type wrappers for type safety.

mod file_id;
mod id_macro;
mod partition_key;

pub use file_id::FileId;
pub use partition_key::{InvalidPartitionKey, PartitionKey};
