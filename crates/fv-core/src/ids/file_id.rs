use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Primary key of a stored file. Generated once at upload time and never reused.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileId(String);

impl_id!(FileId);
