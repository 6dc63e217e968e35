use crate::db::schema::file_record;
use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = file_record)]
pub struct FileRecordRow {
    /// Insertion order, assigned by SQLite.
    pub seq: i64,
    pub id: String,
    pub partition_key: String,
    pub name: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub payload: Vec<u8>,
    pub created_at_ms: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = file_record)]
pub struct NewFileRecordRow {
    pub id: String,
    pub partition_key: String,
    pub name: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub payload: Vec<u8>,
    pub created_at_ms: i64,
}
