use thiserror::Error;

/// Failures below the repository boundary. Repositories translate these into
/// `FileStoreError` depending on whether they were reading or writing.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("row mapping failed: {0}")]
    Mapping(#[from] anyhow::Error),
}
