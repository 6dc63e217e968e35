use diesel::SqliteConnection;

use crate::db::error::DbError;
use crate::db::pool::DbPool;
use crate::db::ports::DbExecutor;

/// Runs closures against a pooled connection. Owns the pool handle, so the
/// database stays open for as long as the executor (and the store holding it)
/// is alive.
#[derive(Clone)]
pub struct DieselSqliteExecutor {
    pool: DbPool,
}

impl DieselSqliteExecutor {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl DbExecutor for DieselSqliteExecutor {
    fn run<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> Result<T, DbError>,
    ) -> Result<T, DbError> {
        let mut conn = self.pool.get()?;
        f(&mut conn)
    }
}
