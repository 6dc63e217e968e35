use std::path::Path;
use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use fv_core::ports::FileStoreError;
use tracing::info;

/// Embed all diesel migrations at compile time
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for SQLite connection pool
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

const DEFAULT_MAX_CONNECTIONS: u32 = 4;
const BUSY_TIMEOUT_MS: u64 = 5_000;

/// Applied to every pooled connection as it is opened.
#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        // busy_timeout first: switching to WAL takes a write lock that
        // sibling connections may be holding.
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA journal_mode = WAL;",
            BUSY_TIMEOUT_MS
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Open (creating if absent) the database at `database_path` and run
/// migrations.
///
/// This is the storage initialization step and should be called **once at
/// startup**. Calling it again on the same path is harmless: already applied
/// migrations are skipped.
///
/// `max_connections` of `0` falls back to a small default.
pub fn init_db_pool(database_path: &Path, max_connections: u32) -> Result<DbPool, FileStoreError> {
    if let Some(parent) = database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                FileStoreError::StorageUnavailable(format!(
                    "cannot create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let database_url = database_path.to_str().ok_or_else(|| {
        FileStoreError::StorageUnavailable(format!(
            "database path is not valid UTF-8: {}",
            database_path.display()
        ))
    })?;

    let max_size = if max_connections == 0 {
        DEFAULT_MAX_CONNECTIONS
    } else {
        max_connections
    };

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .connection_timeout(Duration::from_secs(10))
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
        .map_err(|e| {
            FileStoreError::StorageUnavailable(format!("failed to open database: {}", e))
        })?;

    run_migrations(&pool)?;

    info!(path = %database_path.display(), max_size, "Database ready");
    Ok(pool)
}

/// Run embedded Diesel migrations
fn run_migrations(pool: &DbPool) -> Result<(), FileStoreError> {
    let mut conn = pool
        .get()
        .map_err(|e| FileStoreError::StorageUnavailable(e.to_string()))?;

    info!("Running database migrations...");
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| FileStoreError::StorageUnavailable(format!("migration failed: {}", e)))?;
    info!(applied = applied.len(), "Database migrations completed");

    Ok(())
}
