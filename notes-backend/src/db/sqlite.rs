//! SQLite database handle backed by an r2d2 connection pool.
//!
//! Every store operation checks a connection out of the pool and hands it
//! back when the guard drops, so a request never holds a connection longer
//! than the call that needs it.

use std::path::Path;
use std::time::Duration;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;

/// A pooled connection checked out for the duration of one operation.
pub type DbConn = PooledConnection<SqliteConnectionManager>;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("failed to prepare database directory: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open (or create) the database at `path`, creating the parent directory and schema as needed.
    pub fn new(path: &str, pool_size: u32) -> Result<Self, DbError> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let manager = SqliteConnectionManager::file(path).with_init(|conn| {
            conn.busy_timeout(BUSY_TIMEOUT)?;
            conn.execute_batch("PRAGMA journal_mode = WAL;")
        });

        let pool = Pool::builder().max_size(pool_size).build(manager)?;
        let db = Self { pool };
        db.init_tables()?;

        log::debug!("Database ready at {} (pool size {})", path, pool_size);
        Ok(db)
    }

    /// Check out a connection from the pool.
    pub fn conn(&self) -> Result<DbConn, DbError> {
        Ok(self.pool.get()?)
    }

    fn init_tables(&self) -> Result<(), DbError> {
        let conn = self.conn()?;
        super::tables::notes::init_tables(&conn)?;
        Ok(())
    }
}
