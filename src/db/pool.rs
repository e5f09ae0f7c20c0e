//! Database connection pool

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS flashcards (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NOT NULL,
    answer TEXT NOT NULL
)
"#;

fn is_in_memory(database_path: &str) -> bool {
    database_path.contains(":memory:") || database_path.contains("mode=memory")
}

/// Create a new SQLite connection pool
pub async fn create_pool(database_path: &str) -> Result<SqlitePool, sqlx::Error> {
    let in_memory = is_in_memory(database_path);

    let mut options = SqliteConnectOptions::from_str(database_path)?.create_if_missing(true);

    if !in_memory {
        // Ensure parent directory exists
        let file = database_path
            .trim_start_matches("sqlite://")
            .trim_start_matches("sqlite:");
        if let Some(parent) = Path::new(file).parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    tracing::warn!("Could not create {}: {}", parent.display(), e);
                }
            }
        }
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let mut pool_options = SqlitePoolOptions::new().max_connections(10);

    // Every connection to an in-memory URL opens its own empty database, so
    // keep exactly one and never recycle it.
    if in_memory {
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    }

    let pool = pool_options.connect_with(options).await?;

    Ok(pool)
}

/// Create the `flashcards` table unless it is already provisioned
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Initialize database - create pool and ensure the table exists
pub async fn init_database(database_path: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = create_pool(database_path).await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}
