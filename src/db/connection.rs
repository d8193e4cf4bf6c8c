use std::path::Path;
use std::time::Duration;

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;

use crate::errors::Result;
use crate::settings::DatabaseSettings;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(255) NOT NULL,
        description TEXT NOT NULL,
        price DECIMAL(10, 2) DEFAULT 0.00,
        image_url VARCHAR(2083) DEFAULT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Builds the SQLite connection pool and makes sure the `products` table exists.
///
/// Both steps are fatal at startup: a pool that cannot connect or a table that
/// cannot be created is returned as an error.
pub fn init_pool(settings: &DatabaseSettings) -> Result<DbPool> {
    if let Some(parent) = Path::new(&settings.url).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            tracing::info!(directory = %parent.display(), "Created database directory");
        }
    }

    let manager = ConnectionManager::<SqliteConnection>::new(settings.url.as_str());
    let pool = Pool::builder()
        .max_size(settings.pool_size)
        .connection_timeout(Duration::from_secs(settings.timeout_seconds))
        .build(manager)?;

    ensure_schema(&mut *pool.get()?)?;
    tracing::info!(database = %settings.url, "Connected to the product database");
    Ok(pool)
}

pub fn ensure_schema(conn: &mut SqliteConnection) -> QueryResult<()> {
    diesel::sql_query(CREATE_PRODUCTS_TABLE).execute(conn)?;
    Ok(())
}
