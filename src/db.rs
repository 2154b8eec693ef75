use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

// Length bounds live in the schema so that overflows surface as constraint
// violations from the store, not as ad-hoc checks scattered over handlers.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS videos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (length(title) <= 200),
    description TEXT CHECK (description IS NULL OR length(description) <= 1000),
    author TEXT NOT NULL CHECK (length(author) <= 100),
    duration TEXT CHECK (duration IS NULL OR length(duration) <= 50),
    published_at TEXT NOT NULL,
    url TEXT CHECK (url IS NULL OR length(url) <= 500),
    is_deleted BOOLEAN NOT NULL DEFAULT FALSE
)
"#;

pub async fn init_db(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database at {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    create_schema(&pool).await?;

    Ok(pool)
}

pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}
