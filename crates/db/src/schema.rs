use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Sqlite};
use tracing::info;

/// Users inserted into an empty store: `(name, email, color)`.
pub const SAMPLE_USERS: [(&str, &str, &str); 3] = [
    ("John Doe", "john@example.com", "#3B82F6"),
    ("Sarah Smith", "sarah@example.com", "#EF4444"),
    ("Mike Johnson", "mike@example.com", "#10B981"),
];

pub async fn initialize_database(pool: &Pool<Sqlite>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            color TEXT NOT NULL DEFAULT '#3B82F6',
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create shifts table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shifts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            start_time DATETIME NOT NULL,
            end_time DATETIME NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create shift_templates table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shift_templates (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            start_time TEXT NOT NULL,
            end_time TEXT NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_shifts_user_id ON shifts(user_id);
        CREATE INDEX IF NOT EXISTS idx_shifts_start_time ON shifts(start_time);
        CREATE INDEX IF NOT EXISTS idx_shift_templates_user_id ON shift_templates(user_id);
        "#,
    )
    .execute(pool)
    .await?;

    seed_sample_users(pool).await?;

    info!("Database schema initialized successfully.");
    Ok(())
}

/// Inserts [`SAMPLE_USERS`] when the users table is empty. Returns how many were added.
pub async fn seed_sample_users(pool: &Pool<Sqlite>) -> Result<usize> {
    let mut tx = pool.begin().await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&mut *tx)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    let now = Utc::now();
    for (name, email, color) in SAMPLE_USERS {
        sqlx::query(
            r#"
            INSERT INTO users (name, email, color, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(color)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    info!("Sample users created");
    Ok(SAMPLE_USERS.len())
}
