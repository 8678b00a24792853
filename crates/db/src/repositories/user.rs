use crate::models::DbUser;
use chrono::Utc;
use eyre::Result;
use shiftcal_core::models::user::same_name;
use sqlx::{Pool, Sqlite};

pub async fn list_users(pool: &Pool<Sqlite>) -> Result<Vec<DbUser>> {
    let users = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, name, email, color, created_at
        FROM users
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub async fn get_user_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<Option<DbUser>> {
    tracing::debug!("Getting user by id: {}", id);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, name, email, color, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Finds a user whose name matches ignoring case.
///
/// Compared in Rust rather than SQL because SQLite's `lower()` only folds ASCII.
pub async fn find_user_by_name(pool: &Pool<Sqlite>, name: &str) -> Result<Option<DbUser>> {
    let users = list_users(pool).await?;
    Ok(users.into_iter().find(|user| same_name(&user.name, name)))
}

/// Result of [`find_or_create_user`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserLookup {
    Existing(i64),
    Created(i64),
}

impl UserLookup {
    pub fn id(&self) -> i64 {
        match *self {
            UserLookup::Existing(id) | UserLookup::Created(id) => id,
        }
    }
}

/// Returns the user whose name matches ignoring case, inserting one first
/// when nobody has it. Lookup and insert share one transaction.
///
/// A deferred SQLite transaction does not keep two callers from both missing
/// the lookup, so concurrent callers must serialize around this call.
pub async fn find_or_create_user(
    pool: &Pool<Sqlite>,
    name: &str,
    email: &str,
    color: &str,
) -> Result<UserLookup> {
    let mut tx = pool.begin().await?;

    let users = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, name, email, color, created_at
        FROM users
        "#,
    )
    .fetch_all(&mut *tx)
    .await?;
    if let Some(user) = users.into_iter().find(|user| same_name(&user.name, name)) {
        tx.commit().await?;
        return Ok(UserLookup::Existing(user.id));
    }

    tracing::debug!("Creating user: name={}, color={}", name, color);
    let result = sqlx::query(
        r#"
        INSERT INTO users (name, email, color, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(color)
    .bind(Utc::now())
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    Ok(UserLookup::Created(result.last_insert_rowid()))
}

pub async fn create_user(
    pool: &Pool<Sqlite>,
    name: &str,
    email: &str,
    color: &str,
) -> Result<i64> {
    tracing::debug!("Creating user: name={}, color={}", name, color);

    let result = sqlx::query(
        r#"
        INSERT INTO users (name, email, color, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(color)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    tracing::debug!("User created successfully: id={}", id);
    Ok(id)
}

/// Returns the number of rows changed; zero when no user has this id.
pub async fn update_user(pool: &Pool<Sqlite>, id: i64, name: &str, color: &str) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET name = ?, color = ?
        WHERE id = ?
        "#,
    )
    .bind(name)
    .bind(color)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Deletes the user along with their shifts and templates.
pub async fn delete_user(pool: &Pool<Sqlite>, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
