use crate::models::DbShiftWithUser;
use chrono::{DateTime, Utc};
use eyre::Result;
use shiftcal_core::models::shift::NewShift;
use sqlx::{Pool, Sqlite};

const INSERT_SHIFT: &str = r#"
    INSERT INTO shifts (user_id, title, start_time, end_time, created_at)
    VALUES (?, ?, ?, ?, ?)
"#;

pub async fn list_shifts(pool: &Pool<Sqlite>) -> Result<Vec<DbShiftWithUser>> {
    let shifts = sqlx::query_as::<_, DbShiftWithUser>(
        r#"
        SELECT
            s.id, s.user_id, s.title, s.start_time, s.end_time, s.created_at,
            u.name AS user_name, u.color AS user_color
        FROM shifts s
        JOIN users u ON s.user_id = u.id
        ORDER BY s.start_time ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(shifts)
}

pub async fn list_shifts_by_user_id(
    pool: &Pool<Sqlite>,
    user_id: i64,
) -> Result<Vec<DbShiftWithUser>> {
    let shifts = sqlx::query_as::<_, DbShiftWithUser>(
        r#"
        SELECT
            s.id, s.user_id, s.title, s.start_time, s.end_time, s.created_at,
            u.name AS user_name, u.color AS user_color
        FROM shifts s
        JOIN users u ON s.user_id = u.id
        WHERE s.user_id = ?
        ORDER BY s.start_time ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(shifts)
}

pub async fn get_shift_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<Option<DbShiftWithUser>> {
    let shift = sqlx::query_as::<_, DbShiftWithUser>(
        r#"
        SELECT
            s.id, s.user_id, s.title, s.start_time, s.end_time, s.created_at,
            u.name AS user_name, u.color AS user_color
        FROM shifts s
        JOIN users u ON s.user_id = u.id
        WHERE s.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(shift)
}

pub async fn create_shift(
    pool: &Pool<Sqlite>,
    user_id: i64,
    title: &str,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> Result<i64> {
    tracing::debug!(
        "Creating shift: user_id={}, title={}, start={}, end={}",
        user_id, title, start_time, end_time
    );

    let result = sqlx::query(INSERT_SHIFT)
        .bind(user_id)
        .bind(title)
        .bind(start_time)
        .bind(end_time)
        .bind(Utc::now())
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Inserts every shift or none of them. Ids come back in input order.
pub async fn create_shifts(
    pool: &Pool<Sqlite>,
    user_id: i64,
    shifts: &[NewShift],
) -> Result<Vec<i64>> {
    tracing::debug!("Creating {} shifts for user_id={}", shifts.len(), user_id);

    let now = Utc::now();
    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(shifts.len());

    for shift in shifts {
        let result = sqlx::query(INSERT_SHIFT)
            .bind(user_id)
            .bind(&shift.title)
            .bind(shift.start_time)
            .bind(shift.end_time)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        ids.push(result.last_insert_rowid());
    }

    tx.commit().await?;
    Ok(ids)
}

pub async fn update_shift(
    pool: &Pool<Sqlite>,
    id: i64,
    title: &str,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE shifts
        SET title = ?, start_time = ?, end_time = ?
        WHERE id = ?
        "#,
    )
    .bind(title)
    .bind(start_time)
    .bind(end_time)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_shift(pool: &Pool<Sqlite>, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM shifts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
