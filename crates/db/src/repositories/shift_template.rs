use crate::models::DbShiftTemplate;
use chrono::Utc;
use eyre::Result;
use shiftcal_core::models::time_of_day::TimeOfDay;
use sqlx::{Pool, Sqlite};

pub async fn list_templates_by_user_id(
    pool: &Pool<Sqlite>,
    user_id: i64,
) -> Result<Vec<DbShiftTemplate>> {
    let templates = sqlx::query_as::<_, DbShiftTemplate>(
        r#"
        SELECT id, user_id, name, start_time, end_time, created_at
        FROM shift_templates
        WHERE user_id = ?
        ORDER BY name
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(templates)
}

pub async fn get_template_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<Option<DbShiftTemplate>> {
    let template = sqlx::query_as::<_, DbShiftTemplate>(
        r#"
        SELECT id, user_id, name, start_time, end_time, created_at
        FROM shift_templates
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(template)
}

pub async fn create_template(
    pool: &Pool<Sqlite>,
    user_id: i64,
    name: &str,
    start_time: TimeOfDay,
    end_time: TimeOfDay,
) -> Result<i64> {
    tracing::debug!(
        "Creating shift template: user_id={}, name={}, {}-{}",
        user_id, name, start_time, end_time
    );

    let result = sqlx::query(
        r#"
        INSERT INTO shift_templates (user_id, name, start_time, end_time, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(start_time.to_string())
    .bind(end_time.to_string())
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn update_template(
    pool: &Pool<Sqlite>,
    id: i64,
    name: &str,
    start_time: TimeOfDay,
    end_time: TimeOfDay,
) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE shift_templates
        SET name = ?, start_time = ?, end_time = ?
        WHERE id = ?
        "#,
    )
    .bind(name)
    .bind(start_time.to_string())
    .bind(end_time.to_string())
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_template(pool: &Pool<Sqlite>, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM shift_templates WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
