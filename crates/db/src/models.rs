use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shiftcal_core::models::{
    shift::ShiftWithUser,
    shift_template::ShiftTemplate,
    user::User,
};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbShiftWithUser {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub user_name: String,
    pub user_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbShiftTemplate {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            color: row.color,
            created_at: row.created_at,
        }
    }
}

impl From<DbShiftWithUser> for ShiftWithUser {
    fn from(row: DbShiftWithUser) -> Self {
        ShiftWithUser {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            start_time: row.start_time,
            end_time: row.end_time,
            created_at: row.created_at,
            user_name: row.user_name,
            user_color: row.user_color,
        }
    }
}

impl From<DbShiftTemplate> for ShiftTemplate {
    fn from(row: DbShiftTemplate) -> Self {
        ShiftTemplate {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            start_time: row.start_time,
            end_time: row.end_time,
            created_at: row.created_at,
        }
    }
}
