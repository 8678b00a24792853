use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ShiftError, ShiftResult};
use crate::models::non_blank;

/// Colors offered by the user forms, as `(label, hex)` pairs.
pub const PALETTE: [(&str, &str); 8] = [
    ("Blue", "#3B82F6"),
    ("Red", "#EF4444"),
    ("Green", "#10B981"),
    ("Purple", "#8B5CF6"),
    ("Orange", "#F59E0B"),
    ("Pink", "#EC4899"),
    ("Indigo", "#6366F1"),
    ("Teal", "#14B8A6"),
];

pub const DEFAULT_COLOR: &str = "#3B82F6";

/// Domain used for the placeholder contact identifiers given to new users.
pub const CONTACT_DOMAIN: &str = "family.local";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub color: String,
}

impl CreateUserRequest {
    /// Checks the request and returns the trimmed name and the color.
    pub fn validate(&self) -> ShiftResult<(&str, &str)> {
        let name = non_blank(&self.name)
            .ok_or_else(|| ShiftError::validation("Name and color are required"))?;
        let color = non_blank(&self.color)
            .ok_or_else(|| ShiftError::validation("Name and color are required"))?;
        check_color(color)?;
        Ok((name, color))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl UpdateUserRequest {
    /// Checks the request; a missing color falls back to [`DEFAULT_COLOR`].
    pub fn validate(&self) -> ShiftResult<(&str, &str)> {
        let name =
            non_blank(&self.name).ok_or_else(|| ShiftError::validation("Name is required"))?;
        let color = self
            .color
            .as_deref()
            .and_then(non_blank)
            .unwrap_or(DEFAULT_COLOR);
        check_color(color)?;
        Ok((name, color))
    }
}

/// Accepts `#RRGGBB` hex colors.
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value.bytes().skip(1).all(|b| b.is_ascii_hexdigit())
}

fn check_color(color: &str) -> ShiftResult<()> {
    if is_hex_color(color) {
        Ok(())
    } else {
        Err(ShiftError::validation(format!(
            "Invalid color '{color}', expected #RRGGBB"
        )))
    }
}

/// Case-insensitive name comparison used to deduplicate users.
pub fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Builds the unique placeholder contact identifier stored for a new user.
///
/// The store requires one, nothing ever mails it.
pub fn contact_identifier(name: &str, now: DateTime<Utc>) -> String {
    let local_part: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let nonce = Uuid::new_v4().simple().to_string();
    format!(
        "{local_part}.{}.{}@{CONTACT_DOMAIN}",
        now.timestamp_millis(),
        &nonce[..8]
    )
}
