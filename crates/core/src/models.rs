use serde::{Deserialize, Serialize};

pub mod shift;
pub mod shift_template;
pub mod time_of_day;
pub mod user;

/// Body returned by create endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: String,
}

/// Body returned by update and delete endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Returns the trimmed value, or `None` when nothing but whitespace is left.
pub(crate) fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
