use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ShiftError {
    pub fn validation(message: impl Into<String>) -> Self {
        ShiftError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ShiftError::NotFound(message.into())
    }
}

pub type ShiftResult<T> = Result<T, ShiftError>;
