use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Valid email is required")]
    InvalidEmail,

    #[error("Email already registered")]
    AlreadyRegistered,

    #[error("Database error: {0}")]
    Database(String),
}

pub type AppResult<T> = Result<T, AppError>;
