pub mod waitlist;

use sqlx::PgPool;

use crate::app_error::AppError;

pub struct PostgresPersistence {
    pub pool: PgPool,
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        // A racing insert can trip the unique index on email after the
        // duplicate lookup passed. Same outcome as the lookup path.
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return AppError::AlreadyRegistered;
            }
        }
        AppError::Database(err.to_string())
    }
}
