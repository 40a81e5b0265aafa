use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    use_cases::waitlist::{STATUS_PENDING, WaitlistRepo},
};

// Rows hold (id, email, created_at, status). Email is lower-cased before it
// gets here; created_at and status are stamped at insert and never touched
// again.
#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn find_id_by_email(&self, email: &str) -> AppResult<Option<Uuid>> {
        let id = sqlx::query_scalar::<_, Uuid>("SELECT id FROM waitlist_entries WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(id)
    }

    async fn insert(&self, email: &str) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO waitlist_entries (id, email, created_at, status) VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(email)
        .bind(Utc::now().naive_utc())
        .bind(STATUS_PENDING)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(id)
    }

    async fn count(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM waitlist_entries")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(count)
    }
}
