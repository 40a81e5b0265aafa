use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use crate::app_error::{AppError, AppResult};

/// Fixed status stamped on every new entry. Nothing transitions it yet.
pub const STATUS_PENDING: &str = "pending";

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn find_id_by_email(&self, email: &str) -> AppResult<Option<Uuid>>;
    async fn insert(&self, email: &str) -> AppResult<Uuid>;
    async fn count(&self) -> AppResult<i64>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    /// Validate, normalize, reject duplicates, insert. Returns the id of the
    /// new entry.
    #[instrument(skip(self))]
    pub async fn join(&self, email: &str) -> AppResult<Uuid> {
        let email = normalize_email(email)?;
        if self.repo.find_id_by_email(&email).await?.is_some() {
            return Err(AppError::AlreadyRegistered);
        }
        self.repo.insert(&email).await
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> AppResult<i64> {
        self.repo.count().await
    }
}

// The check is deliberately shallow: presence of '@' is all the signup form
// ever promised. Addresses are compared and stored lower-cased.
fn normalize_email(raw: &str) -> AppResult<String> {
    if !raw.contains('@') {
        return Err(AppError::InvalidEmail);
    }
    Ok(raw.to_lowercase())
}
