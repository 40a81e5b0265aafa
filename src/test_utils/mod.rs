//! Test utilities: in-memory and failing repository fakes plus state
//! builders, so route and use-case tests run without Postgres.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    infra::config::AppConfig,
    use_cases::waitlist::{STATUS_PENDING, WaitlistRepo, WaitlistUseCases},
};

#[derive(Debug, Clone)]
pub struct StoredEntry {
    pub id: Uuid,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub status: String,
}

/// In-memory implementation of WaitlistRepo for testing.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<StoredEntry>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with already-registered addresses.
    pub fn with_emails(emails: &[&str]) -> Self {
        let entries = emails
            .iter()
            .map(|email| StoredEntry {
                id: Uuid::new_v4(),
                email: (*email).to_string(),
                created_at: Utc::now().naive_utc(),
                status: STATUS_PENDING.to_string(),
            })
            .collect();
        Self {
            entries: Mutex::new(entries),
        }
    }

    /// Stored addresses, in insertion order (for test assertions).
    pub fn emails(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.email.clone())
            .collect()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn find_id_by_email(&self, email: &str) -> AppResult<Option<Uuid>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.email == email)
            .map(|e| e.id))
    }

    async fn insert(&self, email: &str) -> AppResult<Uuid> {
        let entry = StoredEntry {
            id: Uuid::new_v4(),
            email: email.to_string(),
            created_at: Utc::now().naive_utc(),
            status: STATUS_PENDING.to_string(),
        };
        let id = entry.id;
        self.entries.lock().unwrap().push(entry);
        Ok(id)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.entries.lock().unwrap().len() as i64)
    }
}

/// Repo whose every operation fails, for exercising the 500 paths.
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn find_id_by_email(&self, _email: &str) -> AppResult<Option<Uuid>> {
        Err(AppError::Database("connection refused".to_string()))
    }

    async fn insert(&self, _email: &str) -> AppResult<Uuid> {
        Err(AppError::Database("connection refused".to_string()))
    }

    async fn count(&self) -> AppResult<i64> {
        Err(AppError::Database("connection refused".to_string()))
    }
}

pub fn create_test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        database_url: "postgres://localhost/test".to_string(),
        cors_origin: "http://localhost:3000".parse().unwrap(),
        static_dir: "static".to_string(),
    }
}

pub fn test_app_state(repo: Arc<dyn WaitlistRepo>) -> AppState {
    AppState {
        config: Arc::new(create_test_config()),
        waitlist_use_cases: Arc::new(WaitlistUseCases::new(repo)),
    }
}
