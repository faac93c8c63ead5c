//! Persistence seam for jobs and applications.
//!
//! Handlers only see the traits; `AppState` carries `Arc<dyn …>` so the
//! PostgreSQL backend can be swapped for the in-memory one in tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{Application, NewApplication};
use crate::models::job::{Job, NewJob};

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn insert(&self, job: NewJob) -> Result<Job, AppError>;

    /// All jobs in insertion order.
    async fn find_all(&self) -> Result<Vec<Job>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, AppError>;
}

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn insert(&self, application: NewApplication) -> Result<Application, AppError>;
}
