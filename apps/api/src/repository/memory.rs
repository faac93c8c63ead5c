//! In-memory repositories backing the router tests.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{Application, NewApplication};
use crate::models::job::{Job, NewJob};
use crate::repository::{ApplicationRepository, JobRepository};

#[derive(Default)]
pub struct InMemoryJobRepository {
    jobs: Mutex<Vec<Job>>,
}

impl InMemoryJobRepository {
    pub fn count(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn insert(&self, job: NewJob) -> Result<Job, AppError> {
        let job = Job {
            id: Uuid::new_v4(),
            title: job.title,
            company: job.company,
            description: job.description,
            deadline: job.deadline,
        };
        self.jobs.lock().unwrap().push(job.clone());
        Ok(job)
    }

    async fn find_all(&self) -> Result<Vec<Job>, AppError> {
        Ok(self.jobs.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, AppError> {
        Ok(self.jobs.lock().unwrap().iter().find(|j| j.id == id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryApplicationRepository {
    applications: Mutex<Vec<Application>>,
}

impl InMemoryApplicationRepository {
    pub fn all(&self) -> Vec<Application> {
        self.applications.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn insert(&self, application: NewApplication) -> Result<Application, AppError> {
        let application = Application {
            id: Uuid::new_v4(),
            job_id: application.job_id,
            name: application.name,
            email: application.email,
            phone: application.phone,
            resume: application.resume,
            cover_letter: application.cover_letter,
        };
        self.applications.lock().unwrap().push(application.clone());
        Ok(application)
    }
}

/// A backend that is never reachable, standing in for a database that
/// was down at startup.
pub struct UnavailableStore;

#[async_trait]
impl JobRepository for UnavailableStore {
    async fn insert(&self, _job: NewJob) -> Result<Job, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_all(&self) -> Result<Vec<Job>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Job>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

#[async_trait]
impl ApplicationRepository for UnavailableStore {
    async fn insert(&self, _application: NewApplication) -> Result<Application, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}
