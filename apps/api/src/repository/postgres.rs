use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{Application, NewApplication};
use crate::models::job::{Job, NewJob};
use crate::repository::{ApplicationRepository, JobRepository};

pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn insert(&self, job: NewJob) -> Result<Job, AppError> {
        let id = Uuid::new_v4();
        let row = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (id, title, company, description, deadline)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, company, description, deadline
            "#,
        )
        .bind(id)
        .bind(&job.title)
        .bind(&job.company)
        .bind(&job.description)
        .bind(job.deadline)
        .fetch_one(&self.pool)
        .await?;

        debug!("Inserted job {id}");
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Job>, AppError> {
        Ok(sqlx::query_as::<_, Job>(
            "SELECT id, title, company, description, deadline FROM jobs ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, AppError> {
        Ok(sqlx::query_as::<_, Job>(
            "SELECT id, title, company, description, deadline FROM jobs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }
}

pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    async fn insert(&self, application: NewApplication) -> Result<Application, AppError> {
        let id = Uuid::new_v4();
        let row = sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO applications (id, job_id, name, email, phone, resume, cover_letter)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, job_id, name, email, phone, resume, cover_letter
            "#,
        )
        .bind(id)
        .bind(application.job_id)
        .bind(&application.name)
        .bind(&application.email)
        .bind(&application.phone)
        .bind(&application.resume)
        .bind(&application.cover_letter)
        .fetch_one(&self.pool)
        .await?;

        debug!("Inserted application {id} for job {}", application.job_id);
        Ok(row)
    }
}
