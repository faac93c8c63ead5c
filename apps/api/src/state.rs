use std::sync::Arc;

use crate::config::Config;
use crate::repository::{ApplicationRepository, JobRepository};
use crate::uploads::FileStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup; nothing in it is mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
    pub uploads: FileStore,
    pub config: Config,
}
