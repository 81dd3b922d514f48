use std::sync::Arc;

use uuid::Uuid;

use crate::cache::{SessionCache, SharedSession};
use crate::catalog::Catalog;
use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub sessions: SessionCache,
}

impl AppState {
    pub fn new(catalog: Catalog, sessions: SessionCache) -> Self {
        AppState {
            catalog: Arc::new(catalog),
            sessions,
        }
    }

    pub async fn session(&self, id: Uuid) -> Result<SharedSession, ApiError> {
        self.sessions
            .get(id)
            .await
            .ok_or(ApiError::SessionNotFound(id))
    }
}
