use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sqlx::SqlitePool;

use crate::services::NoteService;
use crate::uploads::UploadStore;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub uploads: Arc<dyn UploadStore>,
    pub cookie_key: Key,
}

impl AppState {
    pub fn notes(&self) -> NoteService {
        NoteService::new(self.db.clone(), self.uploads.clone())
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
