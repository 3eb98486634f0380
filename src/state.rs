use axum::extract::FromRef;

use crate::repository::DynRepository;

/// Per-process context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub repo: DynRepository,
}

impl AppState {
    pub fn new(repo: DynRepository) -> Self {
        Self { repo }
    }
}

impl FromRef<AppState> for DynRepository {
    fn from_ref(state: &AppState) -> Self {
        state.repo.clone()
    }
}
