use std::sync::Arc;

use linkbio_core::LinkRepository;

#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn LinkRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &dyn LinkRepository {
        self.repository.as_ref()
    }
}
