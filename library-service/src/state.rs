use crate::models::storage::StorageBackend;
use crate::services::classify::ClassifyService;
use std::path::PathBuf;
use std::sync::Arc;
use tera::Tera;

pub type Backend = Arc<dyn StorageBackend + Send + Sync>;

pub const DEFAULT_STATIC_DIR: &str = "public";

/// Process-wide dependencies, built once in `main` and shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub backend: Backend,
    pub classify: ClassifyService,
    pub templates: Arc<Tera>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(backend: Backend, classify: ClassifyService, templates: Tera) -> Self {
        Self {
            backend,
            classify,
            templates: Arc::new(templates),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }

    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = static_dir.into();
        self
    }
}
