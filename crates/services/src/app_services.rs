use std::path::Path;
use std::sync::Arc;

use storage::JsonContentRepository;
use storage::repository::{ContentRepository, Storage};

use crate::Clock;
use crate::content_service::ContentService;
use crate::error::AppServicesError;
use crate::exercises::ExerciseLoopService;
use crate::progress_service::ProgressService;

/// Assembles app-facing services over storage and bundled content.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
    content: Arc<ContentService>,
    exercises: Arc<ExerciseLoopService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and a content directory.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the database or the content cannot be opened.
    pub async fn new_sqlite(
        db_url: &str,
        content_dir: &Path,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let content: Arc<dyn ContentRepository> =
            Arc::new(JsonContentRepository::from_dir(content_dir)?);
        Ok(Self::from_parts(storage, content, clock).await)
    }

    /// Build services from already-opened storage and content.
    pub async fn from_parts(
        storage: Storage,
        content: Arc<dyn ContentRepository>,
        clock: Clock,
    ) -> Self {
        let progress = Arc::new(ProgressService::load(clock, Arc::clone(&storage.blobs)).await);
        let content = Arc::new(ContentService::new(content));
        let exercises = Arc::new(ExerciseLoopService::new(
            Arc::clone(&content),
            Arc::clone(&progress),
        ));

        Self {
            progress,
            content,
            exercises,
        }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn content(&self) -> Arc<ContentService> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn exercises(&self) -> Arc<ExerciseLoopService> {
        Arc::clone(&self.exercises)
    }
}
