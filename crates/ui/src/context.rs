use std::sync::Arc;

use belajar_core::model::Progress;
use dioxus::prelude::*;
use services::{ContentService, ExerciseLoopService, ProgressService};

pub trait UiApp: Send + Sync {
    fn progress(&self) -> Arc<ProgressService>;
    fn content(&self) -> Arc<ContentService>;
    fn exercises(&self) -> Arc<ExerciseLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    progress: Arc<ProgressService>,
    content: Arc<ContentService>,
    exercises: Arc<ExerciseLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            progress: app.progress(),
            content: app.content(),
            exercises: app.exercises(),
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Reactive copy of the committed progress record.
///
/// Views read it to render and call `refresh` after every progress mutation.
#[derive(Clone, Copy, PartialEq)]
pub struct ProgressState {
    snapshot: Signal<Progress>,
}

impl ProgressState {
    /// Current snapshot. Subscribes the calling component to changes.
    #[must_use]
    pub fn get(&self) -> Progress {
        self.snapshot.read().clone()
    }

    pub fn refresh(&mut self, service: &ProgressService) {
        self.snapshot.set(service.snapshot());
    }
}

/// Provide `ProgressState` to the component tree below the caller.
pub fn use_progress_provider(ctx: &AppContext) -> ProgressState {
    use_context_provider(|| ProgressState {
        snapshot: Signal::new(ctx.progress.snapshot()),
    })
}

#[must_use]
pub fn use_progress() -> ProgressState {
    use_context::<ProgressState>()
}
