#![forbid(unsafe_code)]

pub mod app_services;
pub mod content_service;
pub mod error;
pub mod exercises;
pub mod progress_service;

pub use belajar_core::Clock;

pub use app_services::AppServices;
pub use content_service::{ContentService, UnitMapEntry};
pub use error::{AppServicesError, ContentError, ExerciseError};
pub use exercises::{ExerciseAttempt, ExerciseLoopService, ExerciseSession, ScoredSession};
pub use progress_service::{PROGRESS_STORAGE_KEY, ProgressService};
