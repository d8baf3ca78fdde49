use thiserror::Error;

use crate::model::ParseIdError;
use crate::model::content::ExerciseDecodeError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Id(#[from] ParseIdError),
    #[error(transparent)]
    Exercise(#[from] ExerciseDecodeError),
    #[error("stored progress is not valid JSON: {0}")]
    ProgressJson(#[from] serde_json::Error),
    #[error("stored progress is not a JSON object")]
    ProgressShape,
}
