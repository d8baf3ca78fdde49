use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use belajar_core::model::UnitId;
use belajar_core::model::content::{Unit, UnitSummary};

use crate::repository::{ContentRepository, StorageError};

/// File holding the unit index inside a content directory.
pub const UNIT_INDEX_FILE: &str = "units.json";

/// File name holding the content of a unit.
#[must_use]
pub fn unit_file_name(id: UnitId) -> String {
    format!("unit{id}.json")
}

/// Content loaded once from static JSON files and served from memory.
///
/// Units listed in the index without a matching file are "coming soon":
/// they appear on the map but `get_unit` returns `None`.
#[derive(Clone, Default)]
pub struct JsonContentRepository {
    index: Vec<UnitSummary>,
    units: BTreeMap<UnitId, Arc<Unit>>,
}

impl JsonContentRepository {
    /// Build from already-decoded content.
    #[must_use]
    pub fn from_parts(index: Vec<UnitSummary>, units: Vec<Unit>) -> Self {
        let units = units
            .into_iter()
            .map(|unit| (unit.id, Arc::new(unit)))
            .collect();
        Self { index, units }
    }

    /// Load `units.json` and every `unit<N>.json` present in `dir`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the index or a unit file cannot be read,
    /// and `StorageError::Serialization` if any file is not valid content JSON.
    pub fn from_dir(dir: &Path) -> Result<Self, StorageError> {
        let index: Vec<UnitSummary> = read_json(&dir.join(UNIT_INDEX_FILE))?;

        let mut units = Vec::new();
        for summary in &index {
            let path = dir.join(unit_file_name(summary.id));
            if !path.exists() {
                tracing::debug!(unit = %summary.id, "no content file, unit is coming soon");
                continue;
            }
            let unit: Unit = read_json(&path)?;
            if unit.id != summary.id {
                return Err(StorageError::Serialization(format!(
                    "{} declares unit {} but is indexed as unit {}",
                    path.display(),
                    unit.id,
                    summary.id
                )));
            }
            units.push(unit);
        }

        tracing::info!(
            dir = %dir.display(),
            indexed = index.len(),
            authored = units.len(),
            "loaded course content"
        );
        Ok(Self::from_parts(index, units))
    }
}

impl ContentRepository for JsonContentRepository {
    fn list_units(&self) -> Vec<UnitSummary> {
        self.index.clone()
    }

    fn get_unit(&self, id: UnitId) -> Option<Arc<Unit>> {
        self.units.get(&id).cloned()
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let raw = std::fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw)
        .map_err(|err| StorageError::Serialization(format!("{}: {err}", path.display())))
}
