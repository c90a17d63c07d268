//! File-backed award data provider.

use std::fs;
use std::path::{Path, PathBuf};

use awardflow_core::session::{AllocationEditRequest, AwardDataProviderTrait};
use awardflow_core::{AwardData, Error, Result};

/// Reads an award round from a JSON document on disk.
pub struct JsonFileAwardProvider {
    path: PathBuf,
}

impl JsonFileAwardProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AwardDataProviderTrait for JsonFileAwardProvider {
    fn load_award_data(&self) -> Result<AwardData> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            Error::DataProvider(format!("Cannot read {}: {}", self.path.display(), e))
        })?;
        let data: AwardData = serde_json::from_str(&raw)?;
        tracing::debug!("Loaded award {} from {}", data.id, self.path.display());
        Ok(data)
    }
}

/// Reads a JSON array of cell edits.
pub fn load_edits(path: &Path) -> Result<Vec<AllocationEditRequest>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| Error::DataProvider(format!("Cannot read {}: {}", path.display(), e)))?;
    Ok(serde_json::from_str(&raw)?)
}
