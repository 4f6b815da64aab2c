use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use ladle_core::errors::StoreError;
use ladle_core::traits::IRecipeStore;
use ladle_core::{LadleResult, RecipeRecord};

use crate::heal;

/// JSON-file-backed store. The whole collection is one JSON array in the
/// canonical persisted shape; timestamps cross the boundary as ISO-8601
/// strings and are parsed back to `DateTime<Utc>` on load.
pub struct JsonStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonStore {
    /// Create a store over `path`. The file is not touched until the first
    /// load or save.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    /// Compact JSON output instead of pretty-printed.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl IRecipeStore for JsonStore {
    fn load(&self) -> LadleResult<Vec<RecipeRecord>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "store file absent, starting empty");
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| self.io_err(e))?;
        let mut records: Vec<RecipeRecord> =
            serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        heal::repair_all(&mut records);
        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "loaded recipe collection"
        );
        Ok(records)
    }

    fn save(&self, records: &[RecipeRecord]) -> LadleResult<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };

        // Write-then-rename so a failed save never truncates the previous
        // good file.
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp).map_err(|e| self.io_err(e))?;
            file.write_all(json.as_bytes()).map_err(|e| self.io_err(e))?;
            file.sync_all().map_err(|e| self.io_err(e))?;
        }
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "saved recipe collection"
        );
        Ok(())
    }
}
