use super::backend::StorageBackend;
use crate::error::{Result, SunpanelError};
use crate::model::{Collection, Record};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    data_dir: PathBuf,
    pretty: bool,
}

impl FsBackend {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            pretty: true,
        }
    }

    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(SunpanelError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_collection(&self, collection: Collection) -> Result<Vec<Record>> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(SunpanelError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(SunpanelError::Serialization)?;
        Ok(records)
    }

    fn save_collection(&self, collection: Collection, records: &[Record]) -> Result<()> {
        self.ensure_dir()?;

        let target = self.collection_path(collection);
        let content = if self.pretty {
            serde_json::to_string_pretty(records)
        } else {
            serde_json::to_string(records)
        }
        .map_err(SunpanelError::Serialization)?;

        // Atomic write
        let tmp = self
            .data_dir
            .join(format!(".{}-{}.tmp", collection, Uuid::new_v4()));
        fs::write(&tmp, content).map_err(SunpanelError::Io)?;
        fs::rename(&tmp, &target).map_err(SunpanelError::Io)?;

        tracing::debug!(
            collection = %collection,
            records = records.len(),
            path = %target.display(),
            "collection written"
        );
        Ok(())
    }

    fn collection_path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection))
    }
}
