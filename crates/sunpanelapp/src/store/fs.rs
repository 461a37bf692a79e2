use super::fs_backend::FsBackend;
use super::record_store::RecordStore;
use std::path::{Path, PathBuf};

/// Production store: one JSON document per collection under a data directory.
pub type FileStore = RecordStore<FsBackend>;

impl FileStore {
    pub fn new_fs(data_dir: PathBuf) -> Self {
        RecordStore::with_backend(FsBackend::new(data_dir))
    }

    pub fn with_pretty_json(self, pretty: bool) -> Self {
        RecordStore::with_backend(self.backend.with_pretty_json(pretty))
    }

    pub fn data_dir(&self) -> &Path {
        self.backend.data_dir()
    }
}
