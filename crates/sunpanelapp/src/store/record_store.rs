use super::backend::StorageBackend;
use super::Gateway;
use crate::error::{Result, SunpanelError};
use crate::model::{Collection, NewRecord, Record, RecordPatch};
use uuid::Uuid;

pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn collection_path(&self, collection: Collection) -> std::path::PathBuf {
        self.backend.collection_path(collection)
    }
}

impl<B: StorageBackend> Gateway for RecordStore<B> {
    fn list_all(&self, collection: Collection) -> Result<Vec<Record>> {
        self.backend.load_collection(collection)
    }

    fn get(&self, collection: Collection, id: &Uuid) -> Result<Record> {
        self.backend
            .load_collection(collection)?
            .into_iter()
            .find(|r| r.id == *id)
            .ok_or(SunpanelError::RecordNotFound {
                collection,
                id: *id,
            })
    }

    fn create(&mut self, collection: Collection, new: NewRecord) -> Result<Record> {
        let mut records = self.backend.load_collection(collection)?;
        let record = Record::new(new.order_index, new.fields);
        records.push(record.clone());
        self.backend.save_collection(collection, &records)?;

        tracing::debug!(
            collection = %collection,
            id = %record.id,
            order_index = new.order_index,
            "record created"
        );
        Ok(record)
    }

    fn update(&mut self, collection: Collection, id: &Uuid, patch: RecordPatch) -> Result<Record> {
        let mut records = self.backend.load_collection(collection)?;
        let record = records
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or(SunpanelError::RecordNotFound {
                collection,
                id: *id,
            })?;
        patch.apply_to(record);
        let updated = record.clone();
        self.backend.save_collection(collection, &records)?;

        tracing::debug!(
            collection = %collection,
            id = %id,
            order_index = ?patch.order_index,
            fields = patch.fields.len(),
            "record updated"
        );
        Ok(updated)
    }

    fn delete(&mut self, collection: Collection, id: &Uuid) -> Result<()> {
        let mut records = self.backend.load_collection(collection)?;
        let pos = records
            .iter()
            .position(|r| r.id == *id)
            .ok_or(SunpanelError::RecordNotFound {
                collection,
                id: *id,
            })?;
        records.remove(pos);
        self.backend.save_collection(collection, &records)?;

        tracing::debug!(collection = %collection, id = %id, "record deleted");
        Ok(())
    }
}
