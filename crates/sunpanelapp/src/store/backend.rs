use crate::error::Result;
use crate::model::{Collection, Record};
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (ids, patches, not-found errors).
pub trait StorageBackend {
    /// Load every record of a collection, in stored order.
    /// A collection that was never written is empty, not an error.
    fn load_collection(&self, collection: Collection) -> Result<Vec<Record>>;

    /// Replace the stored collection.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_collection(&self, collection: Collection, records: &[Record]) -> Result<()>;

    /// Where the collection lives.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn collection_path(&self, collection: Collection) -> PathBuf;
}
