use super::backend::StorageBackend;
use crate::error::{Result, SunpanelError};
use crate::model::{Collection, Record};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since sunpanel is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    collections: RefCell<HashMap<Collection, Vec<Record>>>,
    simulate_write_error: Cell<bool>,
    /// Successful writes left before every further write fails.
    writes_until_failure: Cell<Option<usize>>,
    save_attempts: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Let the next `successes` writes through, then fail every write after.
    pub fn fail_after_writes(&self, successes: usize) {
        self.writes_until_failure.set(Some(successes));
    }

    /// Number of `save_collection` calls seen so far, failed ones included.
    pub fn save_attempts(&self) -> usize {
        self.save_attempts.get()
    }

    fn should_fail(&self) -> bool {
        if self.simulate_write_error.get() {
            return true;
        }
        match self.writes_until_failure.get() {
            Some(0) => true,
            Some(left) => {
                self.writes_until_failure.set(Some(left - 1));
                false
            }
            None => false,
        }
    }
}

impl StorageBackend for MemBackend {
    fn load_collection(&self, collection: Collection) -> Result<Vec<Record>> {
        let collections = self.collections.borrow();
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    fn save_collection(&self, collection: Collection, records: &[Record]) -> Result<()> {
        self.save_attempts.set(self.save_attempts.get() + 1);
        if self.should_fail() {
            return Err(SunpanelError::Gateway("Simulated write error".to_string()));
        }
        let mut collections = self.collections.borrow_mut();
        collections.insert(collection, records.to_vec());
        Ok(())
    }

    fn collection_path(&self, collection: Collection) -> PathBuf {
        PathBuf::from(format!("memory://{}", collection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Fields;

    #[test]
    fn unknown_collection_loads_empty() {
        let backend = MemBackend::new();
        assert!(backend
            .load_collection(Collection::Projects)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn fail_after_writes_lets_the_first_writes_through() {
        let backend = MemBackend::new();
        let records = vec![Record::new(0, Fields::new())];
        backend.fail_after_writes(1);

        assert!(backend
            .save_collection(Collection::Services, &records)
            .is_ok());
        assert!(backend
            .save_collection(Collection::Services, &records)
            .is_err());
        assert!(backend
            .save_collection(Collection::Services, &records)
            .is_err());
        assert_eq!(backend.save_attempts(), 3);
        assert_eq!(backend.load_collection(Collection::Services).unwrap().len(), 1);
    }

    #[test]
    fn simulated_error_blocks_every_write() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let err = backend
            .save_collection(Collection::Services, &[])
            .unwrap_err();
        assert!(matches!(err, SunpanelError::Gateway(_)));
    }
}
