use super::mem_backend::MemBackend;
use super::record_store::RecordStore;

pub type InMemoryStore = RecordStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        RecordStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Collection, Fields, NewRecord, Record};
    use crate::store::backend::StorageBackend;
    use crate::store::Gateway;
    use serde_json::Value;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds titled records holding order values 0..titles.len().
        pub fn with_titles(mut self, collection: Collection, titles: &[&str]) -> Self {
            let start = self.store.list_all(collection).unwrap().len() as u32;
            for (i, title) in titles.iter().enumerate() {
                self.store
                    .create(
                        collection,
                        NewRecord {
                            order_index: start + i as u32,
                            fields: title_fields(title),
                        },
                    )
                    .unwrap();
            }
            self
        }

        /// Adds a titled record with an arbitrary (possibly missing) order value.
        pub fn with_raw_order(
            mut self,
            collection: Collection,
            title: &str,
            order_index: Option<u32>,
        ) -> Self {
            let created = self
                .store
                .create(
                    collection,
                    NewRecord {
                        order_index: order_index.unwrap_or(0),
                        fields: title_fields(title),
                    },
                )
                .unwrap();
            if order_index.is_none() {
                let mut records = self.store.list_all(collection).unwrap();
                if let Some(r) = records.iter_mut().find(|r| r.id == created.id) {
                    r.order_index = None;
                }
                self.store
                    .backend
                    .save_collection(collection, &records)
                    .unwrap();
            }
            self
        }

        /// Titles in display order.
        pub fn titles(&self, collection: Collection) -> Vec<String> {
            crate::ordering::sort_for_display(&self.store.list_all(collection).unwrap())
                .iter()
                .map(Record::label)
                .collect()
        }
    }

    pub fn title_fields(title: &str) -> Fields {
        let mut fields = Fields::new();
        fields.insert("title".into(), Value::String(title.into()));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use crate::model::Collection;
    use crate::store::Gateway;

    #[test]
    fn fixture_builds_contiguous_collection() {
        let fixture = StoreFixture::new().with_titles(Collection::Services, &["A", "B", "C"]);
        let records = fixture.store.list_all(Collection::Services).unwrap();
        let orders: Vec<_> = records.iter().map(|r| r.order_index).collect();
        assert_eq!(orders, vec![Some(0), Some(1), Some(2)]);
        assert_eq!(fixture.titles(Collection::Services), vec!["A", "B", "C"]);
    }

    #[test]
    fn fixture_appends_after_existing_records() {
        let fixture = StoreFixture::new()
            .with_titles(Collection::Services, &["A"])
            .with_titles(Collection::Services, &["B"]);
        let records = fixture.store.list_all(Collection::Services).unwrap();
        assert_eq!(records[1].order_index, Some(1));
    }

    #[test]
    fn fixture_can_store_missing_order() {
        let fixture = StoreFixture::new().with_raw_order(Collection::Services, "Legacy", None);
        let records = fixture.store.list_all(Collection::Services).unwrap();
        assert_eq!(records[0].order_index, None);
    }
}
