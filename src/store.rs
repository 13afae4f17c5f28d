use tracing::{error, info};

use crate::gateway::{GatewayError, TranslationGateway};
use crate::record::TranslationRecord;

/// In-memory snapshot of every record the backend returned.
///
/// The snapshot is only ever swapped as a whole; records are never patched
/// in place after a mutation.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<TranslationRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the full set from the backend and swap it in.
    ///
    /// On failure the store is left empty, never holding the previous
    /// snapshot. Reporting the failure to the user is the caller's job.
    pub async fn load(&mut self, gateway: &dyn TranslationGateway) -> Result<usize, GatewayError> {
        match gateway.list().await {
            Ok(records) => {
                let count = records.len();
                self.replace_all(records);
                info!("Record store loaded {} translations", count);
                Ok(count)
            }
            Err(e) => {
                error!("Failed to load translations: {}", e);
                self.replace_all(Vec::new());
                Err(e)
            }
        }
    }

    pub fn replace_all(&mut self, records: Vec<TranslationRecord>) {
        self.records = records;
    }

    pub fn all(&self) -> &[TranslationRecord] {
        &self.records
    }

    pub fn find(&self, id: i64) -> Option<&TranslationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Gateway whose `list` succeeds or fails on demand.
    struct ListOnly {
        records: Vec<TranslationRecord>,
        fail: AtomicBool,
    }

    #[async_trait]
    impl TranslationGateway for ListOnly {
        async fn list(&self) -> Result<Vec<TranslationRecord>, GatewayError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(GatewayError::Status {
                    operation: "list",
                    status: 503,
                    body: "unavailable".to_string(),
                });
            }
            Ok(self.records.clone())
        }

        async fn get(&self, _id: i64) -> Result<TranslationRecord, GatewayError> {
            unimplemented!()
        }

        async fn translate(&self, _record: &TranslationRecord) -> Result<String, GatewayError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _id: i64,
            _record: &TranslationRecord,
        ) -> Result<TranslationRecord, GatewayError> {
            unimplemented!()
        }

        async fn delete(&self, _id: i64) -> Result<(), GatewayError> {
            unimplemented!()
        }
    }

    fn records(n: i64) -> Vec<TranslationRecord> {
        (1..=n)
            .map(|id| TranslationRecord {
                id,
                original_text: format!("text {}", id),
                ..TranslationRecord::default()
            })
            .collect()
    }

    #[tokio::test]
    async fn test_load_replaces_snapshot() {
        let gateway = ListOnly {
            records: records(3),
            fail: AtomicBool::new(false),
        };
        let mut store = RecordStore::new();
        store.replace_all(records(10));

        let count = store.load(&gateway).await.expect("Should load");

        assert_eq!(count, 3);
        assert_eq!(store.len(), 3);
        assert_eq!(store.find(2).unwrap().original_text, "text 2");
        assert!(store.find(10).is_none());
    }

    #[tokio::test]
    async fn test_failed_load_leaves_store_empty() {
        let gateway = ListOnly {
            records: records(3),
            fail: AtomicBool::new(false),
        };
        let mut store = RecordStore::new();
        store.load(&gateway).await.expect("Should load");
        assert_eq!(store.len(), 3);

        gateway.fail.store(true, Ordering::SeqCst);
        let result = store.load(&gateway).await;

        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_all_is_wholesale() {
        let mut store = RecordStore::new();
        store.replace_all(records(5));
        store.replace_all(records(2));
        assert_eq!(store.all().len(), 2);
    }
}
