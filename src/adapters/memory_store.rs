//! In-process record store enforcing the same contract as the real backend:
//! non-empty name and email, unique email. Backs `--dry-run` and tests.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::model::{ClientRecord, InsertOutcome};
use crate::domain::ports::RecordStore;
use crate::utils::error::{ImportError, Result};

#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<Vec<ClientRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<ClientRecord> {
        self.records.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert_batch(&self, batch: &[ClientRecord]) -> Result<InsertOutcome> {
        let mut records = self.records.lock().await;

        let mut seen: HashSet<String> =
            records.iter().map(|record| record.email.clone()).collect();

        // Validate the whole batch before touching the stored list, so a
        // rejected batch leaves no partial insert behind.
        for record in batch {
            if record.name.is_empty() || record.email.is_empty() {
                return Err(ImportError::StoreCommitError {
                    message: format!("record with empty name or email: '{}'", record.name),
                });
            }
            if !seen.insert(record.email.clone()) {
                return Err(ImportError::StoreCommitError {
                    message: format!("duplicate email: {}", record.email),
                });
            }
        }

        records.extend_from_slice(batch);
        Ok(InsertOutcome {
            inserted_count: batch.len(),
        })
    }
}
