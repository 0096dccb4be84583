use crate::domain::model::{BatchPreview, ClientRecord, InsertOutcome, RawRow};
use crate::utils::error::Result;
use async_trait::async_trait;

/// One tabular source file, read in full. Streaming is out of scope.
pub trait RowSource {
    fn read_rows(&self) -> Result<Vec<RawRow>>;
}

/// The record store collaborator. The batch is submitted in a single call;
/// partial failure is the store's to report and the importer's to surface.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert_batch(&self, records: &[ClientRecord]) -> Result<InsertOutcome>;
}

/// Safety gate consulted before a non-empty batch is committed.
pub trait ConfirmGate {
    fn confirm(&self, preview: &BatchPreview) -> Result<bool>;
}
