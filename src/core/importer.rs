//! Batch import driver: reads rows, synthesizes records with per-row fault
//! isolation, gates the commit behind operator confirmation and submits the
//! whole batch to the store in one call.

use chrono::Utc;

use crate::core::synthesize::synthesize;
use crate::domain::model::{BatchPreview, ImportReport, RawRow};
use crate::domain::ports::{ConfirmGate, RecordStore, RowSource};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportPhase {
    NotStarted,
    Reading,
    Synthesizing,
    Committing,
    Done,
    Failed,
}

fn advance(phase: &mut ImportPhase, next: ImportPhase) {
    tracing::debug!("import phase: {:?} -> {:?}", phase, next);
    *phase = next;
}

pub struct BatchImporter<S, G> {
    store: S,
    gate: G,
}

impl<S: RecordStore, G: ConfirmGate> BatchImporter<S, G> {
    pub fn new(store: S, gate: G) -> Self {
        Self { store, gate }
    }

    /// Full run: read the source, then import whatever rows it yields.
    pub async fn run(&self, source: &(impl RowSource + ?Sized)) -> Result<ImportReport> {
        let mut phase = ImportPhase::NotStarted;
        advance(&mut phase, ImportPhase::Reading);

        let rows = source.read_rows()?;
        tracing::info!("read {} data rows from source", rows.len());

        self.import_batch(rows).await
    }

    /// Synthesis and commit. Row-level failures are collected, never abort
    /// the run; only a store commit failure is terminal.
    pub async fn import_batch(&self, rows: Vec<RawRow>) -> Result<ImportReport> {
        let mut phase = ImportPhase::Reading;
        advance(&mut phase, ImportPhase::Synthesizing);

        let now = Utc::now();
        let mut records = Vec::new();
        let mut rejected = Vec::new();

        for row in &rows {
            match synthesize(row, now) {
                Ok(record) => records.push(record),
                Err(rejection) => {
                    tracing::warn!("skipping {}", rejection);
                    rejected.push(rejection);
                }
            }
        }

        tracing::info!(
            "synthesized {} records, rejected {} rows",
            records.len(),
            rejected.len()
        );

        if records.is_empty() {
            // Nothing to commit: the store is never contacted.
            tracing::info!("no valid records, skipping store commit");
            advance(&mut phase, ImportPhase::Done);
            return Ok(ImportReport {
                rows_read: rows.len(),
                synthesized: 0,
                rejected,
                inserted_count: 0,
                committed: false,
            });
        }

        let preview = BatchPreview::new(&rows, &records, rejected.len());
        if !self.gate.confirm(&preview)? {
            tracing::info!("import cancelled by operator, nothing committed");
            advance(&mut phase, ImportPhase::Done);
            return Ok(ImportReport {
                rows_read: rows.len(),
                synthesized: records.len(),
                rejected,
                inserted_count: 0,
                committed: false,
            });
        }

        advance(&mut phase, ImportPhase::Committing);
        match self.store.insert_batch(&records).await {
            Ok(outcome) => {
                advance(&mut phase, ImportPhase::Done);
                tracing::info!("store accepted {} records", outcome.inserted_count);
                Ok(ImportReport {
                    rows_read: rows.len(),
                    synthesized: records.len(),
                    rejected,
                    inserted_count: outcome.inserted_count,
                    committed: true,
                })
            }
            Err(e) => {
                // No retry, no re-split: re-running after the operator fixes
                // the underlying issue is the recovery path.
                advance(&mut phase, ImportPhase::Failed);
                tracing::error!("store commit failed: {}", e);
                Err(e)
            }
        }
    }
}
