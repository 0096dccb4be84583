//! Record store over HTTP: submits the whole batch as one JSON POST to the
//! roster backend's insertBatch endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::model::{ClientRecord, InsertOutcome};
use crate::domain::ports::RecordStore;
use crate::utils::error::{ImportError, Result};

pub struct HttpStore {
    endpoint: String,
    client: Client,
}

impl HttpStore {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }
}

#[derive(Serialize)]
struct InsertBatchRequest<'a> {
    records: &'a [ClientRecord],
}

#[derive(Deserialize)]
struct InsertBatchResponse {
    #[serde(alias = "insertedCount")]
    inserted_count: usize,
}

#[async_trait]
impl RecordStore for HttpStore {
    async fn insert_batch(&self, records: &[ClientRecord]) -> Result<InsertOutcome> {
        tracing::debug!("posting {} records to {}", records.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&InsertBatchRequest { records })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImportError::StoreCommitError {
                message: format!("store returned {}: {}", status, body.trim()),
            });
        }

        let parsed: InsertBatchResponse = response.json().await?;
        Ok(InsertOutcome {
            inserted_count: parsed.inserted_count,
        })
    }
}
