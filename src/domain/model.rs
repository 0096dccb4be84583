use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One row of the source file, keyed by lower-cased column name.
/// Lives only for the duration of a single import run.
#[derive(Debug, Clone)]
pub struct RawRow {
    /// Position among the data rows of the source, in original order.
    pub index: usize,
    pub data: HashMap<String, serde_json::Value>,
}

impl RawRow {
    pub fn new(index: usize, data: HashMap<String, serde_json::Value>) -> Self {
        Self { index, data }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
    Paused,
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClientStatus::Active => "active",
            ClientStatus::Inactive => "inactive",
            ClientStatus::Paused => "paused",
        };
        write!(f, "{}", label)
    }
}

/// Candidate client record produced by synthesis. Every record handed to the
/// store satisfies the store contract: non-empty name and email.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub status: ClientStatus,
    pub active_plan: String,
    pub goals: String,
    pub notes: String,
    pub birth_date: Option<NaiveDate>,
    pub registration_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub access_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    MissingName,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::MissingName => write!(f, "missing_name"),
        }
    }
}

/// Per-row rejection. Recovered locally by the importer, never aborts a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRejection {
    pub row_index: usize,
    pub reason: RejectReason,
}

impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row_index, self.reason)
    }
}

#[derive(Debug, Clone)]
pub struct InsertOutcome {
    pub inserted_count: usize,
}

/// Summary shown to the operator before the commit is confirmed.
#[derive(Debug, Clone)]
pub struct BatchPreview {
    pub columns: Vec<String>,
    pub total_rows: usize,
    pub valid: usize,
    pub rejected: usize,
    pub sample: Vec<ClientRecord>,
}

impl BatchPreview {
    pub fn new(rows: &[RawRow], records: &[ClientRecord], rejected: usize) -> Self {
        let mut columns: Vec<String> = rows
            .first()
            .map(|row| row.data.keys().cloned().collect())
            .unwrap_or_default();
        columns.sort();

        Self {
            columns,
            total_rows: rows.len(),
            valid: records.len(),
            rejected,
            sample: records.iter().take(3).cloned().collect(),
        }
    }
}

/// Outcome of one import run.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub rows_read: usize,
    pub synthesized: usize,
    pub rejected: Vec<RowRejection>,
    pub inserted_count: usize,
    /// False when the batch was empty or the operator declined the commit.
    pub committed: bool,
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows read:        {}", self.rows_read)?;
        writeln!(f, "Synthesized:      {}", self.synthesized)?;
        writeln!(f, "Rejected:         {}", self.rejected.len())?;
        for rejection in &self.rejected {
            writeln!(f, "  - {}", rejection)?;
        }
        write!(f, "Inserted:         {}", self.inserted_count)
    }
}
