//! Record synthesis: turns one raw row into a candidate client record.
//! Rejects only when the name is genuinely missing; every other anomaly
//! degrades to a default or an absent field.

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::columns::{resolve, LogicalField};
use crate::core::normalize::{clean_text, parse_date};
use crate::core::status::classify;
use crate::domain::model::{ClientRecord, ClientStatus, RawRow, RejectReason, RowRejection};

/// Resolved and cleaned cell text for a logical field; empty when the row
/// has no column for it.
fn field_text(row: &RawRow, field: LogicalField) -> String {
    resolve(row, field).map(clean_text).unwrap_or_default()
}

fn field_date(row: &RawRow, field: LogicalField) -> Option<NaiveDate> {
    let raw = field_text(row, field);
    if raw.is_empty() {
        return None;
    }
    let parsed = parse_date(&raw);
    if parsed.is_none() {
        tracing::debug!("row {}: unparseable date '{}', leaving absent", row.index, raw);
    }
    parsed
}

pub fn synthesize(row: &RawRow, now: DateTime<Utc>) -> Result<ClientRecord, RowRejection> {
    let name = field_text(row, LogicalField::Name);
    if name.is_empty() {
        return Err(RowRejection {
            row_index: row.index,
            reason: RejectReason::MissingName,
        });
    }

    // Placeholder keeps the store's non-null/unique email contract satisfied.
    let email = match field_text(row, LogicalField::Email) {
        e if e.is_empty() => format!("client_{}@imported.invalid", row.index),
        e => e,
    };

    let raw_status = field_text(row, LogicalField::Status);
    let status = if raw_status.is_empty() {
        ClientStatus::Active
    } else {
        classify(&raw_status)
    };

    // Keep the source status code traceable when the sheet has no goals
    // column of its own.
    let mut goals = field_text(row, LogicalField::Goals);
    if goals.is_empty() && !raw_status.is_empty() {
        goals = format!("Status: {}", raw_status);
    }

    let mut notes = field_text(row, LogicalField::Notes);
    if notes.is_empty() {
        let consultant = field_text(row, LogicalField::ConsultantId);
        if !consultant.is_empty() {
            notes = format!("ID Consultor: {}", consultant);
        }
    }

    Ok(ClientRecord {
        name,
        email,
        phone: field_text(row, LogicalField::Phone),
        whatsapp: field_text(row, LogicalField::Whatsapp),
        status,
        active_plan: field_text(row, LogicalField::Plan),
        goals,
        notes,
        birth_date: field_date(row, LogicalField::BirthDate),
        registration_date: field_date(row, LogicalField::RegistrationDate),
        due_date: field_date(row, LogicalField::DueDate),
        access_enabled: true,
        created_at: now,
        updated_at: now,
    })
}
