//! Status classification: collapses free-text and partner-program status
//! codes onto the fixed client status set. The mapping is an explicit,
//! auditable lookup; unknown input defaults to active (new or unclassified
//! leads are treated as active prospects), never drops the row.

use crate::domain::model::ClientStatus;

/// Partner-program codes that signify an active enrollment.
const ACTIVE_PROGRAM_CODES: [&str; 3] = ["PB15", "PG35", "PS25"];

/// Prefix used by terminated/on-hold program codes.
const INACTIVE_PROGRAM_PREFIX: &str = "BPM";

/// Total over all input: every string maps to exactly one status.
pub fn classify(raw: &str) -> ClientStatus {
    if ACTIVE_PROGRAM_CODES.iter().any(|code| raw.contains(code)) {
        return ClientStatus::Active;
    }
    if raw.contains(INACTIVE_PROGRAM_PREFIX) {
        return ClientStatus::Inactive;
    }

    match raw.trim().to_lowercase().as_str() {
        "ativo" | "active" => ClientStatus::Active,
        "inativo" | "inactive" => ClientStatus::Inactive,
        "pausado" | "paused" => ClientStatus::Paused,
        _ => ClientStatus::Active,
    }
}
