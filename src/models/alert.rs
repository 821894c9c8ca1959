use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Severity;

/// A triage alert raised for one patient.
///
/// Ids are allocated by the ward store from a monotonic counter, so they
/// double as enqueue order for equal-severity scheduling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: u64,
    pub patient_id: u32,
    pub severity: Severity,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub acknowledged: bool,
}
