use serde::{Deserialize, Serialize};

use super::alert::Alert;
use super::enums::Severity;
use super::vitals::VitalSigns;

/// A monitored patient with their reading history and raised alerts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub room: String,
    /// Free-text condition, e.g. "Post-op" or "ICU".
    pub condition: String,
    /// Outcome of the most recent triage. `Info` means stable.
    pub status: Severity,
    pub vitals_history: Vec<VitalSigns>,
    pub alerts: Vec<Alert>,
}

impl Patient {
    pub fn new(id: u32, name: &str, room: &str, condition: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            room: room.to_string(),
            condition: condition.to_string(),
            status: Severity::Info,
            vitals_history: Vec::new(),
            alerts: Vec::new(),
        }
    }

    pub fn latest_vitals(&self) -> Option<&VitalSigns> {
        self.vitals_history.last()
    }

    pub fn latest_alert(&self) -> Option<&Alert> {
        self.alerts.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reading(hr: i32) -> VitalSigns {
        VitalSigns {
            heart_rate: hr,
            spo2: 98,
            systolic_bp: 120,
            diastolic_bp: 80,
            temperature: 36.8,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_patient_is_stable_with_empty_history() {
        let p = Patient::new(1, "Alice Miller", "101A", "Post-op");
        assert_eq!(p.status, Severity::Info);
        assert!(p.latest_vitals().is_none());
        assert!(p.latest_alert().is_none());
    }

    #[test]
    fn latest_vitals_is_last_appended() {
        let mut p = Patient::new(1, "Alice Miller", "101A", "Post-op");
        p.vitals_history.push(reading(80));
        p.vitals_history.push(reading(95));
        assert_eq!(p.latest_vitals().unwrap().heart_rate, 95);
    }
}
