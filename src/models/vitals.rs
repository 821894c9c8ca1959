use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One vital-sign reading from a bedside monitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Heart rate in bpm.
    pub heart_rate: i32,
    /// Oxygen saturation in percent.
    pub spo2: i32,
    /// Systolic blood pressure in mmHg.
    pub systolic_bp: i32,
    /// Diastolic blood pressure in mmHg.
    pub diastolic_bp: i32,
    /// Body temperature in °C.
    pub temperature: f64,
    pub timestamp: DateTime<Utc>,
}

impl VitalSigns {
    /// "120/80" form used in alert messages and on the dashboard.
    pub fn bp_display(&self) -> String {
        format!("{}/{}", self.systolic_bp, self.diastolic_bp)
    }
}
