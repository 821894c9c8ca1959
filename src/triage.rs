//! Rule-based triage: classify a vitals reading into an alert severity.
//!
//! Each vital is checked against its critical band first, then its
//! warning band; the worst finding across all vitals wins.

use crate::config::Thresholds;
use crate::models::{Severity, VitalSigns};

/// Classify one reading. `Info` means every vital is inside its
/// warning band.
pub fn assess(v: &VitalSigns, t: &Thresholds) -> Severity {
    let mut critical = false;
    let mut warning = false;

    // Heart rate
    if v.heart_rate < t.hr_critical_low || v.heart_rate > t.hr_critical_high {
        critical = true;
    } else if v.heart_rate < t.hr_warning_low || v.heart_rate > t.hr_warning_high {
        warning = true;
    }

    // Oxygen saturation
    if v.spo2 < t.spo2_critical {
        critical = true;
    } else if v.spo2 < t.spo2_warning {
        warning = true;
    }

    // Temperature
    if v.temperature < t.temp_critical_low || v.temperature > t.temp_critical_high {
        critical = true;
    } else if v.temperature < t.temp_warning_low || v.temperature > t.temp_warning_high {
        warning = true;
    }

    // Blood pressure
    if v.systolic_bp > t.systolic_critical || v.diastolic_bp > t.diastolic_critical {
        critical = true;
    } else if v.systolic_bp > t.systolic_warning || v.diastolic_bp > t.diastolic_warning {
        warning = true;
    }

    if critical {
        Severity::Critical
    } else if warning {
        Severity::Warning
    } else {
        Severity::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn normal() -> VitalSigns {
        VitalSigns {
            heart_rate: 80,
            spo2: 98,
            systolic_bp: 120,
            diastolic_bp: 80,
            temperature: 36.8,
            timestamp: Utc::now(),
        }
    }

    fn t() -> Thresholds {
        Thresholds::default()
    }

    #[test]
    fn normal_reading_is_info() {
        assert_eq!(assess(&normal(), &t()), Severity::Info);
    }

    #[test]
    fn heart_rate_bands() {
        let mut v = normal();
        v.heart_rate = 141;
        assert_eq!(assess(&v, &t()), Severity::Critical);
        v.heart_rate = 140; // inclusive upper bound of the warning zone
        assert_eq!(assess(&v, &t()), Severity::Warning);
        v.heart_rate = 121;
        assert_eq!(assess(&v, &t()), Severity::Warning);
        v.heart_rate = 120;
        assert_eq!(assess(&v, &t()), Severity::Info);
        v.heart_rate = 49;
        assert_eq!(assess(&v, &t()), Severity::Warning);
        v.heart_rate = 39;
        assert_eq!(assess(&v, &t()), Severity::Critical);
    }

    #[test]
    fn spo2_bands() {
        let mut v = normal();
        v.spo2 = 84;
        assert_eq!(assess(&v, &t()), Severity::Critical);
        v.spo2 = 85;
        assert_eq!(assess(&v, &t()), Severity::Warning);
        v.spo2 = 91;
        assert_eq!(assess(&v, &t()), Severity::Warning);
        v.spo2 = 92;
        assert_eq!(assess(&v, &t()), Severity::Info);
    }

    #[test]
    fn temperature_bands() {
        let mut v = normal();
        v.temperature = 40.1;
        assert_eq!(assess(&v, &t()), Severity::Critical);
        v.temperature = 38.5;
        assert_eq!(assess(&v, &t()), Severity::Warning);
        v.temperature = 34.9;
        assert_eq!(assess(&v, &t()), Severity::Critical);
        v.temperature = 35.5;
        assert_eq!(assess(&v, &t()), Severity::Warning);
    }

    #[test]
    fn blood_pressure_bands() {
        let mut v = normal();
        v.systolic_bp = 181;
        assert_eq!(assess(&v, &t()), Severity::Critical);
        v.systolic_bp = 151;
        assert_eq!(assess(&v, &t()), Severity::Warning);
        v.systolic_bp = 120;
        v.diastolic_bp = 111;
        assert_eq!(assess(&v, &t()), Severity::Critical);
        v.diastolic_bp = 96;
        assert_eq!(assess(&v, &t()), Severity::Warning);
    }

    #[test]
    fn critical_on_one_vital_beats_warning_on_another() {
        let mut v = normal();
        v.heart_rate = 125; // warning
        v.spo2 = 80; // critical
        assert_eq!(assess(&v, &t()), Severity::Critical);
    }
}
