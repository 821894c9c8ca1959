use serde::{Deserialize, Serialize};

/// Alert severity. The derived ordering ranks `Critical` above `Warning`
/// above `Info`, which the scheduler relies on for prioritization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "info" => Some(Severity::Info),
            "warning" => Some(Severity::Warning),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }

    /// Uppercase label used in alert messages ("WARNING – HR 131 bpm, …").
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }

    /// CSS class carried by an alert row on the dashboard.
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Info => "alert-info",
            Severity::Warning => "alert-warning",
            Severity::Critical => "alert-critical",
        }
    }
}

/// Access role for protected endpoints. The derived ordering encodes the
/// hierarchy: `Admin` satisfies any requirement `Nurse` does.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Nurse,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Nurse => "nurse",
            Role::Admin => "admin",
        }
    }

    /// Whether this role meets a minimum role requirement.
    pub fn satisfies(self, min: Role) -> bool {
        self >= min
    }
}

/// Simulation pacing for the background monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimSpeed {
    Normal,
    Fast,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_critical_highest() {
        assert!(Severity::Critical > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }

    #[test]
    fn severity_string_round_trip() {
        for sev in [Severity::Info, Severity::Warning, Severity::Critical] {
            assert_eq!(Severity::from_str(sev.as_str()), Some(sev));
        }
        assert_eq!(Severity::from_str("ok"), None);
    }

    #[test]
    fn severity_css_classes() {
        assert_eq!(Severity::Critical.css_class(), "alert-critical");
        assert_eq!(Severity::Warning.css_class(), "alert-warning");
        assert_eq!(Severity::Info.css_class(), "alert-info");
    }

    #[test]
    fn admin_satisfies_nurse_requirement() {
        assert!(Role::Admin.satisfies(Role::Nurse));
        assert!(Role::Nurse.satisfies(Role::Nurse));
        assert!(!Role::Nurse.satisfies(Role::Admin));
    }

    #[test]
    fn severity_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
    }

    #[test]
    fn sim_speed_deserializes_snake_case() {
        let speed: SimSpeed = serde_json::from_str("\"fast\"").unwrap();
        assert_eq!(speed, SimSpeed::Fast);
    }
}
