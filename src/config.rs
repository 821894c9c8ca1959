//! Runtime configuration: bind address, loop intervals, triage
//! thresholds, and the demo auth token table.
//!
//! Everything has a sensible default; individual values can be
//! overridden through `VITALBOARD_*` environment variables. A value
//! that fails to parse is logged and replaced by its default.

use std::net::SocketAddr;
use std::str::FromStr;

use crate::models::Role;

pub const APP_NAME: &str = "Vitalboard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default `RUST_LOG`-style filter when none is set in the environment.
pub fn default_log_filter() -> &'static str {
    "info,vitalboard=debug"
}

/// Triage thresholds. A reading outside the critical band on any vital
/// is critical; outside the warning band, a warning.
#[derive(Debug, Clone)]
pub struct Thresholds {
    pub hr_critical_low: i32,
    pub hr_critical_high: i32,
    pub hr_warning_low: i32,
    pub hr_warning_high: i32,
    pub spo2_critical: i32,
    pub spo2_warning: i32,
    pub temp_critical_low: f64,
    pub temp_critical_high: f64,
    pub temp_warning_low: f64,
    pub temp_warning_high: f64,
    pub systolic_critical: i32,
    pub systolic_warning: i32,
    pub diastolic_critical: i32,
    pub diastolic_warning: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            hr_critical_low: 40,
            hr_critical_high: 140,
            hr_warning_low: 50,
            hr_warning_high: 120,
            spo2_critical: 85,
            spo2_warning: 92,
            temp_critical_low: 35.0,
            temp_critical_high: 40.0,
            temp_warning_low: 36.0,
            temp_warning_high: 38.0,
            systolic_critical: 180,
            systolic_warning: 150,
            diastolic_critical: 110,
            diastolic_warning: 95,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind: SocketAddr,
    /// Dashboard auto-refresh interval in milliseconds.
    pub dashboard_refresh_ms: u64,
    /// Base interval between simulation ticks, in seconds.
    pub monitor_interval_secs: u64,
    /// Pacing between alert emissions, in milliseconds.
    pub emit_interval_ms: u64,
    /// Scheduler sleep when the alert queue is empty, in milliseconds.
    pub idle_sleep_ms: u64,
    /// Maximum retained vitals readings per patient.
    pub history_cap: usize,
    pub thresholds: Thresholds,
    /// Demo token table. Replace before exposing beyond a demo network.
    pub tokens: Vec<(String, Role)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5000".parse().expect("static bind address"),
            dashboard_refresh_ms: 10_000,
            monitor_interval_secs: 5,
            emit_interval_ms: 1_000,
            idle_sleep_ms: 500,
            history_cap: 200,
            thresholds: Thresholds::default(),
            tokens: vec![
                ("nurse-token".to_string(), Role::Nurse),
                ("admin-token".to_string(), Role::Admin),
            ],
        }
    }
}

impl Config {
    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Self {
            bind: env_parse("VITALBOARD_BIND", defaults.bind),
            dashboard_refresh_ms: env_parse(
                "VITALBOARD_REFRESH_MS",
                defaults.dashboard_refresh_ms,
            ),
            monitor_interval_secs: env_parse(
                "VITALBOARD_MONITOR_INTERVAL_SECS",
                defaults.monitor_interval_secs,
            ),
            emit_interval_ms: env_parse("VITALBOARD_EMIT_INTERVAL_MS", defaults.emit_interval_ms),
            idle_sleep_ms: env_parse("VITALBOARD_IDLE_SLEEP_MS", defaults.idle_sleep_ms),
            history_cap: env_parse("VITALBOARD_HISTORY_CAP", defaults.history_cap),
            ..defaults
        }
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, value = %raw, "unparseable value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = Config::default();
        assert_eq!(c.dashboard_refresh_ms, 10_000);
        assert_eq!(c.monitor_interval_secs, 5);
        assert_eq!(c.emit_interval_ms, 1_000);
        assert_eq!(c.history_cap, 200);
        assert_eq!(c.bind.port(), 5000);
    }

    #[test]
    fn default_token_table_has_both_roles() {
        let c = Config::default();
        assert!(c.tokens.iter().any(|(_, r)| *r == Role::Nurse));
        assert!(c.tokens.iter().any(|(_, r)| *r == Role::Admin));
    }

    #[test]
    fn env_parse_falls_back_on_garbage() {
        std::env::set_var("VITALBOARD_TEST_GARBAGE", "not-a-number");
        let v: u64 = env_parse("VITALBOARD_TEST_GARBAGE", 7);
        assert_eq!(v, 7);
        std::env::remove_var("VITALBOARD_TEST_GARBAGE");
    }

    #[test]
    fn env_parse_reads_valid_value() {
        std::env::set_var("VITALBOARD_TEST_VALID", "42");
        let v: u64 = env_parse("VITALBOARD_TEST_VALID", 7);
        assert_eq!(v, 42);
        std::env::remove_var("VITALBOARD_TEST_VALID");
    }
}
