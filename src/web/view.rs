//! Dashboard view state.
//!
//! Row visibility is a pure function of (selected filter, row severity),
//! so the server renders the alert list declaratively and the generated
//! client script applies the same decision table. The chip bar, the
//! auto-refresh policy, and patient navigation paths live here too.

use std::fmt::Display;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::Severity;

/// Path that auto-refreshes. Exact match only; patient pages never
/// reload on a timer.
pub const DASHBOARD_PATH: &str = "/";

/// Filter values carried by the dashboard chips as `data-filter`.
/// There is no `info` chip: info alerts surface only under `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertFilter {
    All,
    Critical,
    Warning,
}

impl AlertFilter {
    /// Every chip on the dashboard, in display order.
    pub const CHIPS: [AlertFilter; 3] =
        [AlertFilter::All, AlertFilter::Critical, AlertFilter::Warning];

    pub fn as_str(self) -> &'static str {
        match self {
            AlertFilter::All => "all",
            AlertFilter::Critical => "critical",
            AlertFilter::Warning => "warning",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(AlertFilter::All),
            "critical" => Some(AlertFilter::Critical),
            "warning" => Some(AlertFilter::Warning),
            _ => None,
        }
    }

    /// Chip caption.
    pub fn label(self) -> &'static str {
        match self {
            AlertFilter::All => "All",
            AlertFilter::Critical => "Critical",
            AlertFilter::Warning => "Warning",
        }
    }
}

/// Visibility of one alert row under a filter. `severity` is `None`
/// for a row carrying no severity tag at all.
pub fn row_visible(filter: AlertFilter, severity: Option<Severity>) -> bool {
    match filter {
        AlertFilter::All => true,
        AlertFilter::Critical => severity == Some(Severity::Critical),
        AlertFilter::Warning => severity == Some(Severity::Warning),
    }
}

/// Raw-string variant for the DOM boundary, where the filter value is
/// untrusted text. Anything that does not parse hides the row.
pub fn row_visible_raw(filter: &str, severity: Option<Severity>) -> bool {
    AlertFilter::from_str(filter)
        .map(|f| row_visible(f, severity))
        .unwrap_or(false)
}

/// Inline display style applied to a row.
pub fn display_style(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// Chip-bar state: no chip is active until the first selection; after
/// any selection exactly one chip is active — the selected one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterBar {
    active: Option<AlertFilter>,
}

impl FilterBar {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Selecting always replaces the previous selection; there is no
    /// way back to the unselected state.
    pub fn select(&mut self, filter: AlertFilter) {
        self.active = Some(filter);
    }

    pub fn active(&self) -> Option<AlertFilter> {
        self.active
    }

    pub fn is_active(&self, chip: AlertFilter) -> bool {
        self.active == Some(chip)
    }

    /// Filter to render rows with. Before any selection the implicit
    /// state shows everything.
    pub fn effective(&self) -> AlertFilter {
        self.active.unwrap_or(AlertFilter::All)
    }
}

/// Browser path of a patient detail page. The id is opaque; no
/// validation or escaping beyond plain interpolation.
pub fn patient_path(id: impl Display) -> String {
    format!("/patients/{id}")
}

/// Auto-refresh policy: `Some(interval)` only on the dashboard path.
pub fn refresh_interval(path: &str, refresh_ms: u64) -> Option<Duration> {
    (path == DASHBOARD_PATH).then(|| Duration::from_millis(refresh_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_path_interpolates_id() {
        assert_eq!(patient_path(1), "/patients/1");
        assert_eq!(patient_path(42), "/patients/42");
        assert_eq!(patient_path("abc"), "/patients/abc");
    }

    #[test]
    fn refresh_only_on_dashboard_path() {
        assert_eq!(
            refresh_interval("/", 10_000),
            Some(Duration::from_millis(10_000))
        );
        assert_eq!(refresh_interval("/patients/1", 10_000), None);
        assert_eq!(refresh_interval("", 10_000), None);
        assert_eq!(refresh_interval("/alerts", 10_000), None);
    }

    #[test]
    fn all_filter_shows_every_row() {
        for severity in [
            None,
            Some(Severity::Info),
            Some(Severity::Warning),
            Some(Severity::Critical),
        ] {
            assert!(row_visible(AlertFilter::All, severity));
        }
    }

    #[test]
    fn critical_filter_shows_only_critical_rows() {
        assert!(row_visible(AlertFilter::Critical, Some(Severity::Critical)));
        assert!(!row_visible(AlertFilter::Critical, Some(Severity::Warning)));
        assert!(!row_visible(AlertFilter::Critical, Some(Severity::Info)));
        assert!(!row_visible(AlertFilter::Critical, None));
    }

    #[test]
    fn warning_filter_shows_only_warning_rows() {
        assert!(row_visible(AlertFilter::Warning, Some(Severity::Warning)));
        assert!(!row_visible(AlertFilter::Warning, Some(Severity::Critical)));
        assert!(!row_visible(AlertFilter::Warning, Some(Severity::Info)));
        assert!(!row_visible(AlertFilter::Warning, None));
    }

    #[test]
    fn unknown_filter_value_hides_everything() {
        for severity in [
            None,
            Some(Severity::Info),
            Some(Severity::Warning),
            Some(Severity::Critical),
        ] {
            assert!(!row_visible_raw("bogus", severity));
            assert!(!row_visible_raw("", severity));
        }
    }

    #[test]
    fn info_rows_visible_only_under_all() {
        assert!(row_visible_raw("all", Some(Severity::Info)));
        assert!(!row_visible_raw("critical", Some(Severity::Info)));
        assert!(!row_visible_raw("warning", Some(Severity::Info)));
    }

    /// Rows = [A:critical, B:warning, C:info, D:none].
    #[test]
    fn filter_scenario_four_rows() {
        let rows = [
            Some(Severity::Critical),
            Some(Severity::Warning),
            Some(Severity::Info),
            None,
        ];
        let visible = |f: AlertFilter| -> Vec<bool> {
            rows.iter().map(|&s| row_visible(f, s)).collect()
        };
        assert_eq!(visible(AlertFilter::Critical), [true, false, false, false]);
        assert_eq!(visible(AlertFilter::Warning), [false, true, false, false]);
        assert_eq!(visible(AlertFilter::All), [true, true, true, true]);
    }

    #[test]
    fn no_chip_active_before_first_selection() {
        let bar = FilterBar::new();
        assert_eq!(bar.active(), None);
        for chip in AlertFilter::CHIPS {
            assert!(!bar.is_active(chip));
        }
        // The implicit initial state still shows everything.
        assert_eq!(bar.effective(), AlertFilter::All);
    }

    #[test]
    fn exactly_one_chip_active_after_any_selection() {
        let mut bar = FilterBar::new();
        for selected in [
            AlertFilter::Critical,
            AlertFilter::Warning,
            AlertFilter::Critical,
            AlertFilter::All,
        ] {
            bar.select(selected);
            let active: Vec<_> = AlertFilter::CHIPS
                .into_iter()
                .filter(|&c| bar.is_active(c))
                .collect();
            assert_eq!(active, [selected]);
        }
    }

    #[test]
    fn selecting_same_chip_again_keeps_it_active() {
        let mut bar = FilterBar::new();
        bar.select(AlertFilter::Warning);
        bar.select(AlertFilter::Warning); // not a toggle
        assert!(bar.is_active(AlertFilter::Warning));
    }

    #[test]
    fn display_style_maps_to_block_or_none() {
        assert_eq!(display_style(true), "block");
        assert_eq!(display_style(false), "none");
    }

    #[test]
    fn filter_round_trips_through_data_attribute_values() {
        for chip in AlertFilter::CHIPS {
            assert_eq!(AlertFilter::from_str(chip.as_str()), Some(chip));
        }
        assert_eq!(AlertFilter::from_str("info"), None); // no info chip
    }
}
