//! Background vitals simulation.
//!
//! Each tick jitters every patient's latest reading to stand in for
//! sensor input, triages the result, broadcasts the update, and hands
//! warning/critical findings to the alert scheduler. Pacing and pause
//! state are adjustable at runtime through `SimSettings`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{Config, Thresholds};
use crate::events::{Event, EventHub};
use crate::models::{Severity, SimSpeed, VitalSigns};
use crate::scheduler::AlertScheduler;
use crate::store::{StoreError, WardStore};

/// Sleep while paused, between checks of the pause flag.
const PAUSED_POLL: Duration = Duration::from_secs(1);

/// Runtime-adjustable simulation settings, shared between the monitor
/// loop and the admin API.
#[derive(Debug, Default)]
pub struct SimSettings {
    fast: AtomicBool,
    paused: AtomicBool,
}

/// Partial update accepted by `POST /api/simulation`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SimUpdate {
    pub speed: Option<SimSpeed>,
    pub paused: Option<bool>,
}

/// Current settings, as reported back to the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimStatus {
    pub speed: SimSpeed,
    pub paused: bool,
}

impl SimSettings {
    pub fn speed(&self) -> SimSpeed {
        if self.fast.load(Ordering::Relaxed) {
            SimSpeed::Fast
        } else {
            SimSpeed::Normal
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    pub fn apply(&self, update: SimUpdate) -> SimStatus {
        if let Some(speed) = update.speed {
            self.fast.store(speed == SimSpeed::Fast, Ordering::Relaxed);
        }
        if let Some(paused) = update.paused {
            self.paused.store(paused, Ordering::Relaxed);
        }
        self.status()
    }

    pub fn status(&self) -> SimStatus {
        SimStatus {
            speed: self.speed(),
            paused: self.is_paused(),
        }
    }
}

/// Perturb the last reading slightly to simulate the next sensor input.
/// SpO2 is clamped to a plausible 70..=100 band.
pub fn jitter_reading<R: Rng>(
    last: &VitalSigns,
    rng: &mut R,
    now: DateTime<Utc>,
) -> VitalSigns {
    VitalSigns {
        heart_rate: last.heart_rate + rng.gen_range(-5..=5),
        spo2: (last.spo2 + rng.gen_range(-2..=2)).clamp(70, 100),
        systolic_bp: last.systolic_bp + rng.gen_range(-5..=5),
        diastolic_bp: last.diastolic_bp + rng.gen_range(-3..=3),
        temperature: ((last.temperature + rng.gen_range(-0.2..=0.2)) * 10.0).round() / 10.0,
        timestamp: now,
    }
}

/// Alert message in the house style:
/// `WARNING – HR 131 bpm, SpO2 94%, BP 159/86, T 38.0°C`.
pub fn alert_message(severity: Severity, v: &VitalSigns) -> String {
    format!(
        "{} – HR {} bpm, SpO2 {}%, BP {}, T {:.1}°C",
        severity.label(),
        v.heart_rate,
        v.spo2,
        v.bp_display(),
        v.temperature
    )
}

pub struct Monitor {
    store: Arc<WardStore>,
    scheduler: Arc<AlertScheduler>,
    events: EventHub,
    settings: Arc<SimSettings>,
    thresholds: Thresholds,
    base_interval: Duration,
}

impl Monitor {
    pub fn new(
        store: Arc<WardStore>,
        scheduler: Arc<AlertScheduler>,
        events: EventHub,
        settings: Arc<SimSettings>,
        config: &Config,
    ) -> Self {
        Self {
            store,
            scheduler,
            events,
            settings,
            thresholds: config.thresholds.clone(),
            base_interval: Duration::from_secs(config.monitor_interval_secs),
        }
    }

    /// Simulation loop. Paused mode idles without touching state; fast
    /// mode halves the tick interval (never below one second).
    pub async fn run(self) {
        tracing::info!(
            interval_secs = self.base_interval.as_secs(),
            "vitals monitor started"
        );
        loop {
            if self.settings.is_paused() {
                tokio::time::sleep(PAUSED_POLL).await;
                continue;
            }

            if let Err(e) = self.tick() {
                tracing::error!(error = %e, "monitor tick failed");
            }

            let sleep_for = match self.settings.speed() {
                SimSpeed::Fast => (self.base_interval / 2).max(Duration::from_secs(1)),
                SimSpeed::Normal => self.base_interval,
            };
            tokio::time::sleep(sleep_for).await;
        }
    }

    /// One pass over every patient: jitter, triage, record, publish.
    fn tick(&self) -> Result<(), StoreError> {
        let patients = self.store.patients()?;
        let mut rng = rand::thread_rng();

        for patient in patients {
            let Some(last) = patient.latest_vitals() else {
                continue;
            };
            let reading = jitter_reading(last, &mut rng, Utc::now());
            let severity = crate::triage::assess(&reading, &self.thresholds);

            self.store
                .record_vitals(patient.id, reading.clone(), severity)?;
            self.events.publish(Event::PatientUpdate {
                patient_id: patient.id,
                vitals: reading.clone(),
                status: severity,
            });

            if severity >= Severity::Warning {
                let message = alert_message(severity, &reading);
                tracing::debug!(patient_id = patient.id, %message, "triage raised an alert");
                self.scheduler
                    .enqueue(patient.id, severity, message, reading.timestamp)?;
            }
        }
        Ok(())
    }
}
