//! In-memory ward store shared by the web layer and the background
//! tasks. A single `RwLock` guards the registry so readers (API, pages)
//! never observe a half-applied update from the monitor loop.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use crate::models::{Alert, Patient, Severity, VitalSigns};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("ward store lock poisoned")]
    LockPoisoned,
}

struct Inner {
    patients: BTreeMap<u32, Patient>,
    alerts: Vec<Alert>,
    next_alert_id: u64,
}

/// Thread-safe registry of patients and alerts.
pub struct WardStore {
    inner: RwLock<Inner>,
    history_cap: usize,
}

impl WardStore {
    pub fn new(history_cap: usize) -> Self {
        Self {
            inner: RwLock::new(Inner {
                patients: BTreeMap::new(),
                alerts: Vec::new(),
                next_alert_id: 1,
            }),
            history_cap,
        }
    }

    /// Store seeded with the three demo patients, each holding one
    /// baseline reading.
    pub fn with_demo_patients(history_cap: usize) -> Self {
        let store = Self::new(history_cap);
        let now = Utc::now();

        let seed = [
            (1, "Alice Miller", "101A", "Post-op", 80, 98, 120, 80, 36.8),
            (2, "John Smith", "102B", "ICU", 95, 94, 130, 85, 37.5),
            (3, "Maria Garcia", "103C", "Observation", 72, 99, 118, 78, 36.6),
        ];

        {
            let mut inner = store.inner.write().expect("fresh lock");
            for (id, name, room, condition, hr, spo2, sys, dia, temp) in seed {
                let mut patient = Patient::new(id, name, room, condition);
                patient.vitals_history.push(VitalSigns {
                    heart_rate: hr,
                    spo2,
                    systolic_bp: sys,
                    diastolic_bp: dia,
                    temperature: temp,
                    timestamp: now,
                });
                inner.patients.insert(id, patient);
            }
        }
        store
    }

    pub fn add_patient(&self, patient: Patient) -> Result<(), StoreError> {
        let mut inner = self.write()?;
        inner.patients.insert(patient.id, patient);
        Ok(())
    }

    /// Snapshot of all patients, ordered by id.
    pub fn patients(&self) -> Result<Vec<Patient>, StoreError> {
        let inner = self.read()?;
        Ok(inner.patients.values().cloned().collect())
    }

    pub fn patient(&self, id: u32) -> Result<Option<Patient>, StoreError> {
        let inner = self.read()?;
        Ok(inner.patients.get(&id).cloned())
    }

    /// Append a reading and set the patient's status. History is capped;
    /// the oldest readings are dropped first. Returns `false` for an
    /// unknown patient.
    pub fn record_vitals(
        &self,
        patient_id: u32,
        vitals: VitalSigns,
        status: Severity,
    ) -> Result<bool, StoreError> {
        let mut inner = self.write()?;
        let Some(patient) = inner.patients.get_mut(&patient_id) else {
            return Ok(false);
        };
        patient.vitals_history.push(vitals);
        if patient.vitals_history.len() > self.history_cap {
            let excess = patient.vitals_history.len() - self.history_cap;
            patient.vitals_history.drain(..excess);
        }
        patient.status = status;
        Ok(true)
    }

    pub fn history(&self, patient_id: u32) -> Result<Option<Vec<VitalSigns>>, StoreError> {
        let inner = self.read()?;
        Ok(inner
            .patients
            .get(&patient_id)
            .map(|p| p.vitals_history.clone()))
    }

    /// Record a new alert, attaching it to the patient if the patient
    /// exists. The alert always lands in the global list.
    pub fn record_alert(
        &self,
        patient_id: u32,
        severity: Severity,
        message: String,
        created_at: DateTime<Utc>,
    ) -> Result<Alert, StoreError> {
        let mut inner = self.write()?;
        let alert = Alert {
            id: inner.next_alert_id,
            patient_id,
            severity,
            message,
            created_at,
            acknowledged: false,
        };
        inner.next_alert_id += 1;
        if let Some(patient) = inner.patients.get_mut(&patient_id) {
            patient.alerts.push(alert.clone());
        }
        inner.alerts.push(alert.clone());
        Ok(alert)
    }

    /// Most recent alerts, newest first.
    pub fn recent_alerts(&self, limit: usize) -> Result<Vec<Alert>, StoreError> {
        let inner = self.read()?;
        Ok(inner.alerts.iter().rev().take(limit).cloned().collect())
    }

    /// Mark an alert acknowledged in the global list and on the owning
    /// patient. Idempotent. Returns `false` if the id is unknown.
    pub fn acknowledge(&self, alert_id: u64) -> Result<bool, StoreError> {
        let mut inner = self.write()?;
        let Some(pos) = inner.alerts.iter().position(|a| a.id == alert_id) else {
            return Ok(false);
        };
        inner.alerts[pos].acknowledged = true;
        let patient_id = inner.alerts[pos].patient_id;
        if let Some(patient) = inner.patients.get_mut(&patient_id) {
            if let Some(copy) = patient.alerts.iter_mut().find(|a| a.id == alert_id) {
                copy.acknowledged = true;
            }
        }
        Ok(true)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}
