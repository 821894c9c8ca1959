//! Priority alert scheduler.
//!
//! Alerts drain strictly by severity (critical first), FIFO within a
//! severity, and emission is paced to one alert per interval so a burst
//! of triage findings never storms connected clients. Enqueueing also
//! records the alert in the ward store immediately, so the REST API
//! returns queued alerts before they have been emitted.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::events::{Event, EventHub};
use crate::models::{Alert, Severity};
use crate::store::{StoreError, WardStore};

/// Heap entry. Ordered so the max-heap yields the highest severity
/// first and, within a severity, the lowest sequence number.
struct QueuedAlert {
    alert: Alert,
    seq: u64,
}

impl Ord for QueuedAlert {
    fn cmp(&self, other: &Self) -> Ordering {
        self.alert
            .severity
            .cmp(&other.alert.severity)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueuedAlert {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedAlert {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedAlert {}

/// Severity-ordered queue. Extracted from the drain loop so the
/// ordering rules are testable without a runtime.
pub struct AlertQueue {
    heap: BinaryHeap<QueuedAlert>,
    next_seq: u64,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, alert: Alert) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(QueuedAlert { alert, seq });
    }

    pub fn pop(&mut self) -> Option<Alert> {
        self.heap.pop().map(|q| q.alert)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Default for AlertQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared scheduler: producers enqueue, one background task drains.
pub struct AlertScheduler {
    queue: Mutex<AlertQueue>,
    store: Arc<WardStore>,
    events: EventHub,
    emit_interval: Duration,
    idle_sleep: Duration,
}

impl AlertScheduler {
    pub fn new(store: Arc<WardStore>, events: EventHub, config: &Config) -> Self {
        Self {
            queue: Mutex::new(AlertQueue::new()),
            store,
            events,
            emit_interval: Duration::from_millis(config.emit_interval_ms),
            idle_sleep: Duration::from_millis(config.idle_sleep_ms),
        }
    }

    /// Record the alert in the store and queue it for emission.
    pub fn enqueue(
        &self,
        patient_id: u32,
        severity: Severity,
        message: String,
        created_at: DateTime<Utc>,
    ) -> Result<Alert, StoreError> {
        let alert = self
            .store
            .record_alert(patient_id, severity, message, created_at)?;
        match self.queue.lock() {
            Ok(mut queue) => queue.push(alert.clone()),
            Err(_) => tracing::error!("alert queue lock poisoned, alert not queued"),
        }
        Ok(alert)
    }

    pub fn pending(&self) -> usize {
        self.queue.lock().map(|q| q.len()).unwrap_or(0)
    }

    /// Drain loop: pop one alert per emission interval and broadcast it.
    /// Runs until the process exits; a poisoned lock is logged and the
    /// loop keeps going.
    pub async fn run(self: Arc<Self>) {
        tracing::info!("alert scheduler started");
        loop {
            let next = match self.queue.lock() {
                Ok(mut queue) => queue.pop(),
                Err(_) => {
                    tracing::error!("alert queue lock poisoned");
                    None
                }
            };

            match next {
                Some(alert) => {
                    tracing::debug!(
                        alert_id = alert.id,
                        patient_id = alert.patient_id,
                        severity = alert.severity.as_str(),
                        "emitting alert"
                    );
                    self.events.publish(Event::AlertRaised { alert });
                    tokio::time::sleep(self.emit_interval).await;
                }
                None => tokio::time::sleep(self.idle_sleep).await,
            }
        }
    }
}
