//! Live event fan-out to connected dashboard clients.
//!
//! Producers (monitor loop, alert scheduler) publish into a broadcast
//! channel; every WebSocket connection holds its own receiver. A slow
//! client lags and drops events instead of blocking producers.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::models::{Alert, Severity, VitalSigns};

/// Event pushed to dashboard clients as tagged JSON, e.g.
/// `{"event":"alert_raised","alert":{...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    PatientUpdate {
        patient_id: u32,
        vitals: VitalSigns,
        status: Severity,
    },
    AlertRaised {
        alert: Alert,
    },
}

#[derive(Clone)]
pub struct EventHub {
    tx: broadcast::Sender<Event>,
}

impl EventHub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish to all current subscribers. With no subscribers the
    /// event is simply dropped.
    pub fn publish(&self, event: Event) {
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_alert() -> Alert {
        Alert {
            id: 1,
            patient_id: 2,
            severity: Severity::Warning,
            message: "HR 131 bpm".into(),
            created_at: Utc::now(),
            acknowledged: false,
        }
    }

    #[tokio::test]
    async fn subscriber_receives_published_event() {
        let hub = EventHub::new(8);
        let mut rx = hub.subscribe();
        hub.publish(Event::AlertRaised {
            alert: sample_alert(),
        });
        match rx.recv().await.unwrap() {
            Event::AlertRaised { alert } => assert_eq!(alert.patient_id, 2),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn publish_without_subscribers_does_not_panic() {
        let hub = EventHub::new(8);
        hub.publish(Event::AlertRaised {
            alert: sample_alert(),
        });
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn events_serialize_with_snake_case_tag() {
        let json = serde_json::to_string(&Event::AlertRaised {
            alert: sample_alert(),
        })
        .unwrap();
        assert!(json.contains("\"event\":\"alert_raised\""));

        let json = serde_json::to_string(&Event::PatientUpdate {
            patient_id: 1,
            vitals: VitalSigns {
                heart_rate: 80,
                spo2: 98,
                systolic_bp: 120,
                diastolic_bp: 80,
                temperature: 36.8,
                timestamp: Utc::now(),
            },
            status: Severity::Info,
        })
        .unwrap();
        assert!(json.contains("\"event\":\"patient_update\""));
    }
}
