//! Domain model for the ward: patients, vital signs, alerts, and the
//! enums shared across the monitoring and web layers.

pub mod alert;
pub mod enums;
pub mod patient;
pub mod vitals;

pub use alert::Alert;
pub use enums::{Role, Severity, SimSpeed};
pub use patient::Patient;
pub use vitals::VitalSigns;
